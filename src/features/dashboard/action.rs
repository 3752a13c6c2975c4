use crate::environment::Response;

#[derive(Clone, Debug)]
pub enum DashboardAction {
    FetchTaskCounts,
    FetchTaskCountsSuccess(Response),
    FetchTaskCountsFailure(String),

    FetchNotificationsCount,
    FetchNotificationsCountSuccess(Response),
    FetchNotificationsCountFailure(String),

    Reset,
}
