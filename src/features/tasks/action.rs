use crate::environment::Response;

#[derive(Clone, Debug)]
pub enum TasksAction {
    FetchYourTasks,
    FetchYourTasksSuccess(Response),
    FetchYourTasksFailure(String),

    FetchYourGroupTasks,
    FetchYourGroupTasksSuccess(Response),
    FetchYourGroupTasksFailure(String),

    FetchUnassignedTasks,
    FetchUnassignedTasksSuccess(Response),
    FetchUnassignedTasksFailure(String),

    SetSortValue(String),
    SetFilterValue(String),

    Reset,
}
