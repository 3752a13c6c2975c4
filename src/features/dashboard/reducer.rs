use serde_json::Value;

use super::action::DashboardAction;
use super::state::{DashboardState, TaskCounts};

pub fn reduce(state: &DashboardState, action: &DashboardAction) -> DashboardState {
    let mut next = state.clone();
    match action {
        DashboardAction::FetchTaskCounts => {
            next.is_fetching_task_counts = true;
            next.task_counts_error = None;
        }
        DashboardAction::FetchTaskCountsSuccess(payload) => {
            next.is_fetching_task_counts = false;
            next.task_counts = decode_task_counts(&payload.entity);
        }
        DashboardAction::FetchTaskCountsFailure(message) => {
            next.is_fetching_task_counts = false;
            next.task_counts_error = Some(message.clone());
        }
        DashboardAction::FetchNotificationsCount => {
            next.is_fetching_notifications_count = true;
            next.notifications_count_error = None;
        }
        DashboardAction::FetchNotificationsCountSuccess(payload) => {
            next.is_fetching_notifications_count = false;
            next.notifications_count = decode_count(&payload.entity);
        }
        DashboardAction::FetchNotificationsCountFailure(message) => {
            next.is_fetching_notifications_count = false;
            next.notifications_count_error = Some(message.clone());
        }
        DashboardAction::Reset => next = DashboardState::default(),
    }
    next
}

fn decode_task_counts(entity: &Value) -> Option<TaskCounts> {
    match serde_json::from_value(entity.clone()) {
        Ok(counts) => Some(counts),
        Err(error) => {
            log::error!("undecodable task counts: {error}");
            None
        }
    }
}

/// The notifications endpoint answers `{"count": n}` when asked for counts
/// only; older deployments answer with a bare number.
fn decode_count(entity: &Value) -> Option<i64> {
    entity
        .get("count")
        .and_then(Value::as_i64)
        .or_else(|| entity.as_i64())
}
