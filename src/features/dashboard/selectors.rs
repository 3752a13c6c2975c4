use crate::store::AppState;

use super::state::TaskCounts;

pub fn is_fetching_task_counts(state: &AppState) -> bool {
    state.dashboard.is_fetching_task_counts
}

pub fn task_counts(state: &AppState) -> Option<&TaskCounts> {
    state.dashboard.task_counts.as_ref()
}

pub fn task_counts_error(state: &AppState) -> Option<&str> {
    state.dashboard.task_counts_error.as_deref()
}

pub fn is_fetching_notifications_count(state: &AppState) -> bool {
    state.dashboard.is_fetching_notifications_count
}

pub fn notifications_count(state: &AppState) -> Option<i64> {
    state.dashboard.notifications_count
}

pub fn notifications_count_error(state: &AppState) -> Option<&str> {
    state.dashboard.notifications_count_error.as_deref()
}
