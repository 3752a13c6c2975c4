use serde_json::Value;

use crate::store::AppState;

pub fn loading_your_tasks(state: &AppState) -> bool {
    state.tasks.loading_your_tasks
}

pub fn your_tasks(state: &AppState) -> &im::Vector<Value> {
    &state.tasks.your_tasks
}

pub fn loading_your_group_tasks(state: &AppState) -> bool {
    state.tasks.loading_your_group_tasks
}

pub fn your_group_tasks(state: &AppState) -> &im::Vector<Value> {
    &state.tasks.your_group_tasks
}

pub fn loading_unassigned_tasks(state: &AppState) -> bool {
    state.tasks.loading_unassigned_tasks
}

pub fn unassigned_tasks(state: &AppState) -> &im::Vector<Value> {
    &state.tasks.unassigned_tasks
}

pub fn sort_value(state: &AppState) -> &str {
    &state.tasks.sort_value
}

pub fn filter_value(state: &AppState) -> Option<&str> {
    state.tasks.filter_value.as_deref()
}

pub fn tasks_error(state: &AppState) -> Option<&str> {
    state.tasks.error.as_deref()
}
