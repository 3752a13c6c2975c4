use serde_json::Value;

use crate::environment::Response;

use super::action::TasksAction;
use super::state::TasksState;

pub fn reduce(state: &TasksState, action: &TasksAction) -> TasksState {
    let mut next = state.clone();
    match action {
        TasksAction::FetchYourTasks => {
            next.loading_your_tasks = true;
            next.error = None;
        }
        TasksAction::FetchYourTasksSuccess(payload) => {
            next.loading_your_tasks = false;
            next.your_tasks = decode_tasks(payload);
        }
        TasksAction::FetchYourTasksFailure(message) => {
            next.loading_your_tasks = false;
            next.error = Some(message.clone());
        }
        TasksAction::FetchYourGroupTasks => {
            next.loading_your_group_tasks = true;
            next.error = None;
        }
        TasksAction::FetchYourGroupTasksSuccess(payload) => {
            next.loading_your_group_tasks = false;
            next.your_group_tasks = decode_tasks(payload);
        }
        TasksAction::FetchYourGroupTasksFailure(message) => {
            next.loading_your_group_tasks = false;
            next.error = Some(message.clone());
        }
        TasksAction::FetchUnassignedTasks => {
            next.loading_unassigned_tasks = true;
            next.error = None;
        }
        TasksAction::FetchUnassignedTasksSuccess(payload) => {
            next.loading_unassigned_tasks = false;
            next.unassigned_tasks = decode_tasks(payload);
        }
        TasksAction::FetchUnassignedTasksFailure(message) => {
            next.loading_unassigned_tasks = false;
            next.error = Some(message.clone());
        }
        TasksAction::SetSortValue(sort) => next.sort_value = sort.clone(),
        TasksAction::SetFilterValue(filter) => next.filter_value = Some(filter.clone()),
        TasksAction::Reset => next = TasksState::default(),
    }
    next
}

/// Task lists arrive either bare or wrapped in a `tasks` envelope.
fn decode_tasks(payload: &Response) -> im::Vector<Value> {
    let items = payload
        .entity
        .get("tasks")
        .and_then(Value::as_array)
        .or_else(|| payload.entity.as_array());
    items
        .map(|items| items.iter().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::tasks::state::DEFAULT_SORT;
    use serde_json::json;

    fn tasks(entity: Value) -> Response {
        Response {
            status: 200,
            entity,
        }
    }

    #[test]
    fn decodes_bare_and_enveloped_task_lists() {
        let bare = reduce(
            &TasksState::default(),
            &TasksAction::FetchYourTasksSuccess(tasks(json!([{"id": "t1"}, {"id": "t2"}]))),
        );
        assert_eq!(bare.your_tasks.len(), 2);

        let enveloped = reduce(
            &TasksState::default(),
            &TasksAction::FetchYourGroupTasksSuccess(tasks(json!({"tasks": [{"id": "t3"}]}))),
        );
        assert_eq!(enveloped.your_group_tasks.len(), 1);
    }

    #[test]
    fn each_list_has_its_own_loading_flag() {
        let state = reduce(&TasksState::default(), &TasksAction::FetchUnassignedTasks);
        assert!(state.loading_unassigned_tasks);
        assert!(!state.loading_your_tasks);
        assert!(!state.loading_your_group_tasks);
    }

    #[test]
    fn reset_restores_the_default_sort() {
        let state = reduce(
            &TasksState::default(),
            &TasksAction::SetSortValue("sort=priority,asc".to_string()),
        );
        let state = reduce(&state, &TasksAction::Reset);
        assert_eq!(state.sort_value, DEFAULT_SORT);
        assert_eq!(state, TasksState::default());
    }
}
