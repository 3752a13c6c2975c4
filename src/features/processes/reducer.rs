use super::action::ProcessesAction;
use super::state::ProcessesState;

pub fn reduce(state: &ProcessesState, action: &ProcessesAction) -> ProcessesState {
    let mut next = state.clone();
    match action {
        ProcessesAction::FetchProcessDefinitions => {
            next.is_fetching_process_definitions = true;
            next.error = false;
            next.error_message = None;
        }
        ProcessesAction::FetchProcessDefinitionsSuccess(payload) => {
            next.is_fetching_process_definitions = false;
            next.process_definitions = payload
                .entity
                .as_array()
                .map(|items| items.iter().cloned().collect());
        }
        ProcessesAction::FetchProcessDefinitionsFailure(message) => {
            next.is_fetching_process_definitions = false;
            next.error = true;
            next.error_message = Some(message.clone());
        }
        ProcessesAction::FetchProcessDefinition(_) => {
            next.is_fetching_process_definition = true;
            next.error = false;
            next.error_message = None;
        }
        ProcessesAction::FetchProcessDefinitionSuccess(payload) => {
            next.is_fetching_process_definition = false;
            next.process_definition = Some(payload.entity.clone());
        }
        ProcessesAction::FetchProcessDefinitionFailure(message) => {
            next.is_fetching_process_definition = false;
            next.error = true;
            next.error_message = Some(message.clone());
        }
        ProcessesAction::Reset => next = ProcessesState::default(),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Response;
    use serde_json::json;

    #[test]
    fn definitions_are_retained_as_a_collection() {
        let state = reduce(
            &ProcessesState::default(),
            &ProcessesAction::FetchProcessDefinitionsSuccess(Response {
                status: 200,
                entity: json!([{"key": "intel-referral"}, {"key": "record-border-event"}]),
            }),
        );
        assert!(!state.is_fetching_process_definitions);
        assert_eq!(state.process_definitions.as_ref().map(|d| d.len()), Some(2));
    }

    #[test]
    fn a_failure_sets_the_error_marker_and_message() {
        let loading = reduce(
            &ProcessesState::default(),
            &ProcessesAction::FetchProcessDefinitions,
        );
        assert!(loading.is_fetching_process_definitions);
        let failed = reduce(
            &loading,
            &ProcessesAction::FetchProcessDefinitionsFailure(
                "The service responded with status 502".into(),
            ),
        );
        assert!(failed.error);
        assert!(failed.error_message.is_some());
        assert!(!failed.is_fetching_process_definitions);
    }

    #[test]
    fn a_new_request_clears_the_previous_error() {
        let failed = reduce(
            &ProcessesState::default(),
            &ProcessesAction::FetchProcessDefinitionsFailure("boom".into()),
        );
        let retried = reduce(&failed, &ProcessesAction::FetchProcessDefinitions);
        assert!(!retried.error);
        assert!(retried.error_message.is_none());
    }
}
