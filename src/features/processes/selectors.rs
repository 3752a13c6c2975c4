use serde_json::Value;

use crate::store::AppState;

pub fn is_fetching_process_definitions(state: &AppState) -> bool {
    state.processes.is_fetching_process_definitions
}

pub fn process_definitions(state: &AppState) -> Option<&im::Vector<Value>> {
    state.processes.process_definitions.as_ref()
}

pub fn has_error(state: &AppState) -> bool {
    state.processes.error
}

pub fn error_message(state: &AppState) -> Option<&str> {
    state.processes.error_message.as_deref()
}

pub fn is_fetching_process_definition(state: &AppState) -> bool {
    state.processes.is_fetching_process_definition
}

pub fn process_definition(state: &AppState) -> Option<&Value> {
    state.processes.process_definition.as_ref()
}
