use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProcessesState {
    pub is_fetching_process_definitions: bool,
    pub process_definitions: Option<im::Vector<Value>>,

    pub is_fetching_process_definition: bool,
    pub process_definition: Option<Value>,

    pub error: bool,
    pub error_message: Option<String>,
}
