use serde_json::Value;

pub const DEFAULT_SORT: &str = "sort=due,desc";

#[derive(Clone, Debug, PartialEq)]
pub struct TasksState {
    pub loading_your_tasks: bool,
    pub your_tasks: im::Vector<Value>,

    pub loading_your_group_tasks: bool,
    pub your_group_tasks: im::Vector<Value>,

    pub loading_unassigned_tasks: bool,
    pub unassigned_tasks: im::Vector<Value>,

    pub sort_value: String,
    pub filter_value: Option<String>,

    pub error: Option<String>,
}

impl Default for TasksState {
    fn default() -> Self {
        Self {
            loading_your_tasks: false,
            your_tasks: im::Vector::new(),
            loading_your_group_tasks: false,
            your_group_tasks: im::Vector::new(),
            loading_unassigned_tasks: false,
            unassigned_tasks: im::Vector::new(),
            sort_value: DEFAULT_SORT.to_string(),
            filter_value: None,
            error: None,
        }
    }
}
