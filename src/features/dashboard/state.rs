use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard panels, as the workflow service
/// reports them.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCounts {
    #[serde(default)]
    pub tasks_assigned_to_user: i64,
    #[serde(default)]
    pub tasks_unassigned: i64,
    #[serde(default)]
    pub total_tasks: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub is_fetching_task_counts: bool,
    pub task_counts: Option<TaskCounts>,
    pub task_counts_error: Option<String>,

    pub is_fetching_notifications_count: bool,
    pub notifications_count: Option<i64>,
    pub notifications_count_error: Option<String>,
}
