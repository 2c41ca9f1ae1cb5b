use serde::{Deserialize, Serialize};

/// One host-level delivery attempt tied to a software record.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentTask {
    pub task_id: String,
    pub hostname: String,
    pub owner: String,
    pub action: TaskAction,
    pub task_status: TaskStatus,
    /// Upstream snapshot string, `YYYY-MM-DD HH:MM:SS`. Interpreted only by
    /// the calendar-day normalization during aggregation.
    pub update_date: String,
}

/// What the task did on its host. Wire values outside the closed set
/// deserialize to `Unknown` and aggregate under the default bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskAction {
    #[default]
    Install,
    Uninstall,
    Update,
    #[serde(other)]
    Unknown,
}

/// Terminal or in-progress task state, same unknown-tolerance as
/// [`TaskAction`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Succeed,
    Failed,
    #[default]
    Pending,
    Running,
    #[serde(other)]
    Unknown,
}
