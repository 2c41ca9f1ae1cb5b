use serde::{Deserialize, Serialize};

use crate::model::entity::{TaskAction, TaskStatus};

/// Palette cycled over action buckets by first-occurrence index.
pub const ACTION_PALETTE: [&str; 3] = ["#8884d8", "#82ca9d", "#ffc658"];

/// Palette cycled over owner buckets by first-occurrence index.
pub const OWNER_PALETTE: [&str; 6] =
    ["#8884d8", "#82ca9d", "#ffc658", "#ff7c7c", "#8dd1e1", "#d084d0"];

/// Color of the default bucket for statuses outside the known set.
pub const DEFAULT_BUCKET_COLOR: &str = "#6b7280";

/// Chart color for a task status.
pub fn status_color(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Succeed => "#10b981",
        TaskStatus::Failed => "#ef4444",
        TaskStatus::Pending => "#f59e0b",
        TaskStatus::Running => "#3b82f6",
        TaskStatus::Unknown => DEFAULT_BUCKET_COLOR,
    }
}

/// One slice of the task-status pie.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusBucket {
    pub status: TaskStatus,
    pub count: usize,
    pub color: String,
}

/// One bar of the action-type chart.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionBucket {
    pub action: TaskAction,
    pub count: usize,
    pub color: String,
}

/// One day on a trend line. `day` keeps the ISO form (or `unknown` for
/// unparseable task dates) for sorting and tooltips; `label` is the `MM/DD`
/// display form.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub day: String,
    pub label: String,
    pub count: usize,
}

/// One owner on the ownership charts. `owner` is the untruncated value kept
/// for tooltips; `label` is the truncated display form.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerBucket {
    pub owner: String,
    pub label: String,
    pub count: usize,
    /// Share of the total, `0.0..=1.0`. Zero for an empty input, never NaN.
    pub share: f64,
    pub color: String,
}

impl OwnerBucket {
    /// Re-derives the display label at another width.
    pub fn with_label_width(mut self, width: usize) -> Self {
        self.label = truncate_label(&self.owner, width);
        self
    }
}

/// Truncates a display label to `width` characters, marking the cut with an
/// `...` suffix.
pub fn truncate_label(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        format!("{}...", value.chars().take(width).collect::<String>())
    } else {
        value.to_string()
    }
}
