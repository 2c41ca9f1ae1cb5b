use serde::{Deserialize, Serialize};

use super::chart::{ActionBucket, OwnerBucket, StatusBucket, TrendPoint};
use crate::model::entity::{DeploymentTask, Software};

/// List-page stat cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareStats {
    pub total: usize,
    pub unique_owners: usize,
    /// Records published within the last 7 days of the reference instant.
    pub published_this_week: usize,
    /// Records passing the active filter.
    pub matching: usize,
}

/// Detail-page stat cards. `in_progress` folds PENDING and RUNNING together;
/// unknown statuses count only toward `total`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentStats {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub in_progress: usize,
}

/// Everything the list page renders for one fetch of the catalog: stats and
/// ownership charts over the full collection, table rows filtered.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareOverview {
    pub stats: SoftwareStats,
    pub owner_bars: Vec<OwnerBucket>,
    pub owner_shares: Vec<OwnerBucket>,
    pub publish_trend: Vec<TrendPoint>,
    pub softwares: Vec<Software>,
}

/// Everything the detail page renders for one software's tasks.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentOverview {
    pub software_id: String,
    pub stats: DeploymentStats,
    pub status_dist: Vec<StatusBucket>,
    pub action_dist: Vec<ActionBucket>,
    pub daily_trend: Vec<TrendPoint>,
    pub tasks: Vec<DeploymentTask>,
}
