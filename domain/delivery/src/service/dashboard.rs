use async_trait::async_trait;

use crate::model::vo::{
    dashboard::{DeploymentOverview, SoftwareOverview},
    FilterState, ResponseEnvelope,
};

/// Turns raw catalog fetches into chart- and table-ready view models.
///
/// Every call re-fetches and fully replaces prior data; implementations hold
/// no state between calls. A data-source ERROR envelope propagates as an
/// ERROR envelope with the same message and empty view data; zero matching
/// records is SUCCESS with empty collections.
#[async_trait]
pub trait DashboardService: Send + Sync {
    /// List-page view model: stats and ownership charts over the full fetch,
    /// table rows filtered by `filter` in original order.
    async fn software_overview(&self, filter: FilterState) -> ResponseEnvelope<SoftwareOverview>;

    /// Detail-page view model for one software id.
    async fn deployment_overview(&self, software_id: &str)
        -> ResponseEnvelope<DeploymentOverview>;
}
