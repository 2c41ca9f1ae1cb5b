use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_delivery::{
    model::vo::{
        dashboard::{DeploymentOverview, SoftwareOverview},
        FilterState, ResponseEnvelope,
    },
    repository::SoftwareDataSource,
    service::DashboardService,
};
use typed_builder::TypedBuilder;

use crate::{aggregate, filter};

/// Stateless view-model assembly over an injected data source. Every call
/// re-fetches; nothing is cached or merged between calls.
#[derive(TypedBuilder)]
pub struct DashboardServiceImpl {
    data_source: Arc<dyn SoftwareDataSource>,
}

#[async_trait]
impl DashboardService for DashboardServiceImpl {
    async fn software_overview(&self, state: FilterState) -> ResponseEnvelope<SoftwareOverview> {
        let catalog = self.data_source.list_software().await;
        if !catalog.is_success() {
            tracing::warn!("Software catalog unavailable: {}", catalog.err_msg);
            return ResponseEnvelope::error(catalog.err_msg);
        }
        let softwares = catalog.data;
        let matching = filter::matching_records(&softwares, &state);
        let owner_bars = aggregate::owner_distribution(&softwares);
        let owner_shares = owner_bars
            .iter()
            .cloned()
            .map(|bucket| bucket.with_label_width(aggregate::OWNER_PIE_LABEL_WIDTH))
            .collect();
        ResponseEnvelope::ok(SoftwareOverview {
            stats: aggregate::software_stats(&softwares, matching.len(), Utc::now()),
            owner_bars,
            owner_shares,
            publish_trend: aggregate::publish_daily_trend(&softwares),
            softwares: matching,
        })
    }

    async fn deployment_overview(
        &self,
        software_id: &str,
    ) -> ResponseEnvelope<DeploymentOverview> {
        let response = self.data_source.list_deployment_tasks(software_id).await;
        if !response.is_success() {
            tracing::warn!(
                "Deployment tasks unavailable for {software_id}: {}",
                response.err_msg
            );
            return ResponseEnvelope::error(response.err_msg);
        }
        let tasks = response.data;
        ResponseEnvelope::ok(DeploymentOverview {
            software_id: software_id.to_string(),
            stats: aggregate::deployment_stats(&tasks),
            status_dist: aggregate::status_distribution(&tasks),
            action_dist: aggregate::action_distribution(&tasks),
            daily_trend: aggregate::task_daily_trend(&tasks),
            tasks,
        })
    }
}
