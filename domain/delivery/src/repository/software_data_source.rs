use async_trait::async_trait;

use crate::model::{
    entity::{DeploymentTask, Software},
    vo::ResponseEnvelope,
};

/// Read-only upstream catalog the dashboard is built over.
///
/// Both calls are idempotent and side-effect free from the caller's view.
/// Failures come back as ERROR envelopes with empty data; implementations
/// never panic or leak transport errors past this boundary.
#[async_trait]
pub trait SoftwareDataSource: Send + Sync {
    /// All published software records, one immutable snapshot per call.
    async fn list_software(&self) -> ResponseEnvelope<Vec<Software>>;

    /// Per-host deployment tasks for one software id.
    ///
    /// An empty or blank id fails fast with an ERROR envelope, without an
    /// outbound call.
    async fn list_deployment_tasks(
        &self,
        software_id: &str,
    ) -> ResponseEnvelope<Vec<DeploymentTask>>;
}
