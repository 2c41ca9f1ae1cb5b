use async_trait::async_trait;
use mockall::mock;

use crate::{
    model::{
        entity::{DeploymentTask, Software},
        vo::ResponseEnvelope,
    },
    repository::SoftwareDataSource,
};

mock! {
    pub SoftwareDataSource {}
    #[async_trait]
    impl SoftwareDataSource for SoftwareDataSource {
        async fn list_software(&self) -> ResponseEnvelope<Vec<Software>>;
        async fn list_deployment_tasks(
            &self,
            software_id: &str,
        ) -> ResponseEnvelope<Vec<DeploymentTask>>;
    }
}
