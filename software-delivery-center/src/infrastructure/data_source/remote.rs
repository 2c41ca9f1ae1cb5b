use async_trait::async_trait;
use domain_delivery::{
    exception::{DeliveryError, DeliveryResult},
    model::{
        entity::{DeploymentTask, Software},
        vo::ResponseEnvelope,
    },
    repository::SoftwareDataSource,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::super::config::DataSourceConfig;

/// Catalog client against the real delivery API. Both endpoints return bare
/// JSON arrays; every transport or decode failure renders into an ERROR
/// envelope instead of escaping.
pub struct RemoteDataSource {
    client: Client,
    base_url: String,
}

impl RemoteDataSource {
    pub fn new(config: &DataSourceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().user_agent("SDC/1.0").build()?,
            base_url: config.remote_url().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> DeliveryResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DeliveryError::InternalError { source: e.into() })?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Upstream {
                status: status.as_u16(),
            });
        }
        response.json::<T>().await.map_err(|e| DeliveryError::Decode {
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl SoftwareDataSource for RemoteDataSource {
    async fn list_software(&self) -> ResponseEnvelope<Vec<Software>> {
        match self.fetch("softwares").await {
            Ok(data) => ResponseEnvelope::ok(data),
            Err(e) => {
                tracing::error!("{e}");
                e.into()
            }
        }
    }

    async fn list_deployment_tasks(
        &self,
        software_id: &str,
    ) -> ResponseEnvelope<Vec<DeploymentTask>> {
        if software_id.trim().is_empty() {
            // Fail fast, no outbound call.
            return DeliveryError::EmptySoftwareId.into();
        }
        match self.fetch(&format!("softwares/{software_id}/tasks")).await {
            Ok(data) => ResponseEnvelope::ok(data),
            Err(e) => {
                tracing::error!("{e}");
                e.into()
            }
        }
    }
}
