use std::sync::Arc;

use domain_delivery::{repository::SoftwareDataSource, service::DashboardService};
use getset::Getters;
use service_delivery::DashboardServiceImpl;

use super::config::AppConfig;
use super::data_source::{MockDataSource, RemoteDataSource};

/// Composition root. Built once at startup and handed to every request
/// handler through `actix_web::web::Data`.
#[derive(Getters)]
#[getset(get = "pub")]
pub struct ServiceProvider {
    config: AppConfig,
    data_source: Arc<dyn SoftwareDataSource>,
    dashboard_service: Arc<dyn DashboardService>,
}

impl ServiceProvider {
    pub fn build(config: config::Config) -> anyhow::Result<Self> {
        let config: AppConfig = config.try_deserialize()?;

        let source_config = config.data_source();
        let data_source: Arc<dyn SoftwareDataSource> = if source_config.remote_url().is_empty() {
            Arc::new(
                MockDataSource::builder()
                    .latency_msecs(
                        *source_config.latency_min_msecs()..=*source_config.latency_max_msecs(),
                    )
                    .build(),
            )
        } else {
            Arc::new(RemoteDataSource::new(source_config)?)
        };

        let dashboard_service: Arc<dyn DashboardService> = Arc::new(
            DashboardServiceImpl::builder().data_source(data_source.clone()).build(),
        );

        Ok(Self {
            config,
            data_source,
            dashboard_service,
        })
    }
}
