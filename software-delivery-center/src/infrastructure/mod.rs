mod config;
mod data_source;
mod service_provider;
mod telemetry;

#[rustfmt::skip]
pub use {
    config::{build_config, AppConfig, DataSourceConfig, HostConfig},
    data_source::{MockDataSource, RemoteDataSource},
    service_provider::ServiceProvider,
    telemetry::{initialize_telemetry, TelemetryConfig},
};
