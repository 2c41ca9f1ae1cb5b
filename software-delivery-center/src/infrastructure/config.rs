use getset::Getters;
use serde::Deserialize;

use super::telemetry::TelemetryConfig;

#[derive(Default, Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct AppConfig {
    #[serde(default)]
    host: HostConfig,
    #[serde(default)]
    data_source: DataSourceConfig,
    #[serde(default)]
    telemetry: TelemetryConfig,
}

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct HostConfig {
    #[serde(default = "HostConfig::default_address")]
    bind_address: String,
    #[serde(default = "HostConfig::default_port")]
    bind_port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: Self::default_address(),
            bind_port: Self::default_port(),
        }
    }
}

impl HostConfig {
    fn default_address() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }
}

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct DataSourceConfig {
    /// Upstream catalog API base. Empty selects the built-in mock catalog.
    #[serde(default)]
    remote_url: String,
    #[serde(default = "DataSourceConfig::default_latency_min_msecs")]
    latency_min_msecs: u64,
    #[serde(default = "DataSourceConfig::default_latency_max_msecs")]
    latency_max_msecs: u64,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            remote_url: String::new(),
            latency_min_msecs: Self::default_latency_min_msecs(),
            latency_max_msecs: Self::default_latency_max_msecs(),
        }
    }
}

impl DataSourceConfig {
    fn default_latency_min_msecs() -> u64 {
        100
    }

    fn default_latency_max_msecs() -> u64 {
        400
    }
}

pub fn build_config() -> anyhow::Result<config::Config> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = config::Config::builder().add_source(
        config::File::with_name("config")
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    for arg in args {
        if arg.ends_with("yaml") || arg.ends_with("yml") {
            config = config.add_source(
                config::File::from(std::path::Path::new(arg.as_str()))
                    .format(config::FileFormat::Yaml)
                    .required(false),
            );
        }
    }
    config = config.add_source(
        config::Environment::with_prefix("SDC").separator("__").try_parsing(true),
    );
    Ok(config.build()?)
}
