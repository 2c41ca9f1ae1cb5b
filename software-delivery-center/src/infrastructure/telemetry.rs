use getset::Getters;
use serde::Deserialize;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct TelemetryConfig {
    #[serde(default = "TelemetryConfig::default_enable")]
    enable: bool,
    /// Default filter directives, e.g. `info,software_delivery_center=debug`.
    #[serde(default = "TelemetryConfig::default_level_filter")]
    level_filter: String,
    #[serde(default)]
    console: ConsoleConfig,
    #[serde(default)]
    file: FileConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: Self::default_enable(),
            level_filter: Self::default_level_filter(),
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl TelemetryConfig {
    fn default_enable() -> bool {
        true
    }

    fn default_level_filter() -> String {
        "info".to_string()
    }
}

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct ConsoleConfig {
    #[serde(default = "ConsoleConfig::default_enable")]
    enable: bool,
    /// Adds file, line and thread ids to every event.
    #[serde(default)]
    enable_debug_logging: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enable: Self::default_enable(),
            enable_debug_logging: false,
        }
    }
}

impl ConsoleConfig {
    fn default_enable() -> bool {
        true
    }
}

#[derive(Deserialize, Clone, Debug, Getters)]
#[getset(get = "pub")]
pub struct FileConfig {
    #[serde(default)]
    enable: bool,
    #[serde(default = "FileConfig::default_path")]
    path: String,
    #[serde(default = "FileConfig::default_prefix")]
    prefix: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: Self::default_path(),
            prefix: Self::default_prefix(),
        }
    }
}

impl FileConfig {
    fn default_path() -> String {
        "logs".to_string()
    }

    fn default_prefix() -> String {
        "software-delivery-center".to_string()
    }
}

/// Installs the global subscriber: EnvFilter plus the configured console and
/// daily-rolling file layers. A disabled config is a no-op.
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable() {
        return Ok(());
    }
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(config.level_filter().as_str());
    let console = if *config.console().enable() {
        let enable_debug_logging = *config.console().enable_debug_logging();
        Some(
            tracing_subscriber::fmt::layer()
                .with_file(enable_debug_logging)
                .with_line_number(enable_debug_logging)
                .with_thread_ids(enable_debug_logging)
                .with_target(enable_debug_logging),
        )
    } else {
        None
    };
    let file = if *config.file().enable() {
        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, config.file().path(), config.file().prefix());
        Some(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_appender))
    } else {
        None
    };
    Registry::default().with(filter).with(console).with(file).try_init()?;
    Ok(())
}
