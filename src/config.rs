use anyhow::Result;
use chrono::NaiveDate;
use common::ReportConfigOverrides;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Prefix of the environment variables read into [`AppConfig`].
pub const ENV_PREFIX: &str = "CRM_REPORTS";

/// Settings of the report preview tool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Pins "today" so presets resolve reproducibly
    pub today: Option<NaiveDate>,
    /// Overrides merged over the default report configuration
    pub defaults: ReportConfigOverrides,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            today: None,
            defaults: ReportConfigOverrides::default(),
        }
    }
}

/// Loads the configuration from an optional file and the environment.
///
/// Environment variables win over the file, e.g. `CRM_REPORTS_LOG_LEVEL=debug`
/// or `CRM_REPORTS_DEFAULTS__REPORT_TYPE=leads`.
pub fn load_config(path: &str) -> Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Installs the global tracing subscriber, `RUST_LOG` taking precedence.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
