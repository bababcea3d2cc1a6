//! Helpers shared by the command handlers.

use serde::Serialize;

use crate::{cli::Swc, config::SwcConfig, swc::SwcClient, Result};

/// Flags that override the environment-derived config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub no_backoff: bool,
    pub backoff_max_time: Option<u64>,
    pub bulk_file_format: Option<crate::config::BulkFileFormat>,
}

impl From<&Swc> for ConfigOverrides {
    fn from(app: &Swc) -> Self {
        Self {
            no_backoff: app.no_backoff,
            backoff_max_time: app.backoff_max_time,
            bulk_file_format: app.bulk_file_format,
        }
    }
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: SwcConfig) -> SwcConfig {
        if self.no_backoff {
            config = config.with_backoff(false);
        }
        if let Some(seconds) = self.backoff_max_time {
            config = config.with_backoff_max_seconds(seconds);
        }
        if let Some(format) = self.bulk_file_format {
            config = config.with_bulk_file_format(format);
        }
        config
    }
}

/// Resolve config from flags plus environment and build the client.
pub fn build_client(app: &Swc) -> Result<SwcClient> {
    let config = SwcConfig::from_env(app.base_url.clone())?;
    let config = ConfigOverrides::from(app).apply(config);
    tracing::debug!(config = %config, "resolved configuration");
    SwcClient::new(config)
}

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}
