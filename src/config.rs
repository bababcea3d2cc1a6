//! Connection and behavior settings for the SWC client.
//!
//! [`SwcConfig`] is built explicitly by the caller. The environment is only
//! consulted through [`resolve_base_url`] and [`SwcConfig::from_env`], which
//! the CLI entry point calls before constructing a client.

use crate::error::{Result, SwcError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

#[cfg(test)]
mod tests;

pub const BASE_URL_ENV_VAR: &str = "SWC_API_BASE_URL";
pub const BACKOFF_ENV_VAR: &str = "SWC_BACKOFF";
pub const BACKOFF_MAX_TIME_ENV_VAR: &str = "SWC_BACKOFF_MAX_TIME";
pub const BULK_FILE_FORMAT_ENV_VAR: &str = "SWC_BULK_FILE_FORMAT";

pub const DEFAULT_BACKOFF_MAX_SECONDS: u64 = 30;

/// File format of the downloadable bulk data sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkFileFormat {
    #[default]
    Csv,
    Parquet,
}

impl BulkFileFormat {
    /// Only `"parquet"` selects Parquet; anything else means CSV.
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("parquet") {
            BulkFileFormat::Parquet
        } else {
            BulkFileFormat::Csv
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            BulkFileFormat::Csv => "csv",
            BulkFileFormat::Parquet => "parquet",
        }
    }
}

impl fmt::Display for BulkFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for BulkFileFormat {
    type Err = SwcError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::parse_lenient(s))
    }
}

/// Settings shared by every call a client makes.
///
/// # Examples
///
/// ```rust
/// use swc_sdk::{BulkFileFormat, SwcConfig};
///
/// let config = SwcConfig::new("http://localhost:8000")
///     .unwrap()
///     .with_backoff_max_seconds(10)
///     .with_bulk_file_format(BulkFileFormat::Parquet);
/// assert!(config.backoff_enabled());
/// assert_eq!(config.backoff_max_seconds(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwcConfig {
    base_url: String,
    backoff_enabled: bool,
    backoff_max_seconds: u64,
    bulk_file_format: BulkFileFormat,
    request_timeout: Option<Duration>,
}

impl SwcConfig {
    /// Create a config with default behavior toggles.
    ///
    /// Fails with [`SwcError::Configuration`] when `base_url` is blank.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(missing_base_url());
        }
        Ok(Self {
            base_url,
            backoff_enabled: true,
            backoff_max_seconds: DEFAULT_BACKOFF_MAX_SECONDS,
            bulk_file_format: BulkFileFormat::default(),
            request_timeout: None,
        })
    }

    /// Build a config from an optional explicit URL plus the process environment.
    ///
    /// Falls back to `SWC_API_BASE_URL` for the URL. Only the process
    /// environment is read; loading a `.env` file is left to the binary.
    /// Optional toggles that fail to parse keep their defaults.
    pub fn from_env(explicit_base_url: Option<String>) -> Result<Self> {
        let mut config = Self::new(resolve_base_url(explicit_base_url)?)?;

        if let Some(raw) = env_value(BACKOFF_ENV_VAR) {
            match parse_bool(&raw) {
                Some(enabled) => config.backoff_enabled = enabled,
                None => tracing::warn!(var = BACKOFF_ENV_VAR, value = %raw, "ignoring unparseable value"),
            }
        }
        if let Some(raw) = env_value(BACKOFF_MAX_TIME_ENV_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seconds) => config.backoff_max_seconds = seconds,
                Err(_) => tracing::warn!(var = BACKOFF_MAX_TIME_ENV_VAR, value = %raw, "ignoring unparseable value"),
            }
        }
        if let Some(raw) = env_value(BULK_FILE_FORMAT_ENV_VAR) {
            config.bulk_file_format = BulkFileFormat::parse_lenient(&raw);
        }

        Ok(config)
    }

    pub fn with_backoff(mut self, enabled: bool) -> Self {
        self.backoff_enabled = enabled;
        self
    }

    pub fn with_backoff_max_seconds(mut self, seconds: u64) -> Self {
        self.backoff_max_seconds = seconds;
        self
    }

    pub fn with_bulk_file_format(mut self, format: BulkFileFormat) -> Self {
        self.bulk_file_format = format;
        self
    }

    /// Per-attempt timeout. Unset means the transport defaults apply.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn backoff_enabled(&self) -> bool {
        self.backoff_enabled
    }

    pub fn backoff_max_seconds(&self) -> u64 {
        self.backoff_max_seconds
    }

    pub fn bulk_file_format(&self) -> BulkFileFormat {
        self.bulk_file_format
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Human-readable summary for diagnostics, with URL credentials masked.
    pub fn describe(&self) -> String {
        format!(
            "Base URL: {}, Backoff: {}, Max Backoff Time: {}, Bulk File Format: {}",
            redact_credentials(&self.base_url),
            self.backoff_enabled,
            self.backoff_max_seconds,
            self.bulk_file_format
        )
    }
}

impl fmt::Display for SwcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Pick the explicit URL if given, else `SWC_API_BASE_URL`.
pub fn resolve_base_url(explicit: Option<String>) -> Result<String> {
    explicit
        .filter(|s| !s.trim().is_empty())
        .or_else(|| env_value(BASE_URL_ENV_VAR))
        .ok_or_else(missing_base_url)
}

fn missing_base_url() -> SwcError {
    SwcError::configuration(format!(
        "base URL is required; pass it explicitly or set {BASE_URL_ENV_VAR}"
    ))
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn redact_credentials(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) if !url.username().is_empty() || url.password().is_some() => {
            // Both setters only fail for URLs that cannot carry credentials
            let _ = url.set_password(None);
            let _ = url.set_username("***");
            url.to_string()
        }
        _ => raw.to_string(),
    }
}
