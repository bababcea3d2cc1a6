//! Retry policy for SWC API calls.
//!
//! A [`RetryPolicy`] is handed to the client at construction time. The client
//! asks it for a fresh [`ExponentialBackoff`] on every call and consults
//! [`RetryPolicy::is_retryable`] after each failed attempt.

use std::time::Duration;

use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use reqwest::StatusCode;

use crate::{config::SwcConfig, error::SwcError};

const DEFAULT_INITIAL_INTERVAL: Duration = Duration::from_millis(500);
const DEFAULT_MAX_INTERVAL: Duration = Duration::from_secs(10);
const DEFAULT_MULTIPLIER: f64 = 2.0;
const DEFAULT_RANDOMIZATION_FACTOR: f64 = 0.5;

/// Exponential backoff with jitter, bounded by a total time budget.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total time after which the last failure is returned
    pub max_elapsed: Duration,
    /// Delay before the first retry, before jitter
    pub initial_interval: Duration,
    /// Upper bound on a single delay
    pub max_interval: Duration,
    /// Growth factor applied after every retry
    pub multiplier: f64,
    /// Jitter: each delay is drawn from `interval * (1 ± factor)`
    pub randomization_factor: f64,
}

impl RetryPolicy {
    pub fn new(max_elapsed: Duration) -> Self {
        Self {
            max_elapsed,
            initial_interval: DEFAULT_INITIAL_INTERVAL,
            max_interval: DEFAULT_MAX_INTERVAL,
            multiplier: DEFAULT_MULTIPLIER,
            randomization_factor: DEFAULT_RANDOMIZATION_FACTOR,
        }
    }

    /// `None` when the config disables backoff.
    pub fn from_config(config: &SwcConfig) -> Option<Self> {
        config
            .backoff_enabled()
            .then(|| Self::new(Duration::from_secs(config.backoff_max_seconds())))
    }

    pub fn with_initial_interval(mut self, interval: Duration) -> Self {
        self.initial_interval = interval;
        self
    }

    pub fn with_max_interval(mut self, interval: Duration) -> Self {
        self.max_interval = interval;
        self
    }

    /// A new backoff schedule whose elapsed-time clock starts now.
    pub fn backoff(&self) -> ExponentialBackoff {
        self.into()
    }

    /// Transport failures and 5xx, 408 or 429 responses are retried.
    /// Other client errors and bad payloads never are.
    pub fn is_retryable(error: &SwcError) -> bool {
        match error {
            // JSON is decoded with serde_json, so a reqwest decode error can
            // only come from a body stream cut short
            SwcError::Transport(e) => {
                e.is_timeout() || e.is_connect() || e.is_request() || e.is_body() || e.is_decode()
            }
            SwcError::HttpStatus { status, .. } => is_retryable_status(*status),
            SwcError::Configuration { .. }
            | SwcError::InvalidArgument { .. }
            | SwcError::Deserialization(_)
            | SwcError::InvalidUrl(_) => false,
        }
    }
}

impl From<&RetryPolicy> for ExponentialBackoff {
    fn from(policy: &RetryPolicy) -> Self {
        ExponentialBackoffBuilder::default()
            .with_initial_interval(policy.initial_interval)
            .with_max_interval(policy.max_interval)
            .with_multiplier(policy.multiplier)
            .with_randomization_factor(policy.randomization_factor)
            .with_max_elapsed_time(Some(policy.max_elapsed))
            .build()
    }
}

fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
}
