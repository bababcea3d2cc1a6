//! Error types for the SWC SDK

use reqwest::StatusCode;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, SwcError>;

#[derive(Error, Debug)]
pub enum SwcError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("SWC API returned HTTP {} for {endpoint}", .status.as_u16())]
    HttpStatus {
        status: StatusCode,
        endpoint: String,
        body: String,
    },

    #[error("Failed to deserialize SWC API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SwcError {
    pub fn configuration(message: impl Into<String>) -> Self {
        SwcError::Configuration {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SwcError::InvalidArgument {
            message: message.into(),
        }
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SwcError::HttpStatus { status, .. } => Some(*status),
            SwcError::Transport(e) => e.status(),
            _ => None,
        }
    }
}
