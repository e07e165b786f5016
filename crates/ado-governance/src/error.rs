//! Error types for the governance client

use crate::http_client::AdoResponse;
use thiserror::Error;

/// Errors raised by the client and its collaborators
#[derive(Debug, Error)]
pub enum AdoError {
    /// The API answered with a non-success status.
    ///
    /// Raised uniformly for every non-2xx response; the raw response is kept
    /// so callers can inspect the status and body.
    #[error("{message} (HTTP {status})", status = .response.status)]
    Http {
        /// Description naming the resources involved
        message: String,
        /// Response returned by the API
        response: Box<AdoResponse>,
    },

    /// The request never produced a response (DNS, connect, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// No token in the environment variable named by the configuration
    #[error("No token was available for identifier: {0}")]
    MissingToken(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl AdoError {
    /// Build an [`AdoError::Http`] from a failed response
    pub fn http(message: impl Into<String>, response: AdoResponse) -> Self {
        Self::Http {
            message: message.into(),
            response: Box::new(response),
        }
    }

    /// The API response, if this error carries one
    pub fn response(&self) -> Option<&AdoResponse> {
        match self {
            Self::Http { response, .. } => Some(response),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type AdoResult<T> = Result<T, AdoError>;
