//! Arrivals API error types

use thiserror::Error;

/// Errors that can occur while fetching station arrivals
#[derive(Debug, Error)]
pub enum ArrivalsError {
    /// Connection to the arrivals API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The API answered with a non-success status
    #[error("Request failed with HTTP {status}")]
    RequestFailed {
        /// HTTP status code returned by the API
        status: u16,
    },

    /// Response body is not a valid station snapshot
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl ArrivalsError {
    /// Returns true if a later poll may succeed where this one failed
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::Timeout { .. } => true,
            Self::RequestFailed { status } => *status >= 500 || *status == 429,
            Self::ParseError(_) | Self::ConfigurationError(_) => false,
        }
    }
}
