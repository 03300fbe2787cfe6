//! Error types for the hookchat relay.
//!
//! Every failure is classified into one tagged variant and converted into a
//! descriptive string at the relay boundary; no error type ever crosses the
//! public `send_message` / `test_connection` surface.

use thiserror::Error;

/// Endpoint validation error. Produced by [`crate::relay::validate_url`]
/// before any network access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The endpoint string is empty or whitespace-only.
    #[error("Webhook URL is not configured")]
    Unconfigured,

    /// The endpoint parsed without a scheme or without a host.
    #[error("Invalid URL format")]
    MalformedUri,

    /// URL parsing itself failed.
    #[error("Invalid URL: {0}")]
    ParseFailure(String),
}

/// Relay call error, one variant per failure category.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The configured endpoint failed validation; no request was sent.
    #[error("Configuration error: {0}")]
    Config(#[from] ValidationError),

    /// The webhook answered with a non-200 status.
    #[error("Error: HTTP {status} - {body}")]
    Http { status: u16, body: String },

    /// Network-level failure: connection refused, timeout, DNS, TLS.
    #[error("Connection error: {0}")]
    Transport(String),

    /// Anything else, e.g. a 200 body that is not the expected JSON shape.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl RelayError {
    /// Deterministic mapping to the user-facing string returned by the relay.
    ///
    /// Configuration errors get a hint naming the environment variable, the
    /// rest render their display form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(reason) => format!(
                "Configuration error: {reason}. Please check your HOOKCHAT_WEBHOOK_URL \
                 environment variable."
            ),
            other => other.to_string(),
        }
    }

    /// Check if this is a configuration (validation) error.
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Classify a `reqwest` send failure. Timeouts, connect errors, and request
/// dispatch failures are all transport-level for our purposes.
impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() || err.is_redirect() {
            Self::Transport(err.to_string())
        } else {
            Self::Unexpected(err.to_string())
        }
    }
}
