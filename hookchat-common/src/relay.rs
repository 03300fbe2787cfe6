//! Message relay to the configured workflow-automation webhook.
//!
//! The relay does exactly one thing per user action: validate the endpoint,
//! POST `{"message", "history"}` and normalize the outcome into a single
//! string. Single attempt, no retries; a failure is reported immediately and
//! the human retries by resubmitting.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{RelayError, ValidationError};
use crate::session::{ConversationTurn, Session};

/// Number of recent turns sent to the webhook as context.
pub const HISTORY_WINDOW: usize = 10;

/// Substitute reply when the webhook answers 200 without a `response` field.
pub const NO_RESPONSE: &str = "No response received";

/// Timeout for normal chat requests.
const CHAT_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for connection-test probes.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Validate a webhook endpoint string. Pure, no network access.
///
/// An endpoint is valid when it parses as an absolute URL with both a scheme
/// and a host. Missing either is [`ValidationError::MalformedUri`]; any other
/// parse error is [`ValidationError::ParseFailure`].
pub fn validate_url(endpoint: &str) -> Result<(), ValidationError> {
    if endpoint.trim().is_empty() {
        return Err(ValidationError::Unconfigured);
    }

    match Url::parse(endpoint) {
        Ok(url) => {
            if url.host_str().map_or(true, str::is_empty) {
                return Err(ValidationError::MalformedUri);
            }
            Ok(())
        }
        Err(url::ParseError::RelativeUrlWithoutBase | url::ParseError::EmptyHost) => {
            Err(ValidationError::MalformedUri)
        }
        Err(e) => Err(ValidationError::ParseFailure(e.to_string())),
    }
}

/// Outbound request body.
#[derive(Debug, Serialize)]
struct WebhookRequest<'a> {
    message: &'a str,
    history: &'a [ConversationTurn],
}

/// Expected webhook reply. The `response` field is optional by contract.
#[derive(Debug, Deserialize)]
struct WebhookReply {
    #[serde(default)]
    response: Option<String>,
}

/// Relay to a single webhook endpoint.
///
/// Holds the endpoint string and a reusable HTTP client. The endpoint may be
/// overridden between calls; it is re-validated on every send.
pub struct Relay {
    webhook_url: String,
    client: reqwest::Client,
}

impl Relay {
    /// Create a relay for the given endpoint. The endpoint may be empty or
    /// invalid; sends will then short-circuit with a configuration error.
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// The currently configured endpoint.
    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    /// Override the endpoint for subsequent calls.
    pub fn set_webhook_url(&mut self, url: impl Into<String>) {
        self.webhook_url = url.into();
    }

    /// Send a user message with the session's recent history as context.
    ///
    /// Always returns a string: either the webhook's reply or a descriptive
    /// error. On success (and only then) the completed turn is appended to
    /// the session.
    pub async fn send_message(&self, message: &str, session: &mut Session) -> String {
        match self.try_send(message, session).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::debug!(error = %err, "relay send failed");
                err.user_message()
            }
        }
    }

    async fn try_send(&self, message: &str, session: &mut Session) -> Result<String, RelayError> {
        // The endpoint may have been overridden since the last call
        validate_url(&self.webhook_url)?;

        tracing::debug!(endpoint = %self.webhook_url, "posting message to webhook");
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&WebhookRequest {
                message,
                history: session.context_window(),
            })
            .timeout(CHAT_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await?;
            return Err(RelayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let reply: WebhookReply = response
            .json()
            .await
            .map_err(|e| RelayError::Unexpected(e.to_string()))?;
        let text = reply.response.unwrap_or_else(|| NO_RESPONSE.to_string());

        session.push(message, text.clone());
        Ok(text)
    }

}

/// Probe an endpoint for configuration diagnostics.
///
/// Stateless: validates the given URL, then POSTs a fixed `{"message":
/// "test", "history": []}` payload with the shorter probe timeout. Returns a
/// marker string; never fails and never touches any session history.
pub async fn test_connection(url: &str) -> String {
    match validate_url(url) {
        Err(ValidationError::Unconfigured) => {
            return "Please enter a webhook URL".to_string();
        }
        Err(_) => {
            return "❌ Invalid URL format. Please include http:// or https://".to_string();
        }
        Ok(()) => {}
    }

    let result = reqwest::Client::new()
        .post(url)
        .json(&WebhookRequest {
            message: "test",
            history: &[],
        })
        .timeout(PROBE_TIMEOUT)
        .send()
        .await;

    match result {
        Ok(resp) if resp.status() == reqwest::StatusCode::OK => {
            "✅ Connection successful!".to_string()
        }
        Ok(resp) => format!("❌ Connection failed: HTTP {}", resp.status().as_u16()),
        Err(err) => format!("❌ Connection failed: {err}"),
    }
}
