//! # Webhook client
//!
//! Sends one [`Payload`] as a JSON POST and hands back whatever the endpoint answered.
//!
//! Every HTTP status is a [`Delivery`]: a 500 comes back just like a 200. Only failures
//! below HTTP (DNS, refused connection, TLS, timeout when one is configured) become
//! [`WebhookError::Transport`].

use std::time::Duration;

use reqwest::Client;
use tracing::{error, info, warn};
use webhook_core::{Delivery, Payload, Result, WebhookError};

/// HTTP client bound to a single webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: Client,
    url: String,
}

impl WebhookClient {
    /// Creates a client for `url`. `timeout` of `None` leaves requests unbounded.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| WebhookError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POSTs `payload` as `application/json` and returns the status and body text.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Transport`] if the request cannot be sent or the body
    /// cannot be read. Non-2xx statuses are not errors.
    pub async fn send(&self, payload: &Payload) -> Result<Delivery> {
        let body = serde_json::to_vec(payload)?;
        info!(url = %self.url, bytes = body.len(), "sending webhook payload");

        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.url, error = %e, "webhook request failed");
                transport_error(e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        let delivery = Delivery { status, body };
        if delivery.is_success() {
            info!(status, body_len = delivery.body.len(), "webhook delivered");
        } else {
            warn!(status, body_len = delivery.body.len(), "webhook answered with non-success status");
        }
        Ok(delivery)
    }
}

/// Pretty JSON (2-space indent) for the pre-send print.
pub fn render_payload(payload: &Payload) -> Result<String> {
    Ok(serde_json::to_string_pretty(payload)?)
}

fn transport_error(e: reqwest::Error) -> WebhookError {
    WebhookError::Transport(e.to_string())
}
