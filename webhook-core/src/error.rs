//! Error types for the webhook sender.
//!
//! [`WebhookError`] covers everything that can stop a run before or during delivery.
//! Non-2xx responses are not errors; they come back as a normal [`crate::Delivery`].

use thiserror::Error;

/// Top-level error (config, serialization, transport, IO).
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`WebhookError`].
pub type Result<T> = std::result::Result<T, WebhookError>;
