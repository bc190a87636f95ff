//! Core types: the webhook payload and the delivery outcome.

use serde::{Deserialize, Serialize};

/// Constant `metadata.source` of every payload.
pub const PAYLOAD_SOURCE: &str = "webhook-testing-script";

/// Constant `metadata.version` of every payload.
pub const PAYLOAD_VERSION: &str = "1.0.0";

/// The record sent to the webhook. Field order here is the JSON field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Random in `1..=1000`; not unique across runs.
    pub id: u32,
    /// Local wall-clock time at generation, ISO-8601 without offset.
    pub timestamp: String,
    pub data: PayloadData,
    pub metadata: PayloadMetadata,
}

/// Randomized body of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadData {
    /// Random in `0.0..=100.0`.
    pub value: f64,
    /// `"Random message {n}"` with `n` in `1..=10000`.
    pub message: String,
    pub active: bool,
}

/// Fixed block identifying the sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadMetadata {
    pub source: String,
    pub version: String,
}

impl Default for PayloadMetadata {
    fn default() -> Self {
        Self {
            source: PAYLOAD_SOURCE.to_string(),
            version: PAYLOAD_VERSION.to_string(),
        }
    }
}

/// What the endpoint answered. Any status code, including non-2xx, is a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub status: u16,
    pub body: String,
}

impl Delivery {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
