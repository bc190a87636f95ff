//! # webhook-core
//!
//! Core types for the webhook sender: the [`Payload`] record, [`Delivery`] outcome,
//! error types, and tracing initialization. Transport-agnostic; used by webhook-sender.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{Result, WebhookError};
pub use logger::init_tracing;
pub use types::{
    Delivery, Payload, PayloadData, PayloadMetadata, PAYLOAD_SOURCE, PAYLOAD_VERSION,
};
