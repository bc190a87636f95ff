//! # Webhook sender
//!
//! Builds a randomized [`Payload`](webhook_core::Payload), POSTs it as JSON to a webhook and
//! prints the status code and response body. Config from env (`.env` supported) with CLI
//! overrides.

pub mod cli;
pub mod client;
pub mod config;
pub mod generator;
pub mod runner;

pub use cli::{Cli, Commands};
pub use client::{render_payload, WebhookClient};
pub use config::{SenderConfig, DEFAULT_WEBHOOK_URL};
pub use generator::{generate_payload, generate_payload_with};
pub use runner::{run_generate, run_send};

pub use webhook_core::{
    init_tracing, Delivery, Payload, PayloadData, PayloadMetadata, Result, WebhookError,
};
