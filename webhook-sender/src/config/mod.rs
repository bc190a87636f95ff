//! Sender configuration: webhook URL, request timeout, log file. Loaded from env.

mod sender_config;


pub use sender_config::{SenderConfig, DEFAULT_WEBHOOK_URL};
