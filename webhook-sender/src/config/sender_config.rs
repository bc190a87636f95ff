//! SenderConfig: everything a run needs, read from env with CLI overrides.

use std::env;
use std::time::Duration;

use webhook_core::{Result, WebhookError};

/// Endpoint used when neither `--url` nor WEBHOOK_URL is given.
pub const DEFAULT_WEBHOOK_URL: &str = "https://eoeyekcgqu06mpf.m.pipedream.net";

#[derive(Debug, Clone)]
pub struct SenderConfig {
    /// WEBHOOK_URL
    pub webhook_url: String,
    /// WEBHOOK_TIMEOUT_SECS; `None` waits for the server indefinitely
    pub timeout_secs: Option<u64>,
    /// LOG_FILE; logs are teed here in addition to stderr
    pub log_file: Option<String>,
}

impl SenderConfig {
    /// Load from environment variables. `url` and `timeout_secs` override WEBHOOK_URL and
    /// WEBHOOK_TIMEOUT_SECS if provided.
    /// Call validate() after load to check config before sending.
    pub fn load(url: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let webhook_url = url
            .or_else(|| env::var("WEBHOOK_URL").ok().filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_string());
        let timeout_secs = timeout_secs.or_else(|| {
            env::var("WEBHOOK_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.trim().parse().ok())
        });
        let log_file = env::var("LOG_FILE").ok().filter(|s| !s.trim().is_empty());

        Ok(Self {
            webhook_url,
            timeout_secs,
            log_file,
        })
    }

    /// Validate config: webhook_url must be an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.webhook_url).map_err(|e| {
            WebhookError::Config(format!(
                "WEBHOOK_URL is not a valid URL: {} ({})",
                self.webhook_url, e
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(WebhookError::Config(format!(
                "WEBHOOK_URL must use http or https, got: {}",
                url.scheme()
            )));
        }
        Ok(())
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}
