//! Runner: generate a payload, print it, send it, print what came back.

use std::io::Write;

use webhook_core::{Delivery, Result};

use crate::client::{render_payload, WebhookClient};
use crate::config::SenderConfig;
use crate::generator::generate_payload;

/// Runs one delivery and writes the report to `out`.
///
/// Writes `Sending payload: <pretty json>` before the request, then `Status code: <n>` and
/// `Response: <body>` once the endpoint answers. A transport error returns after the first
/// line, so no status line is written.
pub async fn run_send<W: Write>(config: &SenderConfig, out: &mut W) -> Result<Delivery> {
    config.validate()?;
    let client = WebhookClient::new(config.webhook_url(), config.timeout())?;

    let payload = generate_payload();
    writeln!(out, "Sending payload: {}", render_payload(&payload)?)?;
    out.flush()?;

    let delivery = client.send(&payload).await?;

    writeln!(out, "Status code: {}", delivery.status)?;
    writeln!(out, "Response: {}", delivery.body)?;
    out.flush()?;
    Ok(delivery)
}

/// Writes one pretty payload to `out` without sending it.
pub fn run_generate<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", render_payload(&generate_payload())?)?;
    out.flush()?;
    Ok(())
}
