//! Binary: send one randomized payload to the webhook, or print one with `generate`.

use anyhow::{Context, Result};
use clap::Parser;
use webhook_sender::{init_tracing, run_generate, run_send, Cli, Commands, SenderConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.into_command() {
        Commands::Send { url, timeout_secs } => {
            let config = SenderConfig::load(url, timeout_secs)?;
            init_tracing(config.log_file()).context("Initialize logging (check LOG_FILE)")?;
            run_send(&config, &mut stdout).await?;
        }
        Commands::Generate => {
            init_tracing(None)?;
            run_generate(&mut stdout)?;
        }
    }

    Ok(())
}
