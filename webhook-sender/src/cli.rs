//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "webhook-sender")]
#[command(about = "Send a randomized JSON payload to a webhook", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Generate a payload and POST it (default; URL from env unless --url is given).
    Send {
        /// Overrides WEBHOOK_URL.
        #[arg(short, long)]
        url: Option<String>,
        /// Overrides WEBHOOK_TIMEOUT_SECS; no timeout when neither is set.
        #[arg(short, long)]
        timeout_secs: Option<u64>,
    },
    /// Print a generated payload without sending it.
    Generate,
}

impl Cli {
    /// The subcommand to run; no subcommand means `send` with defaults.
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Send {
            url: None,
            timeout_secs: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_send() {
        let cli = Cli::try_parse_from(["webhook-sender"]).unwrap();
        assert_eq!(
            cli.into_command(),
            Commands::Send {
                url: None,
                timeout_secs: None
            }
        );
    }

    #[test]
    fn test_send_with_overrides() {
        let cli = Cli::try_parse_from([
            "webhook-sender",
            "send",
            "--url",
            "http://localhost:3000/hook",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(
            cli.into_command(),
            Commands::Send {
                url: Some("http://localhost:3000/hook".to_string()),
                timeout_secs: Some(5)
            }
        );
    }

    #[test]
    fn test_generate_and_bad_arguments() {
        let cli = Cli::try_parse_from(["webhook-sender", "generate"]).unwrap();
        assert_eq!(cli.into_command(), Commands::Generate);

        assert!(Cli::try_parse_from(["webhook-sender", "send", "--timeout-secs", "x"]).is_err());
    }
}
