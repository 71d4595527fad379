pub mod account;
pub mod balance;
pub mod hex;
pub mod output;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::clock;
use crate::error::CodecError;
pub use output::Output;

#[derive(Parser)]
#[command(name = "prailude")]
#[command(about = "Account address and balance codec", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "prailude.toml")]
    pub config: String,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Account address encoding
    Account {
        #[command(subcommand)]
        cmd: account::AccountCommands,
    },
    /// Raw balance rendering
    Balance {
        #[command(subcommand)]
        cmd: balance::BalanceCommands,
    },
    /// Hex helpers
    Hex {
        #[command(subcommand)]
        cmd: hex::HexCommands,
    },
    /// Current wall-clock time in seconds
    Time,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct TimeReport {
    seconds: f64,
}

impl fmt::Display for TimeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.seconds)
    }
}

pub fn run(command: Commands, output: &Output) -> Result<String, CliError> {
    match command {
        Commands::Account { cmd } => account::handle_account_command(cmd, output),
        Commands::Balance { cmd } => balance::handle_balance_command(cmd, output),
        Commands::Hex { cmd } => hex::handle_hex_command(cmd, output),
        Commands::Time => output.render(&TimeReport { seconds: clock::gettime() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["prailude", "--json", "time"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, "prailude.toml");
        assert!(matches!(cli.command, Commands::Time));

        let cli = Cli::try_parse_from(["prailude", "time", "--config", "other.toml"]).unwrap();
        assert_eq!(cli.config, "other.toml");
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["prailude"]).is_err());
    }

    #[test]
    fn test_time_json() {
        let out = run(Commands::Time, &Output::json()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["seconds"].as_f64().unwrap() > 0.0);
    }
}
