use clap::Subcommand;
use serde::Serialize;
use std::fmt;

use super::{CliError, Output};
use crate::account::balance;
use crate::hex_util;

#[derive(Subcommand, Debug, Clone)]
pub enum BalanceCommands {
    /// Render a 16-byte raw balance (hex) in decimal
    Decode {
        raw: String,
    },
    /// Convert a decimal balance to raw bytes (not supported)
    Encode {
        decimal: String,
    },
}

#[derive(Serialize)]
struct BalanceReport {
    raw: String,
    balance: String,
}

impl fmt::Display for BalanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.balance)
    }
}

pub fn handle_balance_command(cmd: BalanceCommands, output: &Output) -> Result<String, CliError> {
    match cmd {
        BalanceCommands::Decode { raw } => {
            let bytes = hex_util::from_hex(&raw)?;
            let balance = balance::decode_slice(&bytes)?;
            output.render(&BalanceReport { raw: output.hex(&bytes), balance })
        }
        BalanceCommands::Encode { decimal } => {
            let raw = balance::encode(&decimal)?;
            output.render(&BalanceReport { raw: output.hex(&raw), balance: decimal })
        }
    }
}
