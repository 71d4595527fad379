use clap::Subcommand;
use serde::Serialize;
use std::fmt;

use super::{CliError, Output};
use crate::hex_util;

#[derive(Subcommand, Debug, Clone)]
pub enum HexCommands {
    /// Hex-encode UTF-8 text
    Encode {
        text: String,
    },
    /// Decode hex into text (lossy for non-UTF-8 bytes)
    Decode {
        hex: String,
    },
    /// Print a 16-per-line dump of hex input
    Dump {
        hex: String,
    },
}

#[derive(Serialize)]
struct HexReport {
    value: String,
}

impl fmt::Display for HexReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

pub fn handle_hex_command(cmd: HexCommands, output: &Output) -> Result<String, CliError> {
    let value = match cmd {
        HexCommands::Encode { text } => output.hex(text.as_bytes()),
        HexCommands::Decode { hex } => {
            String::from_utf8_lossy(&hex_util::from_hex(&hex)?).into_owned()
        }
        HexCommands::Dump { hex } => {
            let dump = hex_util::hex_dump(&hex_util::from_hex(&hex)?);
            if output.hex_uppercase { dump.to_uppercase() } else { dump }
        }
    };
    output.render(&HexReport { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_encode_decode_text() {
        let hex = handle_hex_command(HexCommands::Encode { text: "xrb".to_string() }, &Output::text())
            .unwrap();
        assert_eq!(hex, "787262");
        let text = handle_hex_command(HexCommands::Decode { hex }, &Output::text()).unwrap();
        assert_eq!(text, "xrb");
    }

    #[test]
    fn test_dump() {
        let out = handle_hex_command(HexCommands::Dump { hex: "0aff".to_string() }, &Output::text())
            .unwrap();
        assert_eq!(out, "0a ff \n");
    }

    #[test]
    fn test_odd_length_rejected() {
        let err = handle_hex_command(HexCommands::Decode { hex: "abc".to_string() }, &Output::text())
            .unwrap_err();
        assert!(matches!(err, CliError::Codec(CodecError::InvalidHex(_))));
    }
}
