use clap::Subcommand;
use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::{CliError, Output};
use crate::account::codec;
use crate::hex_util;

#[derive(Subcommand, Debug, Clone)]
pub enum AccountCommands {
    /// Build an address from a public key and its checksum
    Encode {
        /// 32-byte public key, hex
        #[arg(long)]
        key: String,
        /// 5-byte checksum, hex
        #[arg(long)]
        checksum: String,
    },
    /// Split an address into public key and checksum
    Decode {
        address: String,
    },
}

#[derive(Serialize)]
struct EncodedAccount {
    address: String,
}

impl fmt::Display for EncodedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

#[derive(Serialize)]
struct DecodedAccount {
    public_key: String,
    checksum: String,
}

impl fmt::Display for DecodedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Public Key: {}", self.public_key)?;
        write!(f, "Checksum:   {}", self.checksum)
    }
}

pub fn handle_account_command(cmd: AccountCommands, output: &Output) -> Result<String, CliError> {
    match cmd {
        AccountCommands::Encode { key, checksum } => {
            let key = hex_util::from_hex(&key)?;
            let checksum = hex_util::from_hex(&checksum)?;
            let address = codec::encode_slices(&key, &checksum)?;
            debug!("encoded account {}", address);
            output.render(&EncodedAccount { address })
        }
        AccountCommands::Decode { address } => {
            let (key, checksum) = codec::decode(&address)?;
            output.render(&DecodedAccount {
                public_key: output.hex(&key),
                checksum: output.hex(&checksum),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_encode_then_decode() {
        let key = "00".repeat(31) + "1f";
        let address = handle_account_command(
            AccountCommands::Encode { key: key.clone(), checksum: "0100000000".to_string() },
            &Output::text(),
        )
        .unwrap();
        assert_eq!(address.len(), 64);

        let decoded =
            handle_account_command(AccountCommands::Decode { address }, &Output::json()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&decoded).unwrap();
        assert_eq!(value["public_key"], key);
        assert_eq!(value["checksum"], "0100000000");
    }

    #[test]
    fn test_encode_rejects_short_key() {
        let err = handle_account_command(
            AccountCommands::Encode { key: "00".repeat(31), checksum: "0000000000".to_string() },
            &Output::text(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Codec(CodecError::InvalidLength { expected: 32, actual: 31 })
        ));
    }

    #[test]
    fn test_decode_rejects_bad_address() {
        let err = handle_account_command(
            AccountCommands::Decode { address: "xrb_nope".to_string() },
            &Output::text(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Codec(CodecError::InvalidFormat(_))));
    }
}
