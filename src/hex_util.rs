//! Hex helpers used for diagnostics and by the CLI.

use std::fmt::Write;

use crate::error::Result;

/// Lowercase hex, two digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse hex text (either case). Odd lengths and non-hex characters fail.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

/// Dump layout: 16 bytes per line, an extra gap after the 8th byte.
///
/// ```text
/// 00 01 02 03 04 05 06 07  08 09 0a 0b 0c 0d 0e 0f
/// 10 11
/// ```
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3 + bytes.len() / 8 + 1);
    for (i, byte) in bytes.iter().enumerate() {
        let _ = write!(out, "{:02x} ", byte);
        let count = i + 1;
        if count % 16 == 0 {
            out.push('\n');
        } else if count % 8 == 0 {
            out.push(' ');
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_hex_round_trip() {
        let bytes = [0x00, 0x7f, 0x80, 0xff, 0x12];
        assert_eq!(to_hex(&bytes), "007f80ff12");
        assert_eq!(from_hex("007F80ff12").unwrap(), bytes);
        assert_eq!(from_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(from_hex("abc"), Err(CodecError::InvalidHex(_))));
        assert!(matches!(from_hex("zz"), Err(CodecError::InvalidHex(_))));
    }

    #[test]
    fn test_hex_dump_layout() {
        let bytes: Vec<u8> = (0..18).collect();
        let dump = hex_dump(&bytes);
        assert_eq!(
            dump,
            "00 01 02 03 04 05 06 07  08 09 0a 0b 0c 0d 0e 0f \n10 11 \n"
        );
        assert_eq!(hex_dump(&[]), "\n");
    }
}
