//! Raw balance codec
//!
//! A raw balance is a big-endian 128-bit integer in the smallest unit. It is
//! shown as a plain decimal string; the reverse direction is not supported.

use tracing::warn;

use super::types::{RawBalance, RAW_BALANCE_LEN};
use crate::decimal;
use crate::error::{CodecError, Result};
use crate::uint::U128;

/// Render a raw balance as a decimal string.
pub fn decode(raw: &RawBalance) -> String {
    decimal::to_decimal_string(&U128::from_be_array(raw))
}

/// Like [`decode`], for a buffer whose size is not known statically.
pub fn decode_slice(raw: &[u8]) -> Result<String> {
    if raw.len() != RAW_BALANCE_LEN {
        return Err(CodecError::InvalidLength {
            expected: RAW_BALANCE_LEN,
            actual: raw.len(),
        });
    }
    Ok(decimal::to_decimal_string(&U128::from_be_slice(raw)?))
}

/// Parsing a decimal balance back into raw bytes is not supported.
pub fn encode(decimal: &str) -> Result<RawBalance> {
    warn!("raw balance encoding requested for {:?}", decimal);
    Err(CodecError::Unimplemented("raw balance encoding"))
}
