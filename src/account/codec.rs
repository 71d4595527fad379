//! Account address codec
//!
//! Layout of an address (64 ASCII characters):
//!
//! ```text
//! xrb_ | 52 digits: public key | 8 digits: checksum
//! ```
//!
//! Every digit carries 5 bits and is drawn from [`ALPHABET`]. Both numbers
//! are written most significant digit first.
//!
//! Encoding peels digits off the low end (`value & 0x1f`, then `value >> 5`)
//! and fills the output right to left. Decoding runs left to right and
//! accumulates with `acc = (acc << 5) | digit`. The 52 key digits carry 260
//! bits for a 256-bit key: encoding always leaves the top 4 bits zero and
//! decoding lets the left shift discard them, so a non-zero value there is
//! accepted and dropped.
//!
//! The checksum buffer is converted to its 40-bit integer as little-endian
//! bytes, in both directions.

use tracing::debug;

use super::types::{Checksum, PublicKey, CHECKSUM_LEN, PUBLIC_KEY_LEN};
use crate::error::{CodecError, Result};
use crate::uint::U256;

/// Digit alphabet. `0`, `2`, `l` and `v` are left out on purpose.
pub const ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// Prefix written by [`encode`].
pub const PREFIX: &str = "xrb_";

/// Prefix variant accepted by [`decode`].
pub const ALT_PREFIX: &str = "xrb-";

pub const ADDRESS_LEN: usize = 64;

const PREFIX_LEN: usize = 4;
const KEY_DIGITS: usize = 52;
const CHECKSUM_DIGITS: usize = 8;
const DIGIT_BITS: u32 = 5;
const DIGIT_MASK: u64 = 0x1f;

const INVALID: u8 = 0xff;
const DECODE_TABLE: [u8; 128] = build_decode_table();

const fn build_decode_table() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

fn decode_digit(byte: u8) -> Option<u8> {
    match DECODE_TABLE.get(byte as usize) {
        Some(&value) if value != INVALID => Some(value),
        _ => None,
    }
}

/// Checksum bytes to their 40-bit value (little-endian).
pub fn checksum_to_u64(checksum: &Checksum) -> u64 {
    let mut word = [0u8; 8];
    word[..CHECKSUM_LEN].copy_from_slice(checksum);
    u64::from_le_bytes(word)
}

/// Low 40 bits of `value` back to checksum bytes (little-endian).
pub fn checksum_from_u64(value: u64) -> Checksum {
    let word = value.to_le_bytes();
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&word[..CHECKSUM_LEN]);
    checksum
}

/// Encode a public key and its precomputed checksum as an `xrb_` address.
pub fn encode(key: &PublicKey, checksum: &Checksum) -> String {
    let mut digits = [0u8; KEY_DIGITS + CHECKSUM_DIGITS];

    let mut check = checksum_to_u64(checksum);
    for slot in digits[KEY_DIGITS..].iter_mut().rev() {
        *slot = ALPHABET[(check & DIGIT_MASK) as usize];
        check >>= DIGIT_BITS;
    }

    let mut acc = U256::from_be_array(key);
    for slot in digits[..KEY_DIGITS].iter_mut().rev() {
        *slot = ALPHABET[acc.low_five_bits() as usize];
        acc = acc >> DIGIT_BITS;
    }

    let mut out = String::with_capacity(ADDRESS_LEN);
    out.push_str(PREFIX);
    out.extend(digits.iter().map(|&d| char::from(d)));
    out
}

/// Like [`encode`], for buffers whose sizes are not known statically.
pub fn encode_slices(key: &[u8], checksum: &[u8]) -> Result<String> {
    let key: &PublicKey = key.try_into().map_err(|_| CodecError::InvalidLength {
        expected: PUBLIC_KEY_LEN,
        actual: key.len(),
    })?;
    let checksum: &Checksum = checksum.try_into().map_err(|_| CodecError::InvalidLength {
        expected: CHECKSUM_LEN,
        actual: checksum.len(),
    })?;
    Ok(encode(key, checksum))
}

/// Split an address back into its public key and checksum.
///
/// The checksum is not verified against the key.
pub fn decode(address: &str) -> Result<(PublicKey, Checksum)> {
    let bytes = address.as_bytes();
    if bytes.len() != ADDRESS_LEN {
        debug!("rejecting address of length {}", bytes.len());
        return Err(CodecError::InvalidFormat(format!(
            "address must be {} characters, got {}",
            ADDRESS_LEN,
            bytes.len()
        )));
    }

    let prefix = &bytes[..PREFIX_LEN];
    if prefix != PREFIX.as_bytes() && prefix != ALT_PREFIX.as_bytes() {
        debug!("rejecting address with unknown prefix");
        return Err(CodecError::InvalidFormat(format!(
            "address must start with {} or {}",
            PREFIX, ALT_PREFIX
        )));
    }

    let mut acc = U256::ZERO;
    let mut check: u64 = 0;
    for (offset, &byte) in bytes[PREFIX_LEN..].iter().enumerate() {
        let position = PREFIX_LEN + offset;
        // Every byte before `position` is ASCII, so it is a char boundary.
        let value = decode_digit(byte).ok_or_else(|| CodecError::InvalidCharacter {
            ch: address[position..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
            position,
        })?;

        if offset < KEY_DIGITS {
            acc = acc << DIGIT_BITS;
            acc.or_low_bits(u64::from(value));
        } else {
            check = (check << DIGIT_BITS) | u64::from(value);
        }
    }

    Ok((acc.to_be_bytes(), checksum_from_u64(check)))
}
