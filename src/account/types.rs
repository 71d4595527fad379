//! Binary layouts shared by the account and balance codecs

/// Ed25519 public key, read as one big-endian 256-bit integer.
pub type PublicKey = [u8; 32];

/// 5-byte address checksum, read as a little-endian 40-bit integer.
pub type Checksum = [u8; 5];

/// Raw balance in the smallest unit, big-endian 128-bit integer.
pub type RawBalance = [u8; 16];

pub const PUBLIC_KEY_LEN: usize = 32;
pub const CHECKSUM_LEN: usize = 5;
pub const RAW_BALANCE_LEN: usize = 16;
