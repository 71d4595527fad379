//! Account module
//!
//! Text forms of the account-level values:
//! - 64-character `xrb_` addresses built from a public key and its checksum
//! - Decimal rendering of 128-bit raw balances

pub mod types;
pub mod codec;
pub mod address;
pub mod balance;

pub use types::{Checksum, PublicKey, RawBalance};
pub use address::AccountAddress;
