pub mod uint;
pub mod decimal;
pub mod account; // address + balance codecs
pub mod error;
pub mod hex_util;
pub mod clock;
pub mod config;
pub mod cli;

pub use account::{AccountAddress, Checksum, PublicKey, RawBalance};
pub use error::{CodecError, Result};
pub use uint::{Uint, U128, U256};
