use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::codec;
use super::types::{Checksum, PublicKey};
use crate::error::CodecError;

/// A decoded account address.
///
/// Holds the binary parts; the text form is produced on demand and always
/// uses the canonical `xrb_` prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress {
    public_key: PublicKey,
    checksum: Checksum,
}

impl AccountAddress {
    /// Build an address from a key and a checksum computed by the caller.
    pub fn from_parts(public_key: PublicKey, checksum: Checksum) -> Self {
        Self { public_key, checksum }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn checksum(&self) -> &Checksum {
        &self.checksum
    }

    pub fn into_parts(self) -> (PublicKey, Checksum) {
        (self.public_key, self.checksum)
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(&self.public_key, &self.checksum))
    }
}

impl FromStr for AccountAddress {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (public_key, checksum) = codec::decode(s)?;
        Ok(Self { public_key, checksum })
    }
}

impl TryFrom<String> for AccountAddress {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AccountAddress> for String {
    fn from(address: AccountAddress) -> Self {
        address.to_string()
    }
}
