use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Not implemented: {0}")]
    Unimplemented(&'static str),
    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, CodecError>;
