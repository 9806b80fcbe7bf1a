//! Error types for codec operations

use thiserror::Error;

/// Error type for codec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("payload exceeds size limit: {0} > {1}")]
    SizeLimitExceeded(u64, u64), // found, limit
    #[error("insufficient data")]
    InsufficientData,
    #[error("declared length exceeds limit: {0} > {1}")]
    LengthExceedsLimit(u64, u64), // found, limit
    #[error("length overflow")]
    LengthOverflow,
    #[error("trailing bytes: {0}")]
    TrailingBytes(usize),
    #[error("invalid length marker: {0:#04x}")]
    InvalidMarker(u8),
    #[error("value out of range for {0}")]
    OutOfRange(&'static str),
    #[error("invalid fixed integer width: {0}")]
    InvalidConfiguration(u8),
    #[error("invalid varint")]
    InvalidVarint,
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
