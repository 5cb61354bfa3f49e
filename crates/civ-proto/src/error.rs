//! Error types for CI-V payload decoding

use thiserror::Error;

/// Errors that can occur while decoding CI-V payload fields
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A BCD byte contained a non-decimal nibble
    #[error("invalid BCD digit: 0x{0:02X}")]
    InvalidBcd(u8),

    /// Payload shorter than the field requires
    #[error("incomplete field: need {needed} more bytes")]
    Incomplete { needed: usize },
}
