//! Error types for the controller

use thiserror::Error;

/// Errors surfaced while driving a radio
#[derive(Debug, Error)]
pub enum ControlError {
    /// No port attached in the addressed slot
    #[error("radio {0} is not available")]
    RadioUnavailable(u8),

    /// The attached port failed to accept a command
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
