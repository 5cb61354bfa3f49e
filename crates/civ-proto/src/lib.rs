//! Icom CI-V command library
//!
//! This crate provides the wire encodings used to steer modern Icom
//! transceivers (IC-7300, IC-7610, IC-785x) from contest logging software:
//!
//! - **Commands**: power and keyer levels, RIT, dual watch, receiver and
//!   split selection, IF filters, spectrum scope edges and reference level,
//!   voice memory, receive antenna switching
//! - **BCD codecs**: both packed-BCD byte orders that CI-V payloads use
//! - **Level scaling**: percentage and WPM mapping onto the 0-255 device range
//!
//! Commands encode to raw CI-V command bytes; the transport owns the
//! `FE FE ... FD` framing and addressing.
//!
//! # Example
//!
//! ```rust
//! use civ_proto::{percent_to_level, CivCommand, EncodeCommand};
//!
//! let cmd = CivCommand::SetPower { level: percent_to_level(23) };
//! assert_eq!(cmd.encode(), vec![0x14, 0x0A, 0x00, 0x59]);
//! ```

pub mod bcd;
pub mod command;
pub mod error;
pub mod mode;

pub use command::{
    percent_to_level, wpm_to_level, CivCommand, RxAntInput, Vfo, MAX_WPM, MIN_WPM,
};
pub use error::ParseError;
pub use mode::OperatingMode;

/// Encode a command to its on-the-wire bytes
pub trait EncodeCommand {
    /// Encode this command to protocol bytes
    fn encode(&self) -> Vec<u8>;
}
