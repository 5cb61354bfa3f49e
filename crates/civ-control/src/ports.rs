//! Collaborator traits
//!
//! The controller talks to the outside world through three narrow seams: the
//! per-radio CAT port, the operator status line, and the logging host's key
//! command surface. Production code wires real transports behind these;
//! tests use the simulated implementations from `civ-sim`.

use std::io;

use civ_proto::OperatingMode;

/// One physical radio's CAT connection
///
/// Frequencies are in kHz, matching how the logging software reports VFO
/// state. Reads return the host's cached view of the radio; `send` hands a
/// raw CI-V command frame to the transport, which adds framing/addressing.
pub trait RadioPort {
    /// Whether the connected radio speaks CI-V
    fn is_icom(&self) -> bool;

    /// VFO A frequency in kHz
    fn vfo_a_khz(&self) -> f64;

    /// VFO B frequency in kHz
    fn vfo_b_khz(&self) -> f64;

    /// VFO A operating mode, if known
    fn vfo_a_mode(&self) -> Option<OperatingMode>;

    /// VFO B operating mode, if known
    fn vfo_b_mode(&self) -> Option<OperatingMode>;

    /// Retune VFO A
    fn set_vfo_a_khz(&mut self, khz: f64);

    /// Retune VFO B
    fn set_vfo_b_khz(&mut self, khz: f64);

    /// Send a raw CI-V command frame to the radio
    fn send(&mut self, frame: &[u8]) -> io::Result<()>;
}

/// Operator-visible status line
pub trait StatusSink {
    /// Show a one-line status message
    fn status(&mut self, text: &str);
}

/// Key-command surface of the logging host
pub trait HostPort {
    /// Switch keyboard focus to the other logical radio
    fn change_active_radio(&mut self);

    /// Put the primary logical radio in run mode
    fn set_primary_run(&mut self);

    /// Press a function key (message memories, CQ on F1)
    fn send_function_key(&mut self, key: u8);
}
