//! Simulated radio port
//!
//! Records every command frame the controller sends so tests can assert on
//! exact wire bytes. Handles are cheap clones sharing one state cell, so a
//! test can keep a handle while the controller owns the boxed port.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use civ_control::RadioPort;
use civ_proto::OperatingMode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Initial state for a simulated radio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRadioConfig {
    /// Whether the simulated radio reports itself as CI-V capable
    pub icom: bool,
    /// Initial VFO A frequency in kHz
    pub vfo_a_khz: f64,
    /// Initial VFO B frequency in kHz
    pub vfo_b_khz: f64,
    /// Initial VFO A mode
    pub vfo_a_mode: Option<OperatingMode>,
    /// Initial VFO B mode
    pub vfo_b_mode: Option<OperatingMode>,
}

impl Default for SimRadioConfig {
    fn default() -> Self {
        Self {
            icom: true,
            vfo_a_khz: 14_250.0, // 20m
            vfo_b_khz: 14_250.0,
            vfo_a_mode: Some(OperatingMode::Usb),
            vfo_b_mode: Some(OperatingMode::Usb),
        }
    }
}

#[derive(Debug)]
struct SimRadioState {
    icom: bool,
    vfo_a_khz: f64,
    vfo_b_khz: f64,
    vfo_a_mode: Option<OperatingMode>,
    vfo_b_mode: Option<OperatingMode>,
    fail_sends: bool,
    frames: Vec<Vec<u8>>,
}

/// A simulated radio recording the frames it receives
#[derive(Debug, Clone)]
pub struct SimRadio {
    inner: Rc<RefCell<SimRadioState>>,
}

impl SimRadio {
    /// Create a simulated CI-V radio with default state
    pub fn new() -> Self {
        Self::from_config(SimRadioConfig::default())
    }

    /// Create a simulated radio from a config
    pub fn from_config(config: SimRadioConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SimRadioState {
                icom: config.icom,
                vfo_a_khz: config.vfo_a_khz,
                vfo_b_khz: config.vfo_b_khz,
                vfo_a_mode: config.vfo_a_mode,
                vfo_b_mode: config.vfo_b_mode,
                fail_sends: false,
                frames: Vec::new(),
            })),
        }
    }

    /// Set the VFO A frequency and mode
    pub fn tune_vfo_a(&self, khz: f64, mode: OperatingMode) -> &Self {
        let mut state = self.inner.borrow_mut();
        state.vfo_a_khz = khz;
        state.vfo_a_mode = Some(mode);
        self
    }

    /// Set the VFO B frequency and mode
    pub fn tune_vfo_b(&self, khz: f64, mode: OperatingMode) -> &Self {
        let mut state = self.inner.borrow_mut();
        state.vfo_b_khz = khz;
        state.vfo_b_mode = Some(mode);
        self
    }

    /// Make the radio report itself as a non-CI-V model
    pub fn set_non_icom(&self) -> &Self {
        self.inner.borrow_mut().icom = false;
        self
    }

    /// Make every subsequent send fail with an I/O error
    pub fn fail_sends(&self) -> &Self {
        self.inner.borrow_mut().fail_sends = true;
        self
    }

    /// All frames received so far, oldest first
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().frames.clone()
    }

    /// Drain and return all recorded frames
    pub fn take_frames(&self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.inner.borrow_mut().frames)
    }

    /// Number of frames received so far
    pub fn frame_count(&self) -> usize {
        self.inner.borrow().frames.len()
    }

    /// The most recently received frame, if any
    pub fn last_frame(&self) -> Option<Vec<u8>> {
        self.inner.borrow().frames.last().cloned()
    }

    /// Current VFO A frequency in kHz
    pub fn current_vfo_a_khz(&self) -> f64 {
        self.inner.borrow().vfo_a_khz
    }

    /// Current VFO B frequency in kHz
    pub fn current_vfo_b_khz(&self) -> f64 {
        self.inner.borrow().vfo_b_khz
    }
}

impl Default for SimRadio {
    fn default() -> Self {
        Self::new()
    }
}

impl RadioPort for SimRadio {
    fn is_icom(&self) -> bool {
        self.inner.borrow().icom
    }

    fn vfo_a_khz(&self) -> f64 {
        self.inner.borrow().vfo_a_khz
    }

    fn vfo_b_khz(&self) -> f64 {
        self.inner.borrow().vfo_b_khz
    }

    fn vfo_a_mode(&self) -> Option<OperatingMode> {
        self.inner.borrow().vfo_a_mode
    }

    fn vfo_b_mode(&self) -> Option<OperatingMode> {
        self.inner.borrow().vfo_b_mode
    }

    fn set_vfo_a_khz(&mut self, khz: f64) {
        self.inner.borrow_mut().vfo_a_khz = khz;
    }

    fn set_vfo_b_khz(&mut self, khz: f64) {
        self.inner.borrow_mut().vfo_b_khz = khz;
    }

    fn send(&mut self, frame: &[u8]) -> io::Result<()> {
        let mut state = self.inner.borrow_mut();
        if state.fail_sends {
            return Err(io::Error::other("simulated port failure"));
        }
        debug!(len = frame.len(), "sim radio received frame");
        state.frames.push(frame.to_vec());
        Ok(())
    }
}
