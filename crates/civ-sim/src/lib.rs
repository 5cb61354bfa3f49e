//! Simulation layer for the contest controller
//!
//! Provides in-memory implementations of the controller's collaborator
//! traits: a [`SimRadio`] that records received CI-V frames, a [`SimStatus`]
//! line capturing operator messages, and a [`SimHost`] recording key
//! commands. All three hand out cheap clones sharing one state cell, so a
//! test can keep a handle to inspect after the controller consumed the boxed
//! collaborator.
//!
//! The controller is single-threaded by design, so the shared cells use
//! `Rc<RefCell<_>>`.

pub mod host;
pub mod radio;

pub use host::{HostAction, SimHost, SimStatus};
pub use radio::{SimRadio, SimRadioConfig};
