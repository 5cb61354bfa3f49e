//! Contest operating controller
//!
//! This crate turns contest logging events (band changes, focus switches,
//! key presses) into CI-V command traffic for one or two attached Icom
//! radios. It owns the per-band configuration tables, the logical-to-
//! physical radio routing for the SO1R/SO2R/SO2V operating techniques, and
//! the handler state that persists between events.
//!
//! Everything runs synchronously on the caller's thread: one event in, zero
//! or more CI-V frames out through the attached [`RadioPort`]s, then the
//! call returns.
//!
//! # Architecture
//!
//! - [`Controller`] dispatches [`ControlEvent`]s against a [`ContestSnapshot`]
//!   of the host's operating state
//! - [`routing`] maps logical radios to a physical radio and VFO
//! - [`plan`] holds the per-band power, scope edge and reference level tables
//! - [`ports`] defines the seams to the radios, the status line and the host

pub mod controller;
pub mod error;
pub mod events;
pub mod plan;
pub mod ports;
pub mod routing;
pub mod state;

pub use controller::{ControlConfig, Controller};
pub use error::ControlError;
pub use events::ControlEvent;
pub use plan::{
    BandPlanConfig, PowerRow, PowerTable, RefLevelRow, RefLevelTable, ScopeMode, ScopeRow,
    ScopeSegment, ScopeTable,
};
pub use ports::{HostPort, RadioPort, StatusSink};
pub use routing::{resolve, PhysicalRadio, RouteTarget};
pub use state::{
    ContestSnapshot, LogicalRadio, OperatingTechnique, RitState, RunMode, RxAntState, StartupGuard,
};
