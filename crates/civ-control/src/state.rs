//! Operator and per-radio state tracking

use civ_proto::RxAntInput;
use serde::{Deserialize, Serialize};

/// Operating technique selected in the logging software
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OperatingTechnique {
    /// Single operator, one radio
    #[default]
    So1r,
    /// Single operator, two radios
    So2r,
    /// Single operator, two radios, advanced switching
    So2rAdvanced,
    /// Single operator, two VFOs of one dual-receiver radio
    So2v,
}

impl OperatingTechnique {
    /// True for both plain and advanced two-radio operation
    pub fn is_so2r(&self) -> bool {
        matches!(
            self,
            OperatingTechnique::So2r | OperatingTechnique::So2rAdvanced
        )
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            OperatingTechnique::So1r => "SO1R",
            OperatingTechnique::So2r => "SO2R",
            OperatingTechnique::So2rAdvanced => "SO2R Advanced",
            OperatingTechnique::So2v => "SO2V",
        }
    }
}

/// Logical radio as the operator sees it in the logging software
///
/// Under SO2V both logical radios live on physical radio 1; the routing
/// module maps logical to physical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogicalRadio {
    /// Primary logical radio
    #[default]
    Radio1,
    /// Secondary logical radio (VFO B under SO2V)
    Radio2,
}

impl LogicalRadio {
    /// Operator-facing radio number (1 or 2)
    pub fn number(&self) -> u8 {
        match self {
            LogicalRadio::Radio1 => 1,
            LogicalRadio::Radio2 => 2,
        }
    }
}

/// Run/search mode of a logical radio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunMode {
    /// Calling CQ on a held frequency
    #[default]
    Run,
    /// Tuning across the band answering others
    SearchPounce,
}

/// Snapshot of the contest operating state at the moment an event fires
///
/// The logging software owns this state; handlers only read it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContestSnapshot {
    /// Selected operating technique
    pub technique: OperatingTechnique,
    /// Logical radio holding keyboard focus
    pub focused: LogicalRadio,
    /// Run/search mode of logical radio 1
    pub primary_mode: RunMode,
    /// Run/search mode of logical radio 2
    pub secondary_mode: RunMode,
    /// Whether the operator listens to both receivers permanently
    pub stereo_audio: bool,
}

/// Accumulated RIT offset for one physical radio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RitState {
    /// Current offset in Hz
    pub offset_hz: i32,
    /// Whether RIT is switched on
    pub enabled: bool,
}

/// Receive antenna switching state for one physical radio
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RxAntState {
    /// Whether the receive antenna path is enabled
    pub enabled: bool,
    /// Selected receive antenna input
    pub input: RxAntInput,
}

/// Suppresses the spurious second band-change event raised at startup
///
/// Under SO2V the logging software raises one band-change event per logical
/// radio during startup. The second one arrives for VFO B while VFO A holds
/// focus, which would set radio 1's power from the wrong band. The counter
/// saturates so the rule never re-triggers during normal operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupGuard {
    count: u8,
}

impl StartupGuard {
    /// Create a fresh guard
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a band-change event; returns true if it should be dropped.
    ///
    /// Only counts events while operating SO2V.
    pub fn suppress(&mut self, technique: OperatingTechnique) -> bool {
        if technique != OperatingTechnique::So2v {
            return false;
        }
        self.count = (self.count + 1).min(3);
        self.count == 2
    }

    /// Number of SO2V band changes seen so far, saturating at three
    pub fn count(&self) -> u8 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_guard_suppresses_second_event_only() {
        let mut guard = StartupGuard::new();
        let results: Vec<bool> = (0..5)
            .map(|_| guard.suppress(OperatingTechnique::So2v))
            .collect();
        assert_eq!(results, vec![false, true, false, false, false]);
        assert_eq!(guard.count(), 3);
    }

    #[test]
    fn test_startup_guard_inactive_outside_so2v() {
        let mut guard = StartupGuard::new();
        for _ in 0..4 {
            assert!(!guard.suppress(OperatingTechnique::So2r));
        }
        // Counter never advanced, so the SO2V rule is still armed
        assert_eq!(guard.count(), 0);
        assert!(!guard.suppress(OperatingTechnique::So2v));
        assert!(guard.suppress(OperatingTechnique::So2v));
    }

    #[test]
    fn test_technique_classification() {
        assert!(OperatingTechnique::So2r.is_so2r());
        assert!(OperatingTechnique::So2rAdvanced.is_so2r());
        assert!(!OperatingTechnique::So1r.is_so2r());
        assert!(!OperatingTechnique::So2v.is_so2r());
    }
}
