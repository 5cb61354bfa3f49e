//! Events the controller reacts to
//!
//! Some events arrive from the logging software's event bus (band, focus and
//! keyer speed changes); the rest are key-mapped operator actions. The
//! controller treats both uniformly through [`Controller::handle`].
//!
//! [`Controller::handle`]: crate::controller::Controller::handle

use crate::state::LogicalRadio;

/// A single operator or host event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    // -------------------------------------------------------------------------
    // Bus events raised by the logging software
    // -------------------------------------------------------------------------
    /// A logical radio changed band
    BandChanged { radio: LogicalRadio },

    /// Keyboard focus moved between logical radios
    FocusChanged,

    /// The host keyer speed changed
    KeyerSpeedChanged { radio: LogicalRadio, wpm: u8 },

    // -------------------------------------------------------------------------
    // Key-mapped operator actions
    // -------------------------------------------------------------------------
    /// Re-apply the focused radio's band power (e.g. after manual adjustment)
    RestoreBandPower,

    /// Re-apply the focused radio's scope edges and ref level
    RestoreWaterfall,

    /// Zoom the scope to a narrow window around the VFO
    WaterfallZoom,

    /// Step to the next IF filter
    CycleFilter,

    /// Nudge RIT (or the VFO, when searching) by the given step in Hz
    RitStep { hz: i32 },

    /// Zero and disable RIT
    ClearRit,

    /// Toggle dual watch while the main VFO is focused (SO2V)
    ToggleDualWatch,

    /// Toggle permanently-on sub receiver audio (SO2V)
    TogglePermanentDualWatch,

    /// Toggle the receive antenna path on the focused radio
    ToggleRxAntenna,

    /// Step the receive antenna input selector on the focused radio
    CycleRxAntennaInput,

    /// Trigger voice memory playback (slot 0 stops playback)
    PlayVoiceMemory { slot: u8 },

    /// Focus logical radio 1 and start a CQ (SO2V)
    CqOnRadio1,
}

impl ControlEvent {
    /// Check if this event is raised by the logging software's event bus
    /// rather than mapped to a key
    pub fn is_bus_event(&self) -> bool {
        matches!(
            self,
            ControlEvent::BandChanged { .. }
                | ControlEvent::FocusChanged
                | ControlEvent::KeyerSpeedChanged { .. }
        )
    }

    /// Get the logical radio if this event names one explicitly
    pub fn logical_radio(&self) -> Option<LogicalRadio> {
        match self {
            ControlEvent::BandChanged { radio }
            | ControlEvent::KeyerSpeedChanged { radio, .. } => Some(*radio),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_event_classification() {
        assert!(ControlEvent::BandChanged {
            radio: LogicalRadio::Radio1
        }
        .is_bus_event());
        assert!(ControlEvent::FocusChanged.is_bus_event());
        assert!(!ControlEvent::CycleFilter.is_bus_event());
        assert!(!ControlEvent::RitStep { hz: -20 }.is_bus_event());
    }

    #[test]
    fn test_logical_radio_extraction() {
        let event = ControlEvent::KeyerSpeedChanged {
            radio: LogicalRadio::Radio2,
            wpm: 32,
        };
        assert_eq!(event.logical_radio(), Some(LogicalRadio::Radio2));
        assert_eq!(ControlEvent::FocusChanged.logical_radio(), None);
    }
}
