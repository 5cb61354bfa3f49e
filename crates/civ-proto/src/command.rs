//! CI-V control commands and their wire encodings
//!
//! Commands here encode to the raw CI-V command bytes (command number,
//! sub-command, payload). The transport layer is responsible for the
//! surrounding `FE FE <to> <from> ... FD` framing, so the same encoding works
//! over any CI-V capable backend.

use crate::bcd;
use crate::mode::OperatingMode;
use crate::EncodeCommand;

/// Receiver VFO selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vfo {
    /// Main VFO
    A,
    /// Sub VFO
    B,
}

impl Vfo {
    /// VFO selector byte as used by the mode/filter command (cmd `26`)
    pub fn civ_code(&self) -> u8 {
        match self {
            Vfo::A => 0x00,
            Vfo::B => 0x01,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Vfo::A => "A",
            Vfo::B => "B",
        }
    }
}

/// Receive antenna input selector (cmd `16 53`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RxAntInput {
    /// No receive antenna input
    #[default]
    Off,
    /// Input A
    InputA,
    /// Input B
    InputB,
}

impl RxAntInput {
    /// Selector byte on the wire
    pub fn civ_code(&self) -> u8 {
        match self {
            RxAntInput::Off => 0x00,
            RxAntInput::InputA => 0x01,
            RxAntInput::InputB => 0x02,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            RxAntInput::Off => "OFF",
            RxAntInput::InputA => "A",
            RxAntInput::InputB => "B",
        }
    }
}

/// A CI-V control command
///
/// Each variant corresponds to one command frame. Levels are the raw 0-255
/// device range; use [`percent_to_level`] and [`wpm_to_level`] to map from
/// operator-facing units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CivCommand {
    /// Set RF output power (cmd `14 0A`)
    SetPower { level: u8 },
    /// Set internal keyer speed (cmd `14 0C`)
    SetKeyerSpeed { level: u8 },
    /// Enable or disable RIT (cmd `21 01`)
    RitEnable { on: bool },
    /// Set the RIT offset in Hz, sign carried in a trailing byte (cmd `21 00`)
    SetRitOffset { hz: i32 },
    /// Select the main or sub receiver (cmd `07 D0`/`07 D1`)
    SelectReceiver { vfo: Vfo },
    /// Enable or disable dual watch (cmd `07 C1`/`07 C0`)
    DualWatch { on: bool },
    /// Enable or disable split operation (cmd `0F`)
    Split { on: bool },
    /// Disable the audio peak filter (cmd `16 32`)
    DisableApf,
    /// Select IF filter for a VFO, carrying the current mode (cmd `26`)
    SetModeFilter {
        vfo: Vfo,
        mode: Option<OperatingMode>,
        filter: u8,
    },
    /// Put the spectrum scope in fixed-edge mode (cmd `27 14`)
    ScopeFixedMode,
    /// Select which stored edge set the scope uses (cmd `27 16`)
    SelectScopeEdgeSet { set: u8 },
    /// Program a stored edge set with explicit band edges (cmd `27 1E`)
    SetScopeEdges {
        /// Radio's per-MHz edge group, BCD coded on the wire
        group: u8,
        /// Edge set being programmed
        set: u8,
        /// Lower edge in kHz
        lower_khz: u32,
        /// Upper edge in kHz
        upper_khz: u32,
    },
    /// Set the scope reference level in dB (cmd `27 19`)
    SetScopeRefLevel { db: i16 },
    /// Trigger (or stop, with slot 0) voice memory playback (cmd `28 00`)
    PlayVoiceMemory { slot: u8 },
    /// Enable or disable the receive antenna path (cmd `12 00`)
    RxAntenna { on: bool },
    /// Select the receive antenna input (cmd `16 53`)
    RxAntennaInput { input: RxAntInput },
}

impl EncodeCommand for CivCommand {
    fn encode(&self) -> Vec<u8> {
        match self {
            CivCommand::SetPower { level } => {
                let mut frame = vec![0x14, 0x0A];
                frame.extend(bcd::encode_be(u64::from(*level), 4));
                frame
            }
            CivCommand::SetKeyerSpeed { level } => {
                let mut frame = vec![0x14, 0x0C];
                frame.extend(bcd::encode_be(u64::from(*level), 4));
                frame
            }
            CivCommand::RitEnable { on } => vec![0x21, 0x01, u8::from(*on)],
            CivCommand::SetRitOffset { hz } => {
                let mut frame = vec![0x21, 0x00];
                frame.extend(bcd::encode_le(u64::from(hz.unsigned_abs()), 4));
                frame.push(u8::from(*hz < 0));
                frame
            }
            CivCommand::SelectReceiver { vfo } => match vfo {
                Vfo::A => vec![0x07, 0xD0],
                Vfo::B => vec![0x07, 0xD1],
            },
            CivCommand::DualWatch { on } => vec![0x07, if *on { 0xC1 } else { 0xC0 }],
            CivCommand::Split { on } => vec![0x0F, u8::from(*on)],
            CivCommand::DisableApf => vec![0x16, 0x32, 0x00],
            CivCommand::SetModeFilter { vfo, mode, filter } => vec![
                0x26,
                vfo.civ_code(),
                mode.map_or(0x00, |m| m.civ_code()),
                0x00,
                *filter,
            ],
            CivCommand::ScopeFixedMode => vec![0x27, 0x14, 0x00, 0x01],
            CivCommand::SelectScopeEdgeSet { set } => vec![0x27, 0x16, 0x00, *set],
            CivCommand::SetScopeEdges {
                group,
                set,
                lower_khz,
                upper_khz,
            } => {
                let mut frame = vec![0x27, 0x1E];
                frame.extend(bcd::encode_be(u64::from(*group), 2));
                frame.push(*set);
                // Edges travel as full ten digit frequency fields in Hz
                frame.extend(bcd::encode_le(u64::from(*lower_khz) * 1000, 10));
                frame.extend(bcd::encode_le(u64::from(*upper_khz) * 1000, 10));
                frame
            }
            CivCommand::SetScopeRefLevel { db } => {
                let mut frame = vec![0x27, 0x19, 0x00];
                frame.extend(bcd::encode_be(db.unsigned_abs().into(), 2));
                frame.push(0x00);
                frame.push(u8::from(*db < 0));
                frame
            }
            CivCommand::PlayVoiceMemory { slot } => vec![0x28, 0x00, *slot],
            CivCommand::RxAntenna { on } => vec![0x12, 0x00, u8::from(*on)],
            CivCommand::RxAntennaInput { input } => vec![0x16, 0x53, input.civ_code()],
        }
    }
}

/// Map an output power percentage onto the device's 0-255 level range.
///
/// Rounds up so that any nonzero percentage yields a nonzero level, then
/// clamps to the device range.
pub fn percent_to_level(percent: u8) -> u8 {
    let scaled = (255.0 * f32::from(percent)) / 100.0 + 0.99;
    (scaled as i32).clamp(0, 255) as u8
}

/// Lowest keyer speed on the device scale, in WPM
pub const MIN_WPM: u8 = 6;
/// Highest keyer speed on the device scale, in WPM
pub const MAX_WPM: u8 = 48;

/// Map a keyer speed in WPM onto the device's 0-255 level range.
///
/// The device scales 6-48 WPM linearly onto 0-255. Speeds outside that range
/// clamp to the nearest endpoint.
pub fn wpm_to_level(wpm: u8) -> u8 {
    let span = f32::from(MAX_WPM) - f32::from(MIN_WPM);
    let scaled = (255.0 * (f32::from(wpm) - f32::from(MIN_WPM))) / span + 0.99;
    (scaled as i32).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_power_frame() {
        let cmd = CivCommand::SetPower { level: 59 };
        assert_eq!(cmd.encode(), vec![0x14, 0x0A, 0x00, 0x59]);

        let cmd = CivCommand::SetPower { level: 255 };
        assert_eq!(cmd.encode(), vec![0x14, 0x0A, 0x02, 0x55]);
    }

    #[test]
    fn test_set_keyer_speed_frame() {
        let cmd = CivCommand::SetKeyerSpeed { level: 158 };
        assert_eq!(cmd.encode(), vec![0x14, 0x0C, 0x01, 0x58]);
    }

    #[test]
    fn test_rit_offset_sign_byte() {
        let cmd = CivCommand::SetRitOffset { hz: -20 };
        assert_eq!(cmd.encode(), vec![0x21, 0x00, 0x20, 0x00, 0x01]);

        let cmd = CivCommand::SetRitOffset { hz: 140 };
        assert_eq!(cmd.encode(), vec![0x21, 0x00, 0x40, 0x01, 0x00]);

        let cmd = CivCommand::SetRitOffset { hz: 0 };
        assert_eq!(cmd.encode(), vec![0x21, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_rit_enable_frames() {
        assert_eq!(
            CivCommand::RitEnable { on: true }.encode(),
            vec![0x21, 0x01, 0x01]
        );
        assert_eq!(
            CivCommand::RitEnable { on: false }.encode(),
            vec![0x21, 0x01, 0x00]
        );
    }

    #[test]
    fn test_receiver_and_watch_frames() {
        assert_eq!(
            CivCommand::SelectReceiver { vfo: Vfo::A }.encode(),
            vec![0x07, 0xD0]
        );
        assert_eq!(
            CivCommand::SelectReceiver { vfo: Vfo::B }.encode(),
            vec![0x07, 0xD1]
        );
        assert_eq!(
            CivCommand::DualWatch { on: true }.encode(),
            vec![0x07, 0xC1]
        );
        assert_eq!(
            CivCommand::DualWatch { on: false }.encode(),
            vec![0x07, 0xC0]
        );
        assert_eq!(CivCommand::Split { on: false }.encode(), vec![0x0F, 0x00]);
    }

    #[test]
    fn test_mode_filter_frame() {
        let cmd = CivCommand::SetModeFilter {
            vfo: Vfo::B,
            mode: Some(OperatingMode::Cw),
            filter: 2,
        };
        assert_eq!(cmd.encode(), vec![0x26, 0x01, 0x03, 0x00, 0x02]);

        // Unknown mode falls back to the LSB code, matching device behavior
        let cmd = CivCommand::SetModeFilter {
            vfo: Vfo::A,
            mode: None,
            filter: 1,
        };
        assert_eq!(cmd.encode(), vec![0x26, 0x00, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn test_scope_edges_frame() {
        let cmd = CivCommand::SetScopeEdges {
            group: 6,
            set: 3,
            lower_khz: 14_000,
            upper_khz: 14_070,
        };
        assert_eq!(
            cmd.encode(),
            vec![
                0x27, 0x1E, 0x06, 0x03, // group and edge set
                0x00, 0x00, 0x00, 0x14, 0x00, // 14.000 MHz
                0x00, 0x00, 0x07, 0x14, 0x00, // 14.070 MHz
            ]
        );

        // Two digit edge group is BCD coded
        let cmd = CivCommand::SetScopeEdges {
            group: 12,
            set: 3,
            lower_khz: 50_000,
            upper_khz: 50_100,
        };
        assert_eq!(cmd.encode()[2], 0x12);
    }

    #[test]
    fn test_scope_ref_level_frame() {
        let cmd = CivCommand::SetScopeRefLevel { db: -11 };
        assert_eq!(cmd.encode(), vec![0x27, 0x19, 0x00, 0x11, 0x00, 0x01]);

        let cmd = CivCommand::SetScopeRefLevel { db: 4 };
        assert_eq!(cmd.encode(), vec![0x27, 0x19, 0x00, 0x04, 0x00, 0x00]);
    }

    #[test]
    fn test_misc_frames() {
        assert_eq!(CivCommand::DisableApf.encode(), vec![0x16, 0x32, 0x00]);
        assert_eq!(
            CivCommand::ScopeFixedMode.encode(),
            vec![0x27, 0x14, 0x00, 0x01]
        );
        assert_eq!(
            CivCommand::SelectScopeEdgeSet { set: 3 }.encode(),
            vec![0x27, 0x16, 0x00, 0x03]
        );
        assert_eq!(
            CivCommand::PlayVoiceMemory { slot: 0 }.encode(),
            vec![0x28, 0x00, 0x00]
        );
        assert_eq!(
            CivCommand::RxAntenna { on: true }.encode(),
            vec![0x12, 0x00, 0x01]
        );
        assert_eq!(
            CivCommand::RxAntennaInput {
                input: RxAntInput::InputB
            }
            .encode(),
            vec![0x16, 0x53, 0x02]
        );
    }

    #[test]
    fn test_percent_to_level_endpoints() {
        assert_eq!(percent_to_level(0), 0);
        assert_eq!(percent_to_level(100), 255);
        // Any nonzero percentage rounds up to a nonzero level
        assert_eq!(percent_to_level(1), 3);
        // 23% is a typical contest power setting
        assert_eq!(percent_to_level(23), 59);
    }

    #[test]
    fn test_percent_to_level_clamps_over_100() {
        assert_eq!(percent_to_level(150), 255);
        assert_eq!(percent_to_level(255), 255);
    }

    #[test]
    fn test_wpm_to_level_endpoints() {
        assert_eq!(wpm_to_level(MIN_WPM), 0);
        assert_eq!(wpm_to_level(MAX_WPM), 255);
        // Below the scale floor clamps to zero
        assert_eq!(wpm_to_level(0), 0);
        assert_eq!(wpm_to_level(5), 0);
        // Above the ceiling clamps to full scale
        assert_eq!(wpm_to_level(60), 255);
    }

    #[test]
    fn test_wpm_to_level_monotonic() {
        let mut last = 0;
        for wpm in MIN_WPM..=MAX_WPM {
            let level = wpm_to_level(wpm);
            assert!(level >= last, "level decreased at {wpm} wpm");
            last = level;
        }
    }
}
