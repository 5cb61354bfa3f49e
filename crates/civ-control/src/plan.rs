//! Per-band configuration tables
//!
//! Power levels, scope edges and reference levels are configured as rows
//! keyed by a band's lower edge. At build time each row is flattened into a
//! lookup keyed by integer MHz, so a handler resolves a VFO frequency with a
//! single truncating division. Lookups are exact: a frequency whose MHz has
//! no configured row yields nothing and the handler skips its action.

use std::collections::HashMap;

use civ_proto::OperatingMode;
use serde::{Deserialize, Serialize};

use crate::routing::PhysicalRadio;

/// Scope configuration segment selector derived from the operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeMode {
    /// CW segment
    Cw,
    /// Digital (RTTY) segment
    Digital,
    /// Phone segment
    Phone,
    /// Whole-band segment, also the fallback for unrecognized modes
    Band,
}

impl From<OperatingMode> for ScopeMode {
    fn from(mode: OperatingMode) -> Self {
        match mode {
            OperatingMode::Cw | OperatingMode::CwR => ScopeMode::Cw,
            OperatingMode::Rtty | OperatingMode::RttyR => ScopeMode::Digital,
            OperatingMode::Usb | OperatingMode::Lsb | OperatingMode::Am => ScopeMode::Phone,
            _ => ScopeMode::Band,
        }
    }
}

/// One configured output power row
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerRow {
    /// Lower band edge in kHz; the row covers that edge's whole MHz
    pub lower_khz: u32,
    /// Output power as a percentage of full power
    pub percent: u8,
}

/// Scope edges and reference level for one mode segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScopeSegment {
    /// Lower scope edge in kHz
    pub lower_khz: u32,
    /// Upper scope edge in kHz
    pub upper_khz: u32,
    /// Scope reference level in dB
    pub ref_level_db: i16,
}

/// One configured scope row: a segment per scope mode
///
/// The CW segment's lower edge determines which MHz the row covers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScopeRow {
    pub cw: ScopeSegment,
    pub digital: ScopeSegment,
    pub phone: ScopeSegment,
    pub band: ScopeSegment,
}

/// One configured zoom reference level row
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RefLevelRow {
    /// Integer MHz the row covers
    pub mhz: u32,
    /// Scope reference level in dB
    pub db: i16,
}

/// Band plan configuration: one row set per physical radio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandPlanConfig {
    /// Output power rows for radio 1 and radio 2
    pub power: [Vec<PowerRow>; 2],
    /// Scope edge rows for radio 1 and radio 2
    pub scope: [Vec<ScopeRow>; 2],
    /// Zoom reference level rows for radio 1 and radio 2
    pub zoom_ref: [Vec<RefLevelRow>; 2],
}

impl Default for BandPlanConfig {
    fn default() -> Self {
        Self {
            power: [default_power_rows(), default_power_rows()],
            scope: [default_scope_rows_radio1(), default_scope_rows_radio2()],
            zoom_ref: [default_zoom_ref_rows(), default_zoom_ref_rows()],
        }
    }
}

/// Truncate a kHz frequency to its integer MHz lookup key
fn mhz_key(khz: f64) -> u32 {
    (khz / 1000.0) as u32
}

/// Flattened per-MHz output power lookup
#[derive(Debug, Clone)]
pub struct PowerTable {
    cells: HashMap<(usize, u32), u8>,
}

impl PowerTable {
    /// Build the lookup from configured rows. Later rows overwrite earlier
    /// ones that land on the same MHz.
    pub fn build(rows: &[Vec<PowerRow>; 2]) -> Self {
        let mut cells = HashMap::new();
        for (index, radio_rows) in rows.iter().enumerate() {
            for row in radio_rows {
                cells.insert((index, mhz_key(f64::from(row.lower_khz))), row.percent);
            }
        }
        Self { cells }
    }

    /// Configured power percentage for a frequency, if any
    pub fn lookup(&self, radio: PhysicalRadio, khz: f64) -> Option<u8> {
        self.cells.get(&(radio.index(), mhz_key(khz))).copied()
    }
}

/// Flattened per-MHz, per-mode scope segment lookup
#[derive(Debug, Clone)]
pub struct ScopeTable {
    cells: HashMap<(usize, u32, ScopeMode), ScopeSegment>,
}

impl ScopeTable {
    /// Build the lookup from configured rows
    pub fn build(rows: &[Vec<ScopeRow>; 2]) -> Self {
        let mut cells = HashMap::new();
        for (index, radio_rows) in rows.iter().enumerate() {
            for row in radio_rows {
                let mhz = mhz_key(f64::from(row.cw.lower_khz));
                cells.insert((index, mhz, ScopeMode::Cw), row.cw);
                cells.insert((index, mhz, ScopeMode::Digital), row.digital);
                cells.insert((index, mhz, ScopeMode::Phone), row.phone);
                cells.insert((index, mhz, ScopeMode::Band), row.band);
            }
        }
        Self { cells }
    }

    /// Configured scope segment for a frequency and mode, if any
    pub fn lookup(&self, radio: PhysicalRadio, khz: f64, mode: ScopeMode) -> Option<ScopeSegment> {
        self.cells
            .get(&(radio.index(), mhz_key(khz), mode))
            .copied()
    }
}

/// Flattened per-MHz zoom reference level lookup
#[derive(Debug, Clone)]
pub struct RefLevelTable {
    cells: HashMap<(usize, u32), i16>,
}

impl RefLevelTable {
    /// Build the lookup from configured rows
    pub fn build(rows: &[Vec<RefLevelRow>; 2]) -> Self {
        let mut cells = HashMap::new();
        for (index, radio_rows) in rows.iter().enumerate() {
            for row in radio_rows {
                cells.insert((index, row.mhz), row.db);
            }
        }
        Self { cells }
    }

    /// Configured zoom reference level for a frequency, if any
    pub fn lookup(&self, radio: PhysicalRadio, khz: f64) -> Option<i16> {
        self.cells.get(&(radio.index(), mhz_key(khz))).copied()
    }
}

/// Map an integer MHz to the radio's scope edge group (1-12)
///
/// Layout used by the IC-7800, IC-785x, IC-7300 and IC-7610. Frequencies
/// above 54 MHz are outside the table.
pub fn scope_band_group(mhz: u32) -> Option<u8> {
    const GROUPS: [u8; 55] = [
        1, 2, 3, 3, 3, 3, 4, 4, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 7, 7, 8, 8, 9, 9, 9, 9, 10, 10, 10,
        10, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 12,
        12, 12, 12, 12,
    ];
    GROUPS.get(mhz as usize).copied()
}

/// Contest-safe output power percentages per band
pub fn default_power_rows() -> Vec<PowerRow> {
    [
        (1_800, 1),   // 160m
        (3_500, 23),  // 80m
        (5_351, 1),   // 60m
        (7_000, 28),  // 40m
        (10_100, 9),  // 30m
        (14_000, 23), // 20m
        (18_086, 23), // 17m
        (21_000, 25), // 15m
        (24_890, 23), // 12m
        (28_000, 23), // 10m
        (50_000, 8),  // 6m
        (70_000, 8),  // 4m
    ]
    .into_iter()
    .map(|(lower_khz, percent)| PowerRow { lower_khz, percent })
    .collect()
}

fn seg(lower_khz: u32, upper_khz: u32, ref_level_db: i16) -> ScopeSegment {
    ScopeSegment {
        lower_khz,
        upper_khz,
        ref_level_db,
    }
}

/// Scope segments per band for radio 1
pub fn default_scope_rows_radio1() -> Vec<ScopeRow> {
    vec![
        // 160m
        ScopeRow {
            cw: seg(1_810, 1_840, -6),
            digital: seg(1_840, 1_860, -6),
            phone: seg(1_840, 2_000, -6),
            band: seg(1_800, 2_000, -10),
        },
        // 80m
        ScopeRow {
            cw: seg(3_500, 3_570, -14),
            digital: seg(3_570, 3_600, -11),
            phone: seg(3_600, 3_800, -17),
            band: seg(3_500, 3_800, -18),
        },
        // 60m
        ScopeRow {
            cw: seg(5_352, 5_366, -5),
            digital: seg(5_352, 5_366, -5),
            phone: seg(5_352, 5_366, -5),
            band: seg(5_352, 5_366, -5),
        },
        // 40m
        ScopeRow {
            cw: seg(7_000, 7_040, -6),
            digital: seg(7_040, 7_080, -6),
            phone: seg(7_040, 7_200, -14),
            band: seg(7_000, 7_200, -15),
        },
        // 30m
        ScopeRow {
            cw: seg(10_100, 10_130, 4),
            digital: seg(10_130, 10_150, 4),
            phone: seg(10_100, 10_150, 4),
            band: seg(10_100, 10_150, 4),
        },
        // 20m
        ScopeRow {
            cw: seg(14_000, 14_070, -2),
            digital: seg(14_070, 14_100, -1),
            phone: seg(14_100, 14_350, -4),
            band: seg(14_000, 14_350, -4),
        },
        // 17m
        ScopeRow {
            cw: seg(18_068, 18_109, -2),
            digital: seg(18_089, 18_109, -2),
            phone: seg(18_111, 18_168, -6),
            band: seg(18_068, 18_168, -9),
        },
        // 15m
        ScopeRow {
            cw: seg(21_000, 21_070, -3),
            digital: seg(21_070, 21_150, -5),
            phone: seg(21_150, 21_450, -12),
            band: seg(21_000, 21_450, -16),
        },
        // 12m
        ScopeRow {
            cw: seg(24_890, 24_920, -1),
            digital: seg(24_910, 24_932, -1),
            phone: seg(24_931, 24_990, -4),
            band: seg(24_890, 24_990, -7),
        },
        // 10m
        ScopeRow {
            cw: seg(28_000, 28_070, -4),
            digital: seg(28_070, 28_110, 0),
            phone: seg(28_300, 28_600, -9),
            band: seg(28_000, 29_000, 1),
        },
        // 6m
        ScopeRow {
            cw: seg(50_000, 50_100, -4),
            digital: seg(50_300, 50_350, 0),
            phone: seg(50_100, 50_500, -11),
            band: seg(50_000, 50_500, -15),
        },
    ]
}

/// Scope segments per band for radio 2
pub fn default_scope_rows_radio2() -> Vec<ScopeRow> {
    vec![
        // 160m
        ScopeRow {
            cw: seg(1_810, 1_840, -6),
            digital: seg(1_840, 1_860, -6),
            phone: seg(1_840, 2_000, -6),
            band: seg(1_800, 2_000, -10),
        },
        // 80m
        ScopeRow {
            cw: seg(3_500, 3_570, -14),
            digital: seg(3_570, 3_600, -11),
            phone: seg(3_600, 3_800, -17),
            band: seg(3_500, 3_800, -18),
        },
        // 60m
        ScopeRow {
            cw: seg(5_352, 5_366, 0),
            digital: seg(5_352, 5_366, 0),
            phone: seg(5_352, 5_366, 0),
            band: seg(5_352, 5_366, 0),
        },
        // 40m
        ScopeRow {
            cw: seg(7_000, 7_040, 0),
            digital: seg(7_040, 7_080, 0),
            phone: seg(7_040, 7_200, -6),
            band: seg(7_000, 7_200, -8),
        },
        // 30m
        ScopeRow {
            cw: seg(10_100, 10_130, 10),
            digital: seg(10_130, 10_150, 6),
            phone: seg(10_100, 10_150, 4),
            band: seg(10_100, 10_150, 4),
        },
        // 20m
        ScopeRow {
            cw: seg(14_000, 14_070, 0),
            digital: seg(14_070, 14_100, -1),
            phone: seg(14_100, 14_350, -4),
            band: seg(14_000, 14_350, -6),
        },
        // 17m
        ScopeRow {
            cw: seg(18_068, 18_109, -2),
            digital: seg(18_089, 18_109, -2),
            phone: seg(18_111, 18_168, -6),
            band: seg(18_068, 18_168, -9),
        },
        // 15m
        ScopeRow {
            cw: seg(21_000, 21_070, 0),
            digital: seg(21_070, 21_150, -5),
            phone: seg(21_150, 21_450, -6),
            band: seg(21_000, 21_450, -8),
        },
        // 12m
        ScopeRow {
            cw: seg(24_890, 24_920, 5),
            digital: seg(24_910, 24_932, 3),
            phone: seg(24_931, 24_990, 3),
            band: seg(24_890, 24_990, 0),
        },
        // 10m
        ScopeRow {
            cw: seg(28_000, 28_070, -2),
            digital: seg(28_070, 28_110, 0),
            phone: seg(28_300, 28_600, -9),
            band: seg(28_000, 29_000, 1),
        },
        // 6m
        ScopeRow {
            cw: seg(50_000, 50_100, 0),
            digital: seg(50_300, 50_350, 0),
            phone: seg(50_100, 50_500, -11),
            band: seg(50_000, 50_500, -15),
        },
    ]
}

/// Zoom reference levels per band
pub fn default_zoom_ref_rows() -> Vec<RefLevelRow> {
    [
        (1, -3),   // 160m
        (3, -11),  // 80m
        (5, 1),    // 60m
        (7, -6),   // 40m
        (10, 2),   // 30m
        (14, 2),   // 20m
        (18, -2),  // 17m
        (21, -5),  // 15m
        (24, 0),   // 12m
        (28, 0),   // 10m
        (29, 0),   // 10m
        (50, 2),   // 6m
    ]
    .into_iter()
    .map(|(mhz, db)| RefLevelRow { mhz, db })
    .collect()
}
