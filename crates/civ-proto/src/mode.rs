//! Operating modes and their CI-V mode codes

/// Operating mode of a receiver VFO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatingMode {
    /// Lower sideband
    Lsb,
    /// Upper sideband
    Usb,
    /// Amplitude modulation
    Am,
    /// CW (morse)
    Cw,
    /// CW reverse sideband
    CwR,
    /// RTTY/FSK
    Rtty,
    /// RTTY reverse sideband
    RttyR,
    /// Frequency modulation
    Fm,
}

impl OperatingMode {
    /// CI-V mode code as used by the mode/filter command (cmd `26`)
    pub fn civ_code(&self) -> u8 {
        match self {
            OperatingMode::Lsb => 0x00,
            OperatingMode::Usb => 0x01,
            OperatingMode::Am => 0x02,
            OperatingMode::Cw => 0x03,
            OperatingMode::Rtty => 0x04,
            OperatingMode::Fm => 0x05,
            OperatingMode::CwR => 0x07,
            OperatingMode::RttyR => 0x08,
        }
    }

    /// Check if this is a CW mode
    pub fn is_cw(&self) -> bool {
        matches!(self, OperatingMode::Cw | OperatingMode::CwR)
    }

    /// Check if this is a digital (FSK) mode
    pub fn is_digital(&self) -> bool {
        matches!(self, OperatingMode::Rtty | OperatingMode::RttyR)
    }

    /// Check if this is a voice mode
    pub fn is_voice(&self) -> bool {
        matches!(
            self,
            OperatingMode::Lsb | OperatingMode::Usb | OperatingMode::Am | OperatingMode::Fm
        )
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            OperatingMode::Lsb => "LSB",
            OperatingMode::Usb => "USB",
            OperatingMode::Am => "AM",
            OperatingMode::Cw => "CW",
            OperatingMode::CwR => "CW-R",
            OperatingMode::Rtty => "RTTY",
            OperatingMode::RttyR => "RTTY-R",
            OperatingMode::Fm => "FM",
        }
    }
}
