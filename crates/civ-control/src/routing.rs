//! Logical-to-physical radio routing
//!
//! The operator works with logical radios; which physical radio and VFO a
//! command must reach depends on the operating technique. SO2R maps logical
//! radios onto separate physical radios, SO2V maps them onto the two VFOs of
//! physical radio 1, and SO1R routes everything to physical radio 1's VFO A.

use civ_proto::Vfo;

use crate::state::{LogicalRadio, OperatingTechnique};

/// Physical radio attached to the station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalRadio {
    /// First (or only) physical radio
    Radio1,
    /// Second physical radio, present only in SO2R setups
    Radio2,
}

impl PhysicalRadio {
    /// Zero-based index for table and port slots
    pub fn index(&self) -> usize {
        match self {
            PhysicalRadio::Radio1 => 0,
            PhysicalRadio::Radio2 => 1,
        }
    }

    /// Operator-facing radio number (1 or 2)
    pub fn number(&self) -> u8 {
        match self {
            PhysicalRadio::Radio1 => 1,
            PhysicalRadio::Radio2 => 2,
        }
    }
}

impl From<LogicalRadio> for PhysicalRadio {
    /// Same-numbered physical radio, used where a technique keeps the
    /// logical and physical numbering aligned
    fn from(logical: LogicalRadio) -> Self {
        match logical {
            LogicalRadio::Radio1 => PhysicalRadio::Radio1,
            LogicalRadio::Radio2 => PhysicalRadio::Radio2,
        }
    }
}

/// Where a logical radio's commands should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Both logical radios share one physical radio; the VFO distinguishes them
    SingleDevice { vfo: Vfo },
    /// Each logical radio owns a physical radio, always on VFO A
    DualDevice { radio: PhysicalRadio },
}

impl RouteTarget {
    /// Physical radio this route lands on
    pub fn physical_radio(&self) -> PhysicalRadio {
        match self {
            RouteTarget::SingleDevice { .. } => PhysicalRadio::Radio1,
            RouteTarget::DualDevice { radio } => *radio,
        }
    }

    /// VFO this route addresses
    pub fn vfo(&self) -> Vfo {
        match self {
            RouteTarget::SingleDevice { vfo } => *vfo,
            RouteTarget::DualDevice { .. } => Vfo::A,
        }
    }
}

/// Resolve a logical radio to its physical radio and VFO.
///
/// SO1R has no second logical radio; if one is reported anyway it degrades
/// to radio 1 / VFO A rather than failing.
pub fn resolve(technique: OperatingTechnique, logical: LogicalRadio) -> RouteTarget {
    match technique {
        OperatingTechnique::So2r | OperatingTechnique::So2rAdvanced => RouteTarget::DualDevice {
            radio: logical.into(),
        },
        OperatingTechnique::So2v => RouteTarget::SingleDevice {
            vfo: match logical {
                LogicalRadio::Radio1 => Vfo::A,
                LogicalRadio::Radio2 => Vfo::B,
            },
        },
        OperatingTechnique::So1r => RouteTarget::SingleDevice { vfo: Vfo::A },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_so2r_routes_to_matching_physical_radio() {
        for technique in [OperatingTechnique::So2r, OperatingTechnique::So2rAdvanced] {
            let r1 = resolve(technique, LogicalRadio::Radio1);
            assert_eq!(r1.physical_radio(), PhysicalRadio::Radio1);
            assert_eq!(r1.vfo(), Vfo::A);

            let r2 = resolve(technique, LogicalRadio::Radio2);
            assert_eq!(r2.physical_radio(), PhysicalRadio::Radio2);
            assert_eq!(r2.vfo(), Vfo::A);
        }
    }

    #[test]
    fn test_so2v_routes_to_vfos_of_radio_1() {
        let r1 = resolve(OperatingTechnique::So2v, LogicalRadio::Radio1);
        assert_eq!(
            r1,
            RouteTarget::SingleDevice { vfo: Vfo::A }
        );

        let r2 = resolve(OperatingTechnique::So2v, LogicalRadio::Radio2);
        assert_eq!(
            r2,
            RouteTarget::SingleDevice { vfo: Vfo::B }
        );
        assert_eq!(r2.physical_radio(), PhysicalRadio::Radio1);
    }

    #[test]
    fn test_so1r_always_routes_to_radio_1_vfo_a() {
        for logical in [LogicalRadio::Radio1, LogicalRadio::Radio2] {
            let target = resolve(OperatingTechnique::So1r, logical);
            assert_eq!(target.physical_radio(), PhysicalRadio::Radio1);
            assert_eq!(target.vfo(), Vfo::A);
        }
    }
}
