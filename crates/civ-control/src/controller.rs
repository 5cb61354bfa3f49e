//! The contest controller
//!
//! [`Controller`] owns the attached radio ports, the flattened band plan
//! tables, and the small amount of state the handlers accumulate (RIT
//! offsets, receive antenna selections, filter index, SO2V audio state). One
//! call to [`Controller::handle`] processes one host event synchronously;
//! every CI-V command a handler produces is sent before the call returns.
//!
//! Handlers never propagate errors to the caller. An absent radio is
//! reported once on the status line, a radio that does not speak CI-V is
//! skipped silently, and a frequency with no configured table row skips the
//! action.

use std::thread;
use std::time::Duration;

use civ_proto::{percent_to_level, wpm_to_level, CivCommand, OperatingMode, RxAntInput, Vfo};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ControlError;
use crate::events::ControlEvent;
use crate::plan::{
    scope_band_group, BandPlanConfig, PowerTable, RefLevelTable, ScopeMode, ScopeTable,
};
use crate::ports::{HostPort, RadioPort, StatusSink};
use crate::routing::{resolve, PhysicalRadio};
use crate::state::{
    ContestSnapshot, LogicalRadio, OperatingTechnique, RitState, RunMode, RxAntState, StartupGuard,
};

/// Controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Which of the radio's stored scope edge sets the controller programs
    pub edge_set: u8,
    /// Width of the zoomed scope window in kHz
    pub zoom_width_khz: f64,
    /// Whether each physical radio has a spectrum scope
    pub waterfall_capable: [bool; 2],
    /// Delay between refocusing radio 1 and pressing F1, in milliseconds
    pub focus_settle_ms: u64,
    /// Per-band power, scope and reference level rows
    pub band_plan: BandPlanConfig,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            edge_set: 3,
            zoom_width_khz: 20.0,
            waterfall_capable: [true, true],
            focus_settle_ms: 25,
            band_plan: BandPlanConfig::default(),
        }
    }
}

/// Translates contest operating events into CI-V commands
pub struct Controller {
    config: ControlConfig,
    power: PowerTable,
    scope: ScopeTable,
    zoom_ref: RefLevelTable,
    radios: [Option<Box<dyn RadioPort>>; 2],
    status: Box<dyn StatusSink>,
    host: Box<dyn HostPort>,
    rit: [RitState; 2],
    rx_ant: [RxAntState; 2],
    startup: StartupGuard,
    filter: u8,
    /// Dual watch toggled on top of the host's permanent stereo setting
    temp_stereo: bool,
    last_focus: LogicalRadio,
}

impl Controller {
    /// Create a controller with no radios attached
    pub fn new(
        config: ControlConfig,
        status: Box<dyn StatusSink>,
        host: Box<dyn HostPort>,
    ) -> Self {
        let power = PowerTable::build(&config.band_plan.power);
        let scope = ScopeTable::build(&config.band_plan.scope);
        let zoom_ref = RefLevelTable::build(&config.band_plan.zoom_ref);
        Self {
            config,
            power,
            scope,
            zoom_ref,
            radios: [None, None],
            status,
            host,
            rit: [RitState::default(); 2],
            rx_ant: [RxAntState::default(); 2],
            startup: StartupGuard::new(),
            filter: 2,
            temp_stereo: false,
            last_focus: LogicalRadio::Radio1,
        }
    }

    /// Attach a radio port to one of the two slots
    pub fn attach_radio(&mut self, radio: PhysicalRadio, port: Box<dyn RadioPort>) {
        info!(radio = radio.number(), "radio attached");
        self.radios[radio.index()] = Some(port);
    }

    /// Detach and return the port in a slot, if any
    pub fn detach_radio(&mut self, radio: PhysicalRadio) -> Option<Box<dyn RadioPort>> {
        self.radios[radio.index()].take()
    }

    /// Current RIT state of a physical radio
    pub fn rit_state(&self, radio: PhysicalRadio) -> RitState {
        self.rit[radio.index()]
    }

    /// Current receive antenna state of a physical radio
    pub fn rx_ant_state(&self, radio: PhysicalRadio) -> RxAntState {
        self.rx_ant[radio.index()]
    }

    /// Currently selected IF filter (1-3)
    pub fn current_filter(&self) -> u8 {
        self.filter
    }

    /// Put radios and handler state into a known starting condition.
    ///
    /// Under SO2V radio 1 is forced to dual watch off, main receiver, split
    /// off, matching the host's focus on logical radio 1 at startup. The
    /// receive antenna path is disabled on both radios and the middle IF
    /// filter is selected.
    pub fn initialize(&mut self, snap: &ContestSnapshot) {
        info!(technique = snap.technique.name(), "initializing radio state");

        if snap.technique == OperatingTechnique::So2v && self.is_icom(PhysicalRadio::Radio1) {
            self.temp_stereo = false;
            self.last_focus = LogicalRadio::Radio1;
            self.send(PhysicalRadio::Radio1, &CivCommand::DualWatch { on: false });
            self.send(
                PhysicalRadio::Radio1,
                &CivCommand::SelectReceiver { vfo: Vfo::A },
            );
            self.send(PhysicalRadio::Radio1, &CivCommand::Split { on: false });
        }

        for radio in [PhysicalRadio::Radio1, PhysicalRadio::Radio2] {
            self.set_rx_antenna(radio, false);
            self.set_rx_antenna_input(radio, RxAntInput::Off);
        }

        self.filter = 2;
        self.apply_filter(snap);
    }

    /// Process one event against the given operating state
    pub fn handle(&mut self, snap: &ContestSnapshot, event: ControlEvent) {
        match event {
            ControlEvent::BandChanged { radio } => self.on_band_change(snap, radio),
            ControlEvent::FocusChanged => self.on_focus_change(snap),
            ControlEvent::KeyerSpeedChanged { radio, wpm } => {
                self.on_speed_change(snap, radio, wpm)
            }
            ControlEvent::RestoreBandPower => self.apply_band_power(snap, snap.focused),
            ControlEvent::RestoreWaterfall => self.apply_waterfall(snap, snap.focused),
            ControlEvent::WaterfallZoom => self.waterfall_zoom(snap),
            ControlEvent::CycleFilter => self.cycle_filter(snap),
            ControlEvent::RitStep { hz } => self.rit_step(snap, hz),
            ControlEvent::ClearRit => self.clear_rit(snap),
            ControlEvent::ToggleDualWatch => self.toggle_dual_watch(snap),
            ControlEvent::TogglePermanentDualWatch => self.toggle_permanent_dual_watch(snap),
            ControlEvent::ToggleRxAntenna => {
                self.toggle_rx_antenna(snap);
            }
            ControlEvent::CycleRxAntennaInput => self.cycle_rx_antenna_input(snap),
            ControlEvent::PlayVoiceMemory { slot } => self.play_voice_memory(snap, slot),
            ControlEvent::CqOnRadio1 => self.cq_on_radio_one(snap),
        }
    }

    // -------------------------------------------------------------------------
    // Band changes: power and scope
    // -------------------------------------------------------------------------

    fn on_band_change(&mut self, snap: &ContestSnapshot, logical: LogicalRadio) {
        if self.startup.suppress(snap.technique) {
            debug!(
                event = self.startup.count(),
                "dropped spurious startup band change"
            );
            return;
        }
        self.apply_band_power(snap, logical);
        self.apply_waterfall(snap, logical);
    }

    fn apply_band_power(&mut self, snap: &ContestSnapshot, logical: LogicalRadio) {
        let target = resolve(snap.technique, logical);
        let radio = target.physical_radio();

        if !self.require_port(radio, "Band power") {
            return;
        }
        if !self.is_icom(radio) {
            return;
        }

        let Some(khz) = self.vfo_khz(radio, target.vfo()) else {
            return;
        };
        let Some(percent) = self.power.lookup(radio, khz) else {
            debug!(khz, "no power configured for band; leaving level unchanged");
            return;
        };

        let level = percent_to_level(percent);
        debug!(radio = radio.number(), khz, percent, level, "setting band power");
        self.send(radio, &CivCommand::SetPower { level });
    }

    fn apply_waterfall(&mut self, snap: &ContestSnapshot, logical: LogicalRadio) {
        // The scope only tracks VFO A; a band change on VFO B in SO2V
        // must not disturb it
        if snap.technique == OperatingTechnique::So2v && logical == LogicalRadio::Radio2 {
            return;
        }

        let radio = if snap.technique.is_so2r() {
            logical.into()
        } else {
            PhysicalRadio::Radio1
        };

        if !self.config.waterfall_capable[radio.index()] {
            return;
        }
        if !self.require_port(radio, "Waterfall") {
            return;
        }
        if !self.is_icom(radio) {
            return;
        }

        let Some(khz) = self.vfo_khz(radio, Vfo::A) else {
            return;
        };
        let mode = self
            .vfo_mode(radio, Vfo::A)
            .map_or(ScopeMode::Band, ScopeMode::from);
        let mhz = (khz / 1000.0) as u32;

        let Some(segment) = self.scope.lookup(radio, khz, mode) else {
            debug!(mhz, ?mode, "no scope segment configured; skipping");
            return;
        };
        let Some(group) = scope_band_group(mhz) else {
            debug!(mhz, "frequency outside the scope group map; skipping");
            return;
        };

        self.program_scope(radio, group, segment.lower_khz, segment.upper_khz, segment.ref_level_db);
    }

    fn waterfall_zoom(&mut self, snap: &ContestSnapshot) {
        if snap.technique == OperatingTechnique::So2v && snap.focused == LogicalRadio::Radio2 {
            return;
        }

        let radio = if snap.technique.is_so2r() {
            snap.focused.into()
        } else {
            PhysicalRadio::Radio1
        };

        if !self.config.waterfall_capable[radio.index()] {
            return;
        }
        if !self.require_port(radio, "Waterfall zoom") {
            return;
        }
        if !self.is_icom(radio) {
            return;
        }

        let Some(khz) = self.vfo_khz(radio, Vfo::A) else {
            return;
        };
        let mhz = (khz / 1000.0) as u32;
        let lower_khz = (khz + 0.5 - self.config.zoom_width_khz / 2.0) as u32;
        let upper_khz = (f64::from(lower_khz) + self.config.zoom_width_khz) as u32;

        let Some(db) = self.zoom_ref.lookup(radio, khz) else {
            debug!(mhz, "no zoom ref level configured; skipping");
            return;
        };
        let Some(group) = scope_band_group(mhz) else {
            debug!(mhz, "frequency outside the scope group map; skipping");
            return;
        };

        self.program_scope(radio, group, lower_khz, upper_khz, db);
    }

    /// Program a fixed-edge scope window: fixed mode, edge set selection,
    /// edges, then reference level
    fn program_scope(
        &mut self,
        radio: PhysicalRadio,
        group: u8,
        lower_khz: u32,
        upper_khz: u32,
        db: i16,
    ) {
        let set = self.config.edge_set;
        debug!(
            radio = radio.number(),
            group, lower_khz, upper_khz, db, "programming scope window"
        );
        self.send(radio, &CivCommand::ScopeFixedMode);
        self.send(radio, &CivCommand::SelectScopeEdgeSet { set });
        self.send(
            radio,
            &CivCommand::SetScopeEdges {
                group,
                set,
                lower_khz,
                upper_khz,
            },
        );
        self.send(radio, &CivCommand::SetScopeRefLevel { db });
    }

    // -------------------------------------------------------------------------
    // SO2V focus and audio
    // -------------------------------------------------------------------------

    fn on_focus_change(&mut self, snap: &ContestSnapshot) {
        if snap.technique != OperatingTechnique::So2v {
            return;
        }
        self.so2v_focus_audio(snap);
        self.so2v_focus_power(snap);
    }

    fn so2v_focus_audio(&mut self, snap: &ContestSnapshot) {
        // The host occasionally re-raises the event without an actual change
        if snap.focused == self.last_focus {
            return;
        }
        self.temp_stereo = snap.stereo_audio;
        self.last_focus = snap.focused;

        let vfo = match snap.focused {
            LogicalRadio::Radio1 => Vfo::A,
            LogicalRadio::Radio2 => Vfo::B,
        };
        let watch = snap.stereo_audio || snap.focused == LogicalRadio::Radio2;

        if self.is_icom(PhysicalRadio::Radio1) {
            self.send(PhysicalRadio::Radio1, &CivCommand::SelectReceiver { vfo });
            self.send(PhysicalRadio::Radio1, &CivCommand::DualWatch { on: watch });
        }

        self.status.status(&format!(
            "Focus on {} VFO. {}",
            match vfo {
                Vfo::A => "main",
                Vfo::B => "sub",
            },
            if watch {
                "Both receivers"
            } else {
                "Main receiver only"
            }
        ));
    }

    fn so2v_focus_power(&mut self, snap: &ContestSnapshot) {
        let radio = PhysicalRadio::Radio1;

        if !self.require_port(radio, "Band power") {
            return;
        }
        if !self.is_icom(radio) {
            return;
        }

        let (Some(a_khz), Some(b_khz)) =
            (self.vfo_khz(radio, Vfo::A), self.vfo_khz(radio, Vfo::B))
        else {
            return;
        };

        // Only force the level when the focus switch is also a band switch,
        // leaving manual adjustments alone in same-band operation
        if (a_khz / 1000.0) as u32 == (b_khz / 1000.0) as u32 {
            debug!("focus change within band; leaving power untouched");
            return;
        }

        let khz = match snap.focused {
            LogicalRadio::Radio1 => a_khz,
            LogicalRadio::Radio2 => b_khz,
        };
        let Some(percent) = self.power.lookup(radio, khz) else {
            debug!(khz, "no power configured for band; leaving level unchanged");
            return;
        };

        let level = percent_to_level(percent);
        self.send(radio, &CivCommand::SetPower { level });
    }

    fn toggle_dual_watch(&mut self, snap: &ContestSnapshot) {
        if snap.focused != LogicalRadio::Radio1 || snap.technique != OperatingTechnique::So2v {
            return;
        }

        self.temp_stereo = !self.temp_stereo;
        let on = self.temp_stereo;
        self.status.status(if on {
            "Both receivers."
        } else {
            "Main receiver only."
        });

        if self.is_icom(PhysicalRadio::Radio1) {
            self.send(PhysicalRadio::Radio1, &CivCommand::DualWatch { on });
        }
    }

    fn toggle_permanent_dual_watch(&mut self, snap: &ContestSnapshot) {
        // The host flips its own stereo setting on the same keystroke; the
        // radio is set to the state the host is about to enter
        let stereo = snap.stereo_audio;
        self.status.status(&format!(
            "Sub receiver {}permanently on.",
            if stereo { "not " } else { "" }
        ));

        if snap.focused == LogicalRadio::Radio1
            && snap.technique == OperatingTechnique::So2v
            && self.is_icom(PhysicalRadio::Radio1)
        {
            self.send(PhysicalRadio::Radio1, &CivCommand::DualWatch { on: !stereo });
        }
    }

    // -------------------------------------------------------------------------
    // RIT
    // -------------------------------------------------------------------------

    fn rit_step(&mut self, snap: &ContestSnapshot, hz: i32) {
        let so2r = snap.technique.is_so2r();

        if self.radios[0].is_none() {
            self.status.status("RIT: Radio 1 is not available.");
            return;
        }
        if so2r && self.radios[1].is_none() {
            self.status.status("RIT: Radio 2 is not available.");
            return;
        }

        match snap.focused {
            LogicalRadio::Radio1 => {
                if snap.primary_mode == RunMode::Run {
                    // Running: shift the receiver, keep the TX frequency
                    self.apply_rit_step(PhysicalRadio::Radio1, hz);
                } else {
                    // Searching: move the whole VFO
                    self.nudge_vfo(PhysicalRadio::Radio1, Vfo::A, hz);
                }
            }
            LogicalRadio::Radio2 => {
                if snap.secondary_mode == RunMode::Run {
                    if so2r {
                        self.apply_rit_step(PhysicalRadio::Radio2, hz);
                    }
                    // Running on VFO B in SO2V has no RIT to shift
                } else if so2r {
                    self.nudge_vfo(PhysicalRadio::Radio2, Vfo::A, hz);
                } else {
                    self.nudge_vfo(PhysicalRadio::Radio1, Vfo::B, hz);
                }
            }
        }
    }

    fn apply_rit_step(&mut self, radio: PhysicalRadio, hz: i32) {
        if !self.is_icom(radio) {
            return;
        }

        let state = &mut self.rit[radio.index()];
        state.offset_hz += hz;
        state.enabled = true;
        let offset = state.offset_hz;

        debug!(radio = radio.number(), offset, "stepping RIT");
        self.send(radio, &CivCommand::RitEnable { on: true });
        self.send(radio, &CivCommand::SetRitOffset { hz: offset });
    }

    fn nudge_vfo(&mut self, radio: PhysicalRadio, vfo: Vfo, hz: i32) {
        let step = f64::from(hz) / 1000.0;
        if let Some(port) = self.radios[radio.index()].as_deref_mut() {
            match vfo {
                Vfo::A => {
                    let khz = port.vfo_a_khz();
                    port.set_vfo_a_khz(khz + step);
                }
                Vfo::B => {
                    let khz = port.vfo_b_khz();
                    port.set_vfo_b_khz(khz + step);
                }
            }
        }
    }

    fn clear_rit(&mut self, snap: &ContestSnapshot) {
        let radio = if snap.technique == OperatingTechnique::So2v {
            PhysicalRadio::Radio1
        } else {
            snap.focused.into()
        };

        if self.radios[radio.index()].is_none() {
            self.status.status(&format!(
                "RIT clear: Radio {} is not available.",
                snap.focused.number()
            ));
            return;
        }
        // Searching: the offset is part of where the operator tuned, keep it
        if snap.primary_mode == RunMode::SearchPounce {
            return;
        }
        if !self.is_icom(radio) {
            return;
        }

        self.rit[radio.index()] = RitState::default();
        self.send(radio, &CivCommand::SetRitOffset { hz: 0 });
        self.send(radio, &CivCommand::RitEnable { on: false });
    }

    // -------------------------------------------------------------------------
    // Keyer speed
    // -------------------------------------------------------------------------

    fn on_speed_change(&mut self, snap: &ContestSnapshot, logical: LogicalRadio, wpm: u8) {
        // Speed on the sub receiver is not synced in SO2V
        if snap.technique == OperatingTechnique::So2v && snap.focused == LogicalRadio::Radio2 {
            return;
        }

        let radio = PhysicalRadio::from(logical);
        if !self.require_port(radio, "Speed sync") {
            return;
        }
        if !self.is_icom(radio) {
            return;
        }

        let level = wpm_to_level(wpm);
        debug!(radio = radio.number(), wpm, level, "syncing keyer speed");
        self.send(radio, &CivCommand::SetKeyerSpeed { level });
    }

    // -------------------------------------------------------------------------
    // IF filters
    // -------------------------------------------------------------------------

    fn cycle_filter(&mut self, snap: &ContestSnapshot) {
        self.filter = (self.filter % 3) + 1;
        self.apply_filter(snap);
    }

    fn apply_filter(&mut self, snap: &ContestSnapshot) {
        let so2v = snap.technique == OperatingTechnique::So2v;
        let radio = if so2v {
            PhysicalRadio::Radio1
        } else {
            snap.focused.into()
        };
        let vfo = if so2v && snap.focused == LogicalRadio::Radio2 {
            Vfo::B
        } else {
            Vfo::A
        };

        if !self.is_icom(radio) {
            return;
        }

        // The filter command needs the mode currently on that VFO
        let mode = self.vfo_mode(radio, vfo);
        let filter = self.filter;

        self.send(radio, &CivCommand::DisableApf);
        self.send(radio, &CivCommand::SetModeFilter { vfo, mode, filter });
        self.status
            .status(&format!("VFO {} changed to FIL{}.", vfo.name(), filter));
    }

    // -------------------------------------------------------------------------
    // Receive antenna
    // -------------------------------------------------------------------------

    fn toggle_rx_antenna(&mut self, snap: &ContestSnapshot) {
        let radio = PhysicalRadio::from(snap.focused);
        let enabled = !self.rx_ant[radio.index()].enabled;
        self.set_rx_antenna(radio, enabled);
    }

    fn set_rx_antenna(&mut self, radio: PhysicalRadio, enabled: bool) {
        if self.radios[radio.index()].is_none() {
            self.status.status(&format!(
                "Rx antenna: Radio {} is not available.",
                radio.number()
            ));
            return;
        }
        if !self.is_icom(radio) {
            return;
        }

        self.rx_ant[radio.index()].enabled = enabled;
        self.send(radio, &CivCommand::RxAntenna { on: enabled });
        self.status.status(&format!(
            "Rx antenna {} on radio {}.",
            if enabled { "enabled" } else { "disabled" },
            radio.number()
        ));
    }

    fn cycle_rx_antenna_input(&mut self, snap: &ContestSnapshot) {
        let radio = PhysicalRadio::from(snap.focused);
        let next = match self.rx_ant[radio.index()].input {
            RxAntInput::Off => RxAntInput::InputA,
            RxAntInput::InputA => RxAntInput::InputB,
            RxAntInput::InputB => RxAntInput::Off,
        };
        self.set_rx_antenna_input(radio, next);
    }

    fn set_rx_antenna_input(&mut self, radio: PhysicalRadio, input: RxAntInput) {
        if self.radios[radio.index()].is_none() {
            self.status.status(&format!(
                "Rx antenna input: Radio {} is not available.",
                radio.number()
            ));
            return;
        }
        if !self.is_icom(radio) {
            return;
        }

        self.rx_ant[radio.index()].input = input;
        self.send(radio, &CivCommand::RxAntennaInput { input });
        self.status.status(&format!(
            "Rx antenna input {} on radio {}.",
            input.name(),
            radio.number()
        ));
    }

    // -------------------------------------------------------------------------
    // Voice memory and CQ
    // -------------------------------------------------------------------------

    fn play_voice_memory(&mut self, snap: &ContestSnapshot, slot: u8) {
        let radio = if snap.technique == OperatingTechnique::So2v {
            PhysicalRadio::Radio1
        } else {
            snap.focused.into()
        };

        if self.radios[radio.index()].is_none() {
            self.status.status(&format!(
                "Voice memory: Radio {} is not available.",
                snap.focused.number()
            ));
            return;
        }
        if !self.is_icom(radio) {
            return;
        }

        self.send(radio, &CivCommand::PlayVoiceMemory { slot });
    }

    fn cq_on_radio_one(&mut self, snap: &ContestSnapshot) {
        if snap.technique != OperatingTechnique::So2v {
            return;
        }

        if snap.focused == LogicalRadio::Radio2 {
            self.host.change_active_radio();
        }
        if snap.primary_mode != RunMode::Run {
            self.host.set_primary_run();
        }

        // Give the host time to complete the focus switch before the key
        // press lands
        thread::sleep(Duration::from_millis(self.config.focus_settle_ms));
        self.host.send_function_key(1);
    }

    // -------------------------------------------------------------------------
    // Port plumbing
    // -------------------------------------------------------------------------

    fn port(&self, radio: PhysicalRadio) -> Option<&dyn RadioPort> {
        self.radios[radio.index()].as_deref()
    }

    fn is_icom(&self, radio: PhysicalRadio) -> bool {
        self.port(radio).is_some_and(|p| p.is_icom())
    }

    /// Check a slot is occupied, reporting on the status line if not
    fn require_port(&mut self, radio: PhysicalRadio, context: &str) -> bool {
        if self.radios[radio.index()].is_some() {
            true
        } else {
            self.status.status(&format!(
                "{context}: Radio {} is not available.",
                radio.number()
            ));
            false
        }
    }

    fn vfo_khz(&self, radio: PhysicalRadio, vfo: Vfo) -> Option<f64> {
        self.port(radio).map(|p| match vfo {
            Vfo::A => p.vfo_a_khz(),
            Vfo::B => p.vfo_b_khz(),
        })
    }

    fn vfo_mode(&self, radio: PhysicalRadio, vfo: Vfo) -> Option<OperatingMode> {
        self.port(radio).and_then(|p| match vfo {
            Vfo::A => p.vfo_a_mode(),
            Vfo::B => p.vfo_b_mode(),
        })
    }

    fn try_send(&mut self, radio: PhysicalRadio, cmd: &CivCommand) -> Result<(), ControlError> {
        use civ_proto::EncodeCommand;
        let port = self.radios[radio.index()]
            .as_deref_mut()
            .ok_or(ControlError::RadioUnavailable(radio.number()))?;
        port.send(&cmd.encode())?;
        Ok(())
    }

    /// Send a command, logging delivery failures instead of propagating them
    fn send(&mut self, radio: PhysicalRadio, cmd: &CivCommand) {
        if let Err(err) = self.try_send(radio, cmd) {
            warn!(radio = radio.number(), %err, ?cmd, "command not delivered");
        }
    }
}
