// ovsensor/src/sensor/handle.rs

//! The per-instance streaming state machine.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use embedded_hal::delay::DelayNs;
use log::{debug, error, info, trace, warn};

use crate::bus::RegisterBus;
use crate::platform::DependentDeviceHandle;
use crate::power::{PowerSequencer, PowerTopology};
use crate::regs;
use crate::sensor::controls::ControlSet;
use crate::sensor::mode::{SensorMode, find_mode};
use crate::sensor::models::SensorModel;
use crate::types::{
    ControlId, ControlRange, ControlSnapshot, FormatWhich, FrameInterval, MediaBusCode,
    NegotiatedFormat, SensorKind, StreamState,
};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy)]
struct SuspendRecord {
    was_streaming: bool,
}

/// Everything guarded by the instance lock.
struct SensorState {
    bus: Box<dyn RegisterBus + Send>,
    delay: Box<dyn DelayNs + Send>,
    topology: PowerTopology,
    mode: SensorMode,
    try_format: Option<NegotiatedFormat>,
    controls: ControlSet,
    state: StreamState,
    power_refs: u32,
    suspended: Option<SuspendRecord>,
    chip_id: Option<u32>,
}

/// A probed sensor instance.
///
/// Every public operation takes the instance lock for its whole duration,
/// so transitions on one sensor are totally ordered. Power is reference
/// counted: the sensor is powered while at least one holder (a caller of
/// [`Sensor::power_on`] or an active stream) remains.
pub struct Sensor {
    model: Box<dyn SensorModel>,
    sequencer: PowerSequencer,
    inner: Mutex<SensorState>,
}

impl Sensor {
    pub(crate) fn new(
        model: Box<dyn SensorModel>,
        sequencer: PowerSequencer,
        bus: Box<dyn RegisterBus + Send>,
        delay: Box<dyn DelayNs + Send>,
        topology: PowerTopology,
    ) -> Result<Self> {
        let mode = *model
            .modes()
            .first()
            .ok_or_else(|| Error::MissingResource("mode catalog".to_string()))?;
        let controls = ControlSet::new(model.limits(), model.timing(), model.link_freqs(), &mode);
        Ok(Self {
            model,
            sequencer,
            inner: Mutex::new(SensorState {
                bus,
                delay,
                topology,
                mode,
                try_format: None,
                controls,
                state: StreamState::Off,
                power_refs: 0,
                suspended: None,
                chip_id: None,
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, SensorState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Probe-time bring-up: power, identify, model fix-ups, power down.
    pub(crate) fn initialize(&self) -> Result<()> {
        let mut guard = self.lock();
        let st = &mut *guard;
        self.acquire(st)?;
        let fixups = match self.model.post_identify() {
            Some(list) => regs::apply(&mut *st.bus, &mut *st.delay, &list),
            None => Ok(()),
        };
        self.release(st);
        fixups
    }

    // Off -> PoweredIdle -> Configured. Leaves the sensor Off on failure.
    fn activate(&self, st: &mut SensorState) -> Result<()> {
        self.sequencer.power_on(&mut st.topology, &mut *st.delay)?;
        st.state = StreamState::PoweredIdle;
        match self.model.identify(&mut *st.bus) {
            Ok(id) => {
                st.chip_id = Some(id);
                st.state = StreamState::Configured;
                debug!("{}: configured", self.model.kind());
                Ok(())
            }
            Err(e) => {
                error!("{}: identify failed: {}", self.model.kind(), e);
                self.sequencer.power_off(&mut st.topology);
                st.state = StreamState::Off;
                Err(e)
            }
        }
    }

    fn deactivate(&self, st: &mut SensorState) {
        if st.state == StreamState::Streaming {
            self.stop_streaming(st);
        }
        if st.state != StreamState::Off {
            self.sequencer.power_off(&mut st.topology);
            st.state = StreamState::Off;
            debug!("{}: powered off", self.model.kind());
        }
    }

    // The count only moves once the hardware transition succeeded.
    fn acquire(&self, st: &mut SensorState) -> Result<()> {
        if st.power_refs == 0 {
            self.activate(st)?;
        }
        st.power_refs += 1;
        trace!("{}: power refs {}", self.model.kind(), st.power_refs);
        Ok(())
    }

    fn release(&self, st: &mut SensorState) {
        match st.power_refs {
            0 => warn!("{}: unbalanced power release", self.model.kind()),
            1 => {
                st.power_refs = 0;
                self.deactivate(st);
            }
            _ => st.power_refs -= 1,
        }
        trace!("{}: power refs {}", self.model.kind(), st.power_refs);
    }

    // global -> link frequency -> mode -> controls -> streaming
    fn start_streaming(&self, st: &mut SensorState) -> Result<()> {
        let lists = [
            self.model.global_regs(),
            self.model.link_freq_regs(st.mode.link_freq_index),
            st.mode.regs,
        ];
        regs::apply_all(&mut *st.bus, &mut *st.delay, &lists)?;
        for id in ControlSet::HARDWARE_ORDER {
            self.model.write_control(&mut *st.bus, id, &st.controls)?;
        }
        self.model.set_streaming(&mut *st.bus, true)?;
        st.state = StreamState::Streaming;
        info!(
            "{}: streaming {}x{}",
            self.model.kind(),
            st.mode.width,
            st.mode.height
        );
        Ok(())
    }

    // Standby failures are logged only; the device is going idle anyway.
    fn stop_streaming(&self, st: &mut SensorState) {
        if let Err(e) = self.model.set_streaming(&mut *st.bus, false) {
            error!("{}: failed to enter standby: {}", self.model.kind(), e);
        }
        st.state = StreamState::Configured;
    }

    /// Take a power reference, powering up and identifying the sensor
    /// when it is the first one. On failure the count is unchanged.
    pub fn power_on(&self) -> Result<()> {
        let mut guard = self.lock();
        let st = &mut *guard;
        if st.suspended.is_some() {
            return Err(Error::Suspended);
        }
        self.acquire(st)
    }

    /// Drop a power reference; the last one powers the sensor down.
    pub fn power_off(&self) {
        let mut guard = self.lock();
        self.release(&mut guard);
    }

    /// Start or stop streaming. Requesting the current state is a no-op.
    pub fn set_stream(&self, enable: bool) -> Result<()> {
        let mut guard = self.lock();
        let st = &mut *guard;
        if st.suspended.is_some() {
            return Err(Error::Suspended);
        }
        if enable == (st.state == StreamState::Streaming) {
            return Ok(());
        }

        if enable {
            self.acquire(st)?;
            if let Err(e) = self.start_streaming(st) {
                error!("{}: failed to start streaming: {}", self.model.kind(), e);
                self.stop_streaming(st);
                self.release(st);
                return Err(e);
            }
        } else {
            self.stop_streaming(st);
            self.release(st);
        }
        Ok(())
    }

    /// Negotiate the nearest supported format. An active change replaces
    /// the current mode and re-derives every control.
    pub fn set_format(&self, width: u32, height: u32, which: FormatWhich) -> Result<NegotiatedFormat> {
        let mut guard = self.lock();
        let st = &mut *guard;
        let mode = *find_mode(self.model.modes(), width, height, false)?;
        let format = NegotiatedFormat {
            width: mode.width,
            height: mode.height,
            code: self.model.media_bus_code(),
        };
        match which {
            FormatWhich::Try => st.try_format = Some(format),
            FormatWhich::Active => {
                let resume_streaming = st.suspended.is_some_and(|s| s.was_streaming);
                if st.state == StreamState::Streaming || resume_streaming {
                    return Err(Error::Busy);
                }
                st.mode = mode;
                st.controls.set_mode(&mode);
                debug!(
                    "{}: mode {}x{} ({})",
                    self.model.kind(),
                    mode.width,
                    mode.height,
                    mode.regs.name
                );
            }
        }
        Ok(format)
    }

    /// The active format, or the last try format (active if none).
    pub fn format(&self, which: FormatWhich) -> NegotiatedFormat {
        let st = self.lock();
        let active = NegotiatedFormat {
            width: st.mode.width,
            height: st.mode.height,
            code: self.model.media_bus_code(),
        };
        match which {
            FormatWhich::Try => st.try_format.unwrap_or(active),
            FormatWhich::Active => active,
        }
    }

    /// Media bus code at `index`; every model produces exactly one.
    pub fn enum_mbus_code(&self, index: usize) -> Option<MediaBusCode> {
        (index == 0).then(|| self.model.media_bus_code())
    }

    /// Size of catalog entry `index`.
    pub fn enum_frame_size(&self, index: usize) -> Option<(u32, u32)> {
        self.model.modes().get(index).map(|m| (m.width, m.height))
    }

    /// Frame interval of the active mode.
    pub fn frame_interval(&self) -> FrameInterval {
        self.lock().mode.frame_interval()
    }

    /// A copy of the active mode.
    pub fn current_mode(&self) -> SensorMode {
        self.lock().mode
    }

    /// Set a control. While the sensor is configured the new value goes
    /// straight to the hardware; a failed write restores every control,
    /// both the stored values and the registers already written.
    pub fn set_control(&self, id: ControlId, value: i64) -> Result<()> {
        let mut guard = self.lock();
        let st = &mut *guard;
        let saved = st.controls.clone();
        let changed = st.controls.set(id, value)?;
        if !st.state.is_configured() {
            return Ok(());
        }
        for (i, &c) in changed.iter().enumerate() {
            if let Err(e) = self.model.write_control(&mut *st.bus, c, &st.controls) {
                error!("{}: failed to write {}: {}", self.model.kind(), c, e);
                st.controls = saved;
                // the failed control may be partly written
                self.rewrite_controls(st, &changed[..=i]);
                return Err(e);
            }
        }
        Ok(())
    }

    // Best effort; the caller is already returning an error.
    fn rewrite_controls(&self, st: &mut SensorState, ids: &[ControlId]) {
        for &id in ids {
            if let Err(e) = self.model.write_control(&mut *st.bus, id, &st.controls) {
                warn!("{}: failed to restore {}: {}", self.model.kind(), id, e);
            }
        }
    }

    /// Current value of a control.
    pub fn control(&self, id: ControlId) -> i64 {
        self.lock().controls.value(id)
    }

    /// Valid range and default of a control under the current mode.
    pub fn control_range(&self, id: ControlId) -> ControlRange {
        self.lock().controls.range(id)
    }

    /// Every control value, for diagnostics.
    pub fn controls_snapshot(&self) -> ControlSnapshot {
        self.lock().controls.snapshot()
    }

    /// Test pattern menu entries.
    pub fn test_pattern_names(&self) -> &'static [&'static str] {
        self.model.limits().test_patterns
    }

    /// System suspend: stop streaming and power down, remembering whether
    /// to restart the stream on resume. Power references are kept.
    pub fn suspend(&self) -> Result<()> {
        let mut guard = self.lock();
        let st = &mut *guard;
        if st.suspended.is_some() {
            return Ok(());
        }
        let was_streaming = st.state == StreamState::Streaming;
        self.deactivate(st);
        st.suspended = Some(SuspendRecord { was_streaming });
        debug!(
            "{}: suspended (streaming: {}, refs: {})",
            self.model.kind(),
            was_streaming,
            st.power_refs
        );
        Ok(())
    }

    /// System resume. Power and stream are restored as they were; any
    /// failure is returned and leaves the sensor Off.
    pub fn resume(&self) -> Result<()> {
        let mut guard = self.lock();
        let st = &mut *guard;
        let Some(record) = st.suspended.take() else {
            return Ok(());
        };
        if st.power_refs == 0 {
            if record.was_streaming {
                warn!("{}: stream reference lost while suspended", self.model.kind());
            }
            return Ok(());
        }
        if let Err(e) = self.activate(st) {
            error!("{}: resume failed: {}", self.model.kind(), e);
            st.power_refs = 0;
            return Err(e);
        }
        if record.was_streaming {
            if let Err(e) = self.start_streaming(st) {
                error!("{}: failed to restart stream: {}", self.model.kind(), e);
                self.stop_streaming(st);
                self.release(st);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Sensor family.
    pub fn kind(&self) -> SensorKind {
        self.model.kind()
    }

    /// The model driving this instance.
    pub fn model(&self) -> &dyn SensorModel {
        self.model.as_ref()
    }

    /// Current state machine state.
    pub fn state(&self) -> StreamState {
        self.lock().state
    }

    /// Outstanding power references.
    pub fn power_refs(&self) -> u32 {
        self.lock().power_refs
    }

    /// Whether the sensor sits between suspend and resume.
    pub fn is_suspended(&self) -> bool {
        self.lock().suspended.is_some()
    }

    /// Chip id read by the last successful identify.
    pub fn chip_id(&self) -> Option<u32> {
        self.lock().chip_id
    }

    /// Companion device the sensor draws power through, if any.
    pub fn companion(&self) -> Option<DependentDeviceHandle> {
        self.lock()
            .topology
            .companion()
            .map(|c| c.handle().clone())
    }

    /// Whether the companion was found through the physical-node fallback.
    pub fn companion_is_heuristic(&self) -> bool {
        self.lock()
            .topology
            .companion()
            .is_some_and(|c| c.is_heuristic())
    }

    /// Detach the sensor. Streaming stops and power goes off regardless of
    /// outstanding references.
    pub fn remove(self) {
        drop(self);
    }
}

impl Drop for Sensor {
    fn drop(&mut self) {
        let st = self.inner.get_mut().unwrap_or_else(PoisonError::into_inner);
        if st.power_refs > 0 || st.state != StreamState::Off {
            debug!(
                "{}: teardown with {} power refs",
                self.model.kind(),
                st.power_refs
            );
        }
        st.power_refs = 0;
        if st.state == StreamState::Streaming {
            if let Err(e) = self.model.set_streaming(&mut *st.bus, false) {
                error!("{}: failed to enter standby: {}", self.model.kind(), e);
            }
            st.state = StreamState::Configured;
        }
        if st.state != StreamState::Off {
            self.sequencer.power_off(&mut st.topology);
            st.state = StreamState::Off;
        }
    }
}

impl fmt::Debug for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.lock();
        f.debug_struct("Sensor")
            .field("kind", &self.model.kind())
            .field("state", &st.state)
            .field("power_refs", &st.power_refs)
            .field("mode", &(st.mode.width, st.mode.height))
            .field("suspended", &st.suspended.is_some())
            .finish()
    }
}
