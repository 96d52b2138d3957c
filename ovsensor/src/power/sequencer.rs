// ovsensor/src/power/sequencer.rs

//! Ordered power-up with rollback, and the matching power-down.

use embedded_hal::delay::DelayNs;
use log::{debug, error, warn};

use crate::power::topology::{CompanionPower, DirectPower, PowerTopology};
use crate::{Error, Result};

/// Settle times used while powering a sensor up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerTiming {
    /// Time reset is held with the clock running, before the rails come up.
    pub reset_hold_us: u32,
    /// Time after the last step before the sensor accepts bus traffic.
    pub settle_us: u32,
}

impl Default for PowerTiming {
    fn default() -> Self {
        Self {
            reset_hold_us: 1_000,
            settle_us: 1_500,
        }
    }
}

/// Drives a `PowerTopology` up and down in the fixed hardware order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerSequencer {
    timing: PowerTiming,
}

impl PowerSequencer {
    /// Sequencer using `timing` for its settle delays.
    pub fn new(timing: PowerTiming) -> Self {
        Self { timing }
    }

    /// Settle times in use.
    pub fn timing(&self) -> PowerTiming {
        self.timing
    }

    /// Power the sensor up. On failure everything already enabled is
    /// undone before the error is returned.
    pub fn power_on(&self, topology: &mut PowerTopology, delay: &mut dyn DelayNs) -> Result<()> {
        debug!("power on ({})", topology.name());
        match topology {
            PowerTopology::DirectlyWired(p) => self.direct_on(p, delay),
            PowerTopology::DependentDevice(c) => self.companion_on(c, delay),
        }
    }

    /// Power the sensor down. Individual failures are logged only.
    pub fn power_off(&self, topology: &mut PowerTopology) {
        debug!("power off ({})", topology.name());
        match topology {
            PowerTopology::DirectlyWired(p) => {
                if let Some(reset) = p.reset.as_mut() {
                    if let Err(e) = reset.set(true) {
                        warn!("failed to assert reset: {}", e);
                    }
                }
                let all = p.regulators.len();
                disable_from(p, all);
            }
            PowerTopology::DependentDevice(c) => {
                for (name, line) in c.lines.named_mut().into_iter().rev() {
                    if let Err(e) = line.set(false) {
                        warn!("failed to release {}: {}", name, e);
                    }
                }
            }
        }
    }

    // clock -> reset asserted -> rails in order -> reset released -> settle
    fn direct_on(&self, p: &mut DirectPower, delay: &mut dyn DelayNs) -> Result<()> {
        p.clock.enable().map_err(|e| Error::power("clock", e))?;

        let asserted = match p.reset.as_mut() {
            Some(reset) => reset.set(true),
            None => Ok(()),
        };
        if let Err(e) = asserted {
            error!("failed to assert reset: {}", e);
            disable_from(p, 0);
            return Err(Error::power("reset assert", e));
        }
        if p.reset.is_some() {
            delay.delay_us(self.timing.reset_hold_us);
        }

        for i in 0..p.regulators.len() {
            if let Err(e) = p.regulators[i].enable() {
                let stage = format!("regulator {}", p.regulators[i].name());
                error!("failed to enable {}: {}", stage, e);
                disable_from(p, i);
                return Err(Error::power(stage, e));
            }
        }

        let released = match p.reset.as_mut() {
            Some(reset) => reset.set(false),
            None => Ok(()),
        };
        if let Err(e) = released {
            error!("failed to release reset: {}", e);
            let all = p.regulators.len();
            disable_from(p, all);
            return Err(Error::power("reset release", e));
        }

        delay.delay_us(self.timing.settle_us);
        Ok(())
    }

    fn companion_on(&self, c: &mut CompanionPower, delay: &mut dyn DelayNs) -> Result<()> {
        let mut lines = c.lines.named_mut();
        for i in 0..lines.len() {
            let (name, line) = &mut lines[i];
            if let Err(e) = line.set(true) {
                let stage = format!("companion {}", name);
                error!("failed to assert {}: {}", stage, e);
                for (done, line) in lines[..i].iter_mut().rev() {
                    if let Err(e) = line.set(false) {
                        warn!("failed to release {}: {}", done, e);
                    }
                }
                return Err(Error::power(stage, e));
            }
        }
        delay.delay_us(self.timing.settle_us);
        Ok(())
    }
}

/// Disable the first `enabled` rails in reverse order, then the clock.
fn disable_from(p: &mut DirectPower, enabled: usize) {
    for reg in p.regulators[..enabled].iter_mut().rev() {
        if let Err(e) = reg.disable() {
            warn!("failed to disable {}: {}", reg.name(), e);
        }
    }
    if let Err(e) = p.clock.disable() {
        warn!("failed to disable clock: {}", e);
    }
}
