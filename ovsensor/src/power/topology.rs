// ovsensor/src/power/topology.rs

//! The two ways a sensor can be powered.

use log::debug;

use crate::constants::{COMPANION_LINE_LED, COMPANION_LINE_POWER_DOWN, COMPANION_LINE_XSHUTDOWN};
use crate::platform::{Clock, DependentDeviceHandle, Firmware, GpioLine, Regulator, Resolved};
use crate::{Error, Result};

/// Clock, reset line and rails wired straight to the sensor.
pub struct DirectPower {
    pub(crate) clock: Box<dyn Clock + Send>,
    pub(crate) reset: Option<Box<dyn GpioLine + Send>>,
    pub(crate) regulators: Vec<Box<dyn Regulator + Send>>,
}

impl DirectPower {
    /// Clock-only power; add a reset line and rails with the builders.
    pub fn new(clock: Box<dyn Clock + Send>) -> Self {
        Self {
            clock,
            reset: None,
            regulators: Vec::new(),
        }
    }

    /// Active-high reset line, asserted while powered down.
    pub fn with_reset(mut self, reset: Box<dyn GpioLine + Send>) -> Self {
        self.reset = Some(reset);
        self
    }

    /// Rails are enabled in the order they are added.
    pub fn with_regulator(mut self, regulator: Box<dyn Regulator + Send>) -> Self {
        self.regulators.push(regulator);
        self
    }

    /// Rail names in enable order.
    pub fn regulator_names(&self) -> Vec<&str> {
        self.regulators.iter().map(|r| r.name()).collect()
    }
}

/// Lines exported by the power companion.
pub struct CompanionLines {
    pub(crate) xshutdown: Box<dyn GpioLine + Send>,
    pub(crate) power_down: Box<dyn GpioLine + Send>,
    pub(crate) led: Option<Box<dyn GpioLine + Send>>,
}

impl CompanionLines {
    /// Lines in companion index order.
    pub fn new(
        xshutdown: Box<dyn GpioLine + Send>,
        power_down: Box<dyn GpioLine + Send>,
        led: Option<Box<dyn GpioLine + Send>>,
    ) -> Self {
        Self {
            xshutdown,
            power_down,
            led,
        }
    }

    pub(crate) fn named_mut(&mut self) -> Vec<(&'static str, &mut Box<dyn GpioLine + Send>)> {
        let mut lines = vec![
            ("xshutdown", &mut self.xshutdown),
            ("power_down", &mut self.power_down),
        ];
        if let Some(led) = self.led.as_mut() {
            lines.push(("led", led));
        }
        lines
    }

    /// Whether the optional privacy LED line exists.
    pub fn has_led(&self) -> bool {
        self.led.is_some()
    }
}

/// Power owned by a companion device found through firmware dependencies.
pub struct CompanionPower {
    handle: DependentDeviceHandle,
    heuristic: bool,
    pub(crate) lines: CompanionLines,
}

impl CompanionPower {
    /// Companion power from already acquired lines.
    pub fn new(handle: DependentDeviceHandle, heuristic: bool, lines: CompanionLines) -> Self {
        Self {
            handle,
            heuristic,
            lines,
        }
    }

    /// Fetch the companion's lines. `xshutdown` and `power_down` are
    /// required; the LED line is optional.
    pub fn acquire(firmware: &dyn Firmware, resolved: &Resolved) -> Result<Self> {
        let handle = resolved
            .handle()
            .cloned()
            .ok_or_else(|| Error::NotFound("power companion".to_string()))?;
        let device = handle.device().clone();
        let required = |index: usize, name: &str| -> Result<Box<dyn GpioLine + Send>> {
            firmware
                .gpio_line(&device, index)?
                .ok_or_else(|| Error::NotFound(format!("{} gpio on {}", name, device)))
        };
        let xshutdown = required(COMPANION_LINE_XSHUTDOWN, "xshutdown")?;
        let power_down = required(COMPANION_LINE_POWER_DOWN, "power_down")?;
        let led = firmware.gpio_line(&device, COMPANION_LINE_LED)?;
        debug!(
            "acquired companion lines on {} (led: {})",
            device,
            led.is_some()
        );
        Ok(Self::new(
            handle,
            resolved.is_heuristic(),
            CompanionLines::new(xshutdown, power_down, led),
        ))
    }

    /// The resolved companion.
    pub fn handle(&self) -> &DependentDeviceHandle {
        &self.handle
    }

    /// Whether the companion was located through the physical-node fallback.
    pub fn is_heuristic(&self) -> bool {
        self.heuristic
    }

    /// Lines the companion exported.
    pub fn lines(&self) -> &CompanionLines {
        &self.lines
    }
}

/// How a sensor receives power. Chosen once at probe time.
pub enum PowerTopology {
    /// The sensor owns its clock, reset and rails.
    DirectlyWired(DirectPower),
    /// A companion device's GPIO lines gate the sensor.
    DependentDevice(CompanionPower),
}

impl PowerTopology {
    /// The companion, for dependent-device topologies.
    pub fn companion(&self) -> Option<&CompanionPower> {
        match self {
            PowerTopology::DependentDevice(c) => Some(c),
            PowerTopology::DirectlyWired(_) => None,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            PowerTopology::DirectlyWired(_) => "direct",
            PowerTopology::DependentDevice(_) => "companion",
        }
    }
}

impl From<DirectPower> for PowerTopology {
    fn from(p: DirectPower) -> Self {
        PowerTopology::DirectlyWired(p)
    }
}

impl From<CompanionPower> for PowerTopology {
    fn from(p: CompanionPower) -> Self {
        PowerTopology::DependentDevice(p)
    }
}
