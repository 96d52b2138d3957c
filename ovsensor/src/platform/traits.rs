// ovsensor/src/platform/traits.rs

//! Interfaces of the platform collaborators a sensor depends on.

use embedded_hal::digital::{Error as _, OutputPin};

use crate::types::{DeviceName, FirmwareId};
use crate::{Error, Result};

/// A single logical output line. `true` means asserted.
pub trait GpioLine {
    /// Drive the line to its logical level.
    fn set(&mut self, active: bool) -> Result<()>;
}

impl<P: OutputPin> GpioLine for P {
    fn set(&mut self, active: bool) -> Result<()> {
        let res = if active {
            self.set_high()
        } else {
            self.set_low()
        };
        res.map_err(|e| Error::Gpio(format!("{:?}", e.kind())))
    }
}

/// Sensor master clock.
pub trait Clock {
    /// Start the clock.
    fn enable(&mut self) -> Result<()>;
    /// Stop the clock.
    fn disable(&mut self) -> Result<()>;
}

/// A supply rail.
pub trait Regulator {
    /// Supply name used in logs and errors.
    fn name(&self) -> &str;
    /// Switch the rail on.
    fn enable(&mut self) -> Result<()>;
    /// Switch the rail off.
    fn disable(&mut self) -> Result<()>;
}

/// Live device behind a firmware node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareDevice {
    /// Name of the firmware-level device shell.
    pub name: DeviceName,
    /// Platform device bound to the node, when one exists.
    pub platform_device: Option<DeviceName>,
    /// Physical devices backing the node, first one preferred.
    pub physical_nodes: Vec<DeviceName>,
}

/// Platform firmware description, as far as sensor discovery needs it.
pub trait Firmware {
    /// Declared dependencies of a node. `None` when the node declares none.
    fn dependencies_of(&self, id: &FirmwareId) -> Result<Option<Vec<FirmwareId>>>;

    /// Hardware id of a node.
    fn hardware_id(&self, id: &FirmwareId) -> Result<String>;

    /// Resolve a node to its live device.
    fn device_of(&self, id: &FirmwareId) -> Result<FirmwareDevice>;

    /// Output line `index` exported by a device, if it exports one.
    fn gpio_line(
        &self,
        device: &DeviceName,
        index: usize,
    ) -> Result<Option<Box<dyn GpioLine + Send>>>;
}
