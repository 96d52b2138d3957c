//! Platform collaborators: firmware description, GPIO, clocks and rails.

pub mod mock;
pub mod resolver;
pub mod traits;

pub use resolver::{DependentDeviceHandle, DependentDeviceResolver, Resolved};
pub use traits::{Clock, Firmware, FirmwareDevice, GpioLine, Regulator};
