// ovsensor/src/prelude.rs

//! The types most callers need, in one import.

pub use crate::bus::{I2cBus, RegWidth, RegisterBus};
pub use crate::platform::{
    Clock, DependentDeviceHandle, DependentDeviceResolver, Firmware, GpioLine, Regulator, Resolved,
};
pub use crate::power::{DirectPower, PowerSequencer, PowerTiming, PowerTopology};
pub use crate::regs::{RegisterList, RegisterOp};
pub use crate::sensor::{Sensor, SensorBuilder, SensorMode, SensorModel, create_model_for};
pub use crate::{
    ControlId, ControlRange, ControlSnapshot, Error, FirmwareId, FormatWhich, FrameInterval,
    MediaBusCode, NegotiatedFormat, Result, SensorKind, StreamState,
};

pub use crate::utils::StdDelay;
