// ovsensor/src/sensor/mod.rs

//! Sensor instances: mode catalog, controls, per-family models and the
//! streaming state machine.

pub mod builder;
pub mod controls;
pub mod handle;
pub mod mode;
pub mod models;

pub use builder::SensorBuilder;
pub use controls::{ControlLimits, ControlSet, SensorTiming};
pub use handle::Sensor;
pub use mode::{SensorMode, derive_pixel_rate, derive_pixels_per_line, find_mode};
pub use models::{ChipId, SensorModel, create_model_for};
