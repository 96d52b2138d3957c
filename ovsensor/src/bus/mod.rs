//! Register bus abstraction and implementations.

pub mod i2c;
pub mod mock;
pub mod traits;

pub use i2c::I2cBus;
pub use mock::MockBus;
pub use traits::{RegWidth, RegisterBus};
