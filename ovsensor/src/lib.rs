// ovsensor/src/lib.rs

//! ovsensor
//!
//! Mode, power and streaming control for OmniVision MIPI camera sensors
//! (OV8865, OV5693/OV5695, OV7251) over `embedded-hal` buses and pins.
#![warn(missing_docs)]

pub mod bus;
pub mod constants;
pub mod error;
pub mod platform;
pub mod power;
pub mod prelude;
pub mod regs;
pub mod sensor;
pub mod test_support;
pub mod types;
pub mod utils;

// `crate::Error`, `crate::Result` and the shared value types live at the
// crate root.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
