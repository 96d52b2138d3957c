//! Register tables and the in-order executor that writes them.

pub mod list;
pub mod sequencer;

pub use list::{RegisterList, RegisterOp};
pub use sequencer::{apply, apply_all};
