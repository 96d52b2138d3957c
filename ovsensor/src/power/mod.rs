//! Power topologies and the sequencer that drives them.

pub mod sequencer;
pub mod topology;

pub use sequencer::{PowerSequencer, PowerTiming};
pub use topology::{CompanionLines, CompanionPower, DirectPower, PowerTopology};
