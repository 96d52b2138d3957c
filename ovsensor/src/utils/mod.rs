//! Small helpers used across the crate.

pub mod delay;

pub use delay::StdDelay;
