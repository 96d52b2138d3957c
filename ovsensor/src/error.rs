// ovsensor/src/error.rs

//! Error taxonomy shared by every layer of the crate.

use derive_more::Display;
use thiserror::Error;

use crate::types::ControlId;

/// Transport-level fault reported by a register bus.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum BusFault {
    /// The device or a data byte was not acknowledged.
    #[display(fmt = "no acknowledge")]
    NoAcknowledge,
    /// Another controller won the bus.
    #[display(fmt = "arbitration lost")]
    ArbitrationLoss,
    /// Data was lost in the controller.
    #[display(fmt = "overrun")]
    Overrun,
    /// Misplaced start or stop condition.
    #[display(fmt = "bus error")]
    Bus,
    /// Fewer bytes came back than were requested.
    #[display(fmt = "short read")]
    ShortRead,
    /// Anything the HAL does not classify.
    #[display(fmt = "other")]
    Other,
}

impl From<embedded_hal::i2c::ErrorKind> for BusFault {
    fn from(kind: embedded_hal::i2c::ErrorKind) -> Self {
        use embedded_hal::i2c::ErrorKind;
        match kind {
            ErrorKind::NoAcknowledge(_) => BusFault::NoAcknowledge,
            ErrorKind::ArbitrationLoss => BusFault::ArbitrationLoss,
            ErrorKind::Overrun => BusFault::Overrun,
            ErrorKind::Bus => BusFault::Bus,
            _ => BusFault::Other,
        }
    }
}

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A register access failed on the bus.
    #[error("bus error at register {address:#06x}: {fault}")]
    Bus {
        /// Register being accessed.
        address: u16,
        /// What the bus reported.
        fault: BusFault,
    },

    /// A power-on step failed; everything enabled before it was rolled back.
    #[error("power sequencing failed at {stage}: {source}")]
    Power {
        /// Step that failed, e.g. `clock` or a rail name.
        stage: String,
        /// Underlying failure.
        #[source]
        source: Box<Error>,
    },

    /// The chip id register holds an id the model does not accept.
    #[error("wrong device: expected chip id {expected:#08x}, got {actual:#08x}")]
    WrongDevice {
        /// First accepted id.
        expected: u32,
        /// Id read from the device.
        actual: u32,
    },

    /// A control value outside its current range.
    #[error("{control} value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Control being set.
        control: ControlId,
        /// Rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// The mode catalog has nothing to offer for the request.
    #[error("no supported mode for {width}x{height}")]
    NotSupported {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A required platform resource is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Derived controls cannot be written.
    #[error("control {0} is read-only")]
    ReadOnly(ControlId),

    /// The operation is not allowed while streaming.
    #[error("device busy: streaming")]
    Busy,

    /// The operation is not allowed between suspend and resume.
    #[error("device is suspended")]
    Suspended,

    /// A GPIO line could not be driven.
    #[error("gpio error: {0}")]
    Gpio(String),

    /// The firmware description could not be read.
    #[error("firmware error: {0}")]
    Firmware(String),

    /// Clock or regulator failure.
    #[error("platform error: {0}")]
    Platform(String),

    /// A bus returned a buffer of the wrong size.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Bytes requested.
        expected: usize,
        /// Bytes received.
        actual: usize,
    },

    /// The builder was not given something it needs.
    #[error("missing resource: {0}")]
    MissingResource(String),

    /// The sensor family is unknown or compiled out.
    #[error("unsupported sensor: {0}")]
    UnsupportedSensor(String),
}

impl Error {
    pub(crate) fn power(stage: impl Into<String>, source: Error) -> Self {
        Error::Power {
            stage: stage.into(),
            source: Box::new(source),
        }
    }

    /// Register address carried by a bus error, if any.
    pub fn bus_address(&self) -> Option<u16> {
        match self {
            Error::Bus { address, .. } => Some(*address),
            Error::Power { source, .. } => source.bus_address(),
            _ => None,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
