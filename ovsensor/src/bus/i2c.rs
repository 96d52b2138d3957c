// ovsensor/src/bus/i2c.rs

//! `RegisterBus` over an `embedded-hal` I2C controller.

use embedded_hal::i2c::I2c;
use log::trace;

use crate::bus::traits::{RegWidth, RegisterBus};
use crate::{Error, Result};

/// Adapts any embedded-hal I2C bus to 16-bit register addressing.
pub struct I2cBus<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> I2cBus<I> {
    /// Bind `i2c` to the device at 7-bit `address`.
    pub fn new(i2c: I, address: u8) -> Self {
        Self { i2c, address }
    }

    /// 7-bit device address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the underlying bus.
    pub fn release(self) -> I {
        self.i2c
    }
}

fn bus_error<E: embedded_hal::i2c::Error>(register: u16, err: E) -> Error {
    Error::Bus {
        address: register,
        fault: err.kind().into(),
    }
}

impl<I: I2c> RegisterBus for I2cBus<I> {
    fn write(&mut self, address: u16, value: u8) -> Result<()> {
        let [hi, lo] = address.to_be_bytes();
        trace!("i2c {:#04x} write {:#06x} <- {:#04x}", self.address, address, value);
        self.i2c
            .write(self.address, &[hi, lo, value])
            .map_err(|e| bus_error(address, e))
    }

    fn read(&mut self, address: u16, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.i2c
            .write_read(self.address, &address.to_be_bytes(), &mut buf)
            .map_err(|e| bus_error(address, e))?;
        Ok(buf)
    }

    /// Multi-byte values go out in one transaction; the sensor
    /// auto-increments the register address.
    fn write_value(&mut self, address: u16, width: RegWidth, value: u32) -> Result<()> {
        let mut frame = [0u8; 6];
        frame[..2].copy_from_slice(&address.to_be_bytes());
        let n = width.bytes();
        frame[2..2 + n].copy_from_slice(&value.to_be_bytes()[4 - n..]);
        self.i2c
            .write(self.address, &frame[..2 + n])
            .map_err(|e| bus_error(address, e))
    }
}
