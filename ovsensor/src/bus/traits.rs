// ovsensor/src/bus/traits.rs

//! The register bus seam between sensor logic and the wire.

use crate::{Error, Result};

/// Register value widths used by OmniVision sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegWidth {
    /// One byte.
    U8 = 1,
    /// Two bytes, big-endian.
    U16 = 2,
    /// Three bytes, big-endian.
    U24 = 3,
}

impl RegWidth {
    /// Number of consecutive registers the value occupies.
    pub fn bytes(self) -> usize {
        self as usize
    }
}

/// Register bus abstracts single-register access away from sensor logic.
///
/// Addresses are 16-bit; multi-byte values are big-endian and occupy
/// consecutive addresses.
pub trait RegisterBus {
    /// Write one byte to a register.
    fn write(&mut self, address: u16, value: u8) -> Result<()>;

    /// Read `len` bytes starting at `address`.
    fn read(&mut self, address: u16, len: usize) -> Result<Vec<u8>>;

    /// Write a big-endian value of the given width. The default issues one
    /// single-byte write per byte; buses with burst support override it.
    fn write_value(&mut self, address: u16, width: RegWidth, value: u32) -> Result<()> {
        let bytes = value.to_be_bytes();
        let start = 4 - width.bytes();
        for (i, b) in bytes[start..].iter().enumerate() {
            self.write(address.wrapping_add(i as u16), *b)?;
        }
        Ok(())
    }

    /// Read a big-endian value of the given width.
    fn read_value(&mut self, address: u16, width: RegWidth) -> Result<u32> {
        let data = self.read(address, width.bytes())?;
        if data.len() != width.bytes() {
            return Err(Error::InvalidLength {
                expected: width.bytes(),
                actual: data.len(),
            });
        }
        Ok(data.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b)))
    }

    /// Read-modify-write of the bits in `mask`; other bits are kept.
    fn modify(&mut self, address: u16, mask: u8, bits: u8) -> Result<()> {
        let current = self.read_value(address, RegWidth::U8)? as u8;
        self.write(address, (current & !mask) | (bits & mask))
    }
}

impl<B: RegisterBus + ?Sized> RegisterBus for Box<B> {
    fn write(&mut self, address: u16, value: u8) -> Result<()> {
        (**self).write(address, value)
    }

    fn read(&mut self, address: u16, len: usize) -> Result<Vec<u8>> {
        (**self).read(address, len)
    }

    fn write_value(&mut self, address: u16, width: RegWidth, value: u32) -> Result<()> {
        (**self).write_value(address, width, value)
    }

    fn read_value(&mut self, address: u16, width: RegWidth) -> Result<u32> {
        (**self).read_value(address, width)
    }

    fn modify(&mut self, address: u16, mask: u8, bits: u8) -> Result<()> {
        (**self).modify(address, mask, bits)
    }
}
