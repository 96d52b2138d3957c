// ovsensor/src/bus/mock.rs

//! In-memory register bus used by the tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::bus::traits::{RegWidth, RegisterBus};
use crate::error::BusFault;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockBusState {
    registers: HashMap<u16, u8>,
    writes: Vec<(u16, u8)>,
    reads: Vec<(u16, usize)>,
    fail_write_at: Option<u16>,
    fail_reads: bool,
}

/// Mock register bus for tests. Clones share state, so a test can keep a
/// handle after moving one into a sensor.
#[derive(Debug, Clone, Default)]
pub struct MockBus {
    inner: Arc<Mutex<MockBusState>>,
}

impl MockBus {
    /// Empty register map; unwritten registers read as 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load the chip id registers so identification succeeds.
    pub fn with_chip_id(self, address: u16, width: RegWidth, id: u32) -> Self {
        let bytes = id.to_be_bytes();
        let start = 4 - width.bytes();
        for (i, b) in bytes[start..].iter().enumerate() {
            self.set_register(address + i as u16, *b);
        }
        self
    }

    fn state(&self) -> MutexGuard<'_, MockBusState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Poke a register without logging a write.
    pub fn set_register(&self, address: u16, value: u8) {
        self.state().registers.insert(address, value);
    }

    /// Current register contents, `None` if never set.
    pub fn register(&self, address: u16) -> Option<u8> {
        self.state().registers.get(&address).copied()
    }

    /// Every successful write in issue order.
    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.state().writes.clone()
    }

    /// Every successful read as `(address, len)`.
    pub fn reads(&self) -> Vec<(u16, usize)> {
        self.state().reads.clone()
    }

    /// Forget logged reads and writes; register contents stay.
    pub fn clear_log(&self) {
        let mut s = self.state();
        s.writes.clear();
        s.reads.clear();
    }

    /// Make every write to `address` fail with a NACK.
    pub fn fail_writes_to(&self, address: u16) {
        self.state().fail_write_at = Some(address);
    }

    /// Make every read fail with a NACK.
    pub fn fail_reads(&self, fail: bool) {
        self.state().fail_reads = fail;
    }

    /// Clear injected failures.
    pub fn heal(&self) {
        let mut s = self.state();
        s.fail_write_at = None;
        s.fail_reads = false;
    }
}

impl RegisterBus for MockBus {
    fn write(&mut self, address: u16, value: u8) -> Result<()> {
        let mut s = self.state();
        if s.fail_write_at == Some(address) {
            return Err(Error::Bus {
                address,
                fault: BusFault::NoAcknowledge,
            });
        }
        s.writes.push((address, value));
        s.registers.insert(address, value);
        Ok(())
    }

    fn read(&mut self, address: u16, len: usize) -> Result<Vec<u8>> {
        let mut s = self.state();
        if s.fail_reads {
            return Err(Error::Bus {
                address,
                fault: BusFault::NoAcknowledge,
            });
        }
        s.reads.push((address, len));
        Ok((0..len)
            .map(|i| {
                s.registers
                    .get(&address.wrapping_add(i as u16))
                    .copied()
                    .unwrap_or(0)
            })
            .collect())
    }
}
