// ovsensor/src/regs/list.rs

//! Constant register tables.

/// One register write, optionally followed by a settle delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterOp {
    /// Register address.
    pub address: u16,
    /// Byte to write.
    pub value: u8,
    /// Minimum wait after the write.
    pub delay_ms: Option<u32>,
}

impl RegisterOp {
    /// Plain write, no delay.
    pub const fn new(address: u16, value: u8) -> Self {
        Self {
            address,
            value,
            delay_ms: None,
        }
    }

    /// Write followed by a wait of at least `delay_ms` milliseconds.
    pub const fn with_delay(address: u16, value: u8, delay_ms: u32) -> Self {
        Self {
            address,
            value,
            delay_ms: Some(delay_ms),
        }
    }
}

/// Named, ordered register table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterList {
    /// Name used in logs.
    pub name: &'static str,
    /// Writes in issue order.
    pub ops: &'static [RegisterOp],
}

impl RegisterList {
    /// Name a table.
    pub const fn new(name: &'static str, ops: &'static [RegisterOp]) -> Self {
        Self { name, ops }
    }

    /// A table with no writes.
    pub const fn empty(name: &'static str) -> Self {
        Self { name, ops: &[] }
    }

    /// Number of writes.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the table has no writes.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Writes in issue order.
    pub fn iter(&self) -> std::slice::Iter<'static, RegisterOp> {
        self.ops.iter()
    }

    /// Sum of the settle delays embedded in the table.
    pub fn total_delay_ms(&self) -> u64 {
        self.ops
            .iter()
            .filter_map(|op| op.delay_ms)
            .map(u64::from)
            .sum()
    }
}
