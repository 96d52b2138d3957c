// ovsensor/src/regs/sequencer.rs

//! In-order execution of register tables.

use embedded_hal::delay::DelayNs;
use log::{error, trace};

use crate::bus::RegisterBus;
use crate::error::BusFault;
use crate::regs::list::RegisterList;
use crate::{Error, Result};

/// Write every operation of `list` in order.
///
/// Stops at the first failing write and returns a bus error carrying that
/// register's address. Delays attached to an operation are honoured after
/// its write and before the next one.
pub fn apply(
    bus: &mut dyn RegisterBus,
    delay: &mut dyn DelayNs,
    list: &RegisterList,
) -> Result<()> {
    trace!("applying register list {} ({} ops)", list.name, list.len());
    for (index, op) in list.iter().enumerate() {
        if let Err(e) = bus.write(op.address, op.value) {
            error!(
                "register list {} failed at op {} ({:#06x}): {}",
                list.name, index, op.address, e
            );
            return Err(match e {
                Error::Bus { .. } => e,
                _ => Error::Bus {
                    address: op.address,
                    fault: BusFault::Other,
                },
            });
        }
        if let Some(ms) = op.delay_ms {
            delay.delay_ms(ms);
        }
    }
    Ok(())
}

/// Apply several lists back to back, stopping at the first failure.
pub fn apply_all(
    bus: &mut dyn RegisterBus,
    delay: &mut dyn DelayNs,
    lists: &[RegisterList],
) -> Result<()> {
    for list in lists {
        apply(bus, delay, list)?;
    }
    Ok(())
}
