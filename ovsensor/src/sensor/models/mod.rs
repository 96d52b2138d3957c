// ovsensor/src/sensor/models/mod.rs

//! Per-family sensor models and the factory that picks one.

use log::{error, info};

use crate::bus::{RegWidth, RegisterBus};
use crate::constants::{
    DEFAULT_I2C_ADDRESS, EXPOSURE_FRACTION_SHIFT, MODE_STANDBY, MODE_STREAMING, REG_EXPOSURE,
    REG_MODE_SELECT, REG_VTS,
};
use crate::power::PowerTiming;
use crate::regs::RegisterList;
use crate::sensor::controls::{ControlLimits, ControlSet, SensorTiming};
use crate::sensor::mode::SensorMode;
use crate::types::{ControlId, MediaBusCode, SensorKind};
use crate::{Error, Result};

/// Where a model keeps its identity value and which values it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipId {
    /// First id register.
    pub register: u16,
    /// Id width.
    pub width: RegWidth,
    /// Every id the model drives.
    pub accepted: &'static [u32],
}

/// Everything that differs between sensor drivers: register tables,
/// limits, timing and how a control value maps onto registers.
pub trait SensorModel: Send + Sync {
    /// Family this model drives.
    fn kind(&self) -> SensorKind;

    /// Identity register and accepted values.
    fn chip_id(&self) -> ChipId;

    /// Mode catalog. The first entry is the power-on default.
    fn modes(&self) -> &'static [SensorMode];

    /// Settings common to every mode, written first on stream start.
    fn global_regs(&self) -> RegisterList;

    /// Supported CSI-2 link frequencies in Hz.
    fn link_freqs(&self) -> &'static [u64];

    /// Settings selecting link frequency `index`.
    fn link_freq_regs(&self, index: usize) -> RegisterList;

    /// Link and frame timing constants.
    fn timing(&self) -> SensorTiming;

    /// Control bounds.
    fn limits(&self) -> ControlLimits;

    /// Pixel code every mode produces.
    fn media_bus_code(&self) -> MediaBusCode {
        MediaBusCode::Sbggr10
    }

    /// Supply names in enable order.
    fn supply_names(&self) -> &'static [&'static str];

    /// Settle times of the power-up sequence.
    fn power_timing(&self) -> PowerTiming {
        PowerTiming::default()
    }

    /// Usual 7-bit bus address.
    fn i2c_address(&self) -> u8 {
        DEFAULT_I2C_ADDRESS
    }

    /// Extra register writes issued right after a successful identify.
    fn post_identify(&self) -> Option<RegisterList> {
        None
    }

    /// Read the chip id and check it against the accepted values.
    fn identify(&self, bus: &mut dyn RegisterBus) -> Result<u32> {
        let id = self.chip_id();
        let actual = bus.read_value(id.register, id.width)?;
        if !id.accepted.contains(&actual) {
            error!(
                "{}: chip id mismatch: expected {:#x}, got {:#x}",
                self.kind(),
                id.accepted.first().copied().unwrap_or_default(),
                actual
            );
            return Err(Error::WrongDevice {
                expected: id.accepted.first().copied().unwrap_or_default(),
                actual,
            });
        }
        info!("{} detected (chip id {:#x})", self.kind(), actual);
        Ok(actual)
    }

    /// Enter streaming (`on`) or standby.
    fn set_streaming(&self, bus: &mut dyn RegisterBus, on: bool) -> Result<()> {
        bus.write(REG_MODE_SELECT, if on { MODE_STREAMING } else { MODE_STANDBY })
    }

    /// Push the current value of `id` to the sensor.
    fn write_control(
        &self,
        bus: &mut dyn RegisterBus,
        id: ControlId,
        controls: &ControlSet,
    ) -> Result<()>;
}

/// `VTS = height + vblank`, 16 bits.
pub(crate) fn write_vts(bus: &mut dyn RegisterBus, controls: &ControlSet) -> Result<()> {
    let vts = i64::from(controls.height()) + controls.value(ControlId::VerticalBlank);
    bus.write_value(REG_VTS, RegWidth::U16, vts as u32)
}

/// Coarse exposure with four fractional bits, 24 bits.
pub(crate) fn write_exposure(bus: &mut dyn RegisterBus, controls: &ControlSet) -> Result<()> {
    let lines = controls.value(ControlId::Exposure) as u32;
    bus.write_value(REG_EXPOSURE, RegWidth::U24, lines << EXPOSURE_FRACTION_SHIFT)
}

/// OV5693 and OV5695.
#[cfg(feature = "ov569x")]
pub mod ov569x;
/// OV7251.
#[cfg(feature = "ov7251")]
pub mod ov7251;
/// OV8865.
#[cfg(feature = "ov8865")]
pub mod ov8865;

#[cfg(feature = "ov569x")]
pub use ov569x::Ov569xModel;
#[cfg(feature = "ov7251")]
pub use ov7251::Ov7251Model;
#[cfg(feature = "ov8865")]
pub use ov8865::Ov8865Model;

/// Factory returning the model for a sensor family. Families compiled out
/// by feature selection are reported as unsupported.
pub fn create_model_for(kind: SensorKind) -> Result<Box<dyn SensorModel>> {
    match kind {
        #[cfg(feature = "ov8865")]
        SensorKind::Ov8865 => Ok(Box::new(Ov8865Model::new())),
        #[cfg(feature = "ov569x")]
        SensorKind::Ov569x => Ok(Box::new(Ov569xModel::new())),
        #[cfg(feature = "ov7251")]
        SensorKind::Ov7251 => Ok(Box::new(Ov7251Model::new())),
        #[allow(unreachable_patterns)]
        other => Err(Error::UnsupportedSensor(other.to_string())),
    }
}
