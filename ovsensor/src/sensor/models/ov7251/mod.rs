mod config;
mod regs;

use crate::bus::{RegWidth, RegisterBus};
use crate::power::PowerTiming;
use crate::regs::RegisterList;
use crate::sensor::controls::{ControlLimits, ControlSet, SensorTiming};
use crate::sensor::mode::SensorMode;
use crate::sensor::models::{ChipId, SensorModel, write_vts};
use crate::types::{ControlId, MediaBusCode, SensorKind};
use crate::{Result, constants};

/// VGA global-shutter monochrome sensor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ov7251Model;

impl Ov7251Model {
    /// The model; it carries no state.
    pub fn new() -> Self {
        Self
    }

    /// Write one value inside a group hold so it latches at a frame boundary.
    fn grouped(bus: &mut dyn RegisterBus, address: u16, width: RegWidth, value: u32) -> Result<()> {
        bus.write(config::REG_GROUP_ACCESS, config::GROUP_HOLD_START)?;
        bus.write_value(address, width, value)?;
        bus.write(config::REG_GROUP_ACCESS, config::GROUP_HOLD_END)?;
        bus.write(config::REG_GROUP_ACCESS, config::GROUP_HOLD_LAUNCH)
    }
}

impl SensorModel for Ov7251Model {
    fn kind(&self) -> SensorKind {
        SensorKind::Ov7251
    }

    fn chip_id(&self) -> ChipId {
        ChipId {
            register: constants::REG_CHIP_ID,
            width: RegWidth::U16,
            accepted: &[config::CHIP_ID],
        }
    }

    fn modes(&self) -> &'static [SensorMode] {
        config::MODES
    }

    fn global_regs(&self) -> RegisterList {
        RegisterList::new("ov7251_global", regs::GLOBAL)
    }

    fn link_freqs(&self) -> &'static [u64] {
        config::LINK_FREQS
    }

    fn link_freq_regs(&self, _index: usize) -> RegisterList {
        RegisterList::empty("ov7251_845mbps")
    }

    fn timing(&self) -> SensorTiming {
        SensorTiming {
            lanes: config::LANES,
            bit_depth: config::BIT_DEPTH,
            system_clock: None,
            vts_max: config::VTS_MAX,
        }
    }

    fn limits(&self) -> ControlLimits {
        ControlLimits {
            exposure_min: config::EXPOSURE_MIN,
            exposure_margin: config::EXPOSURE_MAX_MARGIN,
            analogue_gain: config::ANALOG_GAIN,
            digital_gain: config::DIGITAL_GAIN,
            test_patterns: config::TEST_PATTERNS,
            flip: false,
        }
    }

    fn media_bus_code(&self) -> MediaBusCode {
        MediaBusCode::Y10
    }

    fn supply_names(&self) -> &'static [&'static str] {
        config::SUPPLIES
    }

    fn power_timing(&self) -> PowerTiming {
        PowerTiming {
            reset_hold_us: config::RESET_HOLD_US,
            settle_us: config::SETTLE_US,
        }
    }

    fn i2c_address(&self) -> u8 {
        config::I2C_ADDRESS
    }

    fn write_control(
        &self,
        bus: &mut dyn RegisterBus,
        id: ControlId,
        controls: &ControlSet,
    ) -> Result<()> {
        let value = controls.value(id);
        match id {
            ControlId::VerticalBlank => write_vts(bus, controls),
            ControlId::Exposure => Self::grouped(
                bus,
                constants::REG_EXPOSURE,
                RegWidth::U24,
                (value as u32) << constants::EXPOSURE_FRACTION_SHIFT,
            ),
            ControlId::AnalogueGain => Self::grouped(
                bus,
                config::REG_GAIN,
                RegWidth::U16,
                (value as u32) << config::GAIN_FRACTION_SHIFT,
            ),
            ControlId::DigitalGain => {
                for reg in config::REG_MWB_GAINS {
                    bus.write_value(reg, RegWidth::U16, value as u32)?;
                }
                Ok(())
            }
            ControlId::TestPattern => {
                let reg = if value > 0 { config::TEST_PATTERN_ENABLE } else { 0 };
                bus.write(config::REG_TEST_PATTERN, reg)
            }
            _ => Ok(()),
        }
    }
}
