mod config;
mod regs;

use crate::bus::{RegWidth, RegisterBus};
use crate::power::PowerTiming;
use crate::regs::RegisterList;
use crate::sensor::controls::{ControlLimits, ControlSet, SensorTiming};
use crate::sensor::mode::SensorMode;
use crate::sensor::models::{ChipId, SensorModel, write_exposure, write_vts};
use crate::types::{ControlId, MediaBusCode, SensorKind};
use crate::{Result, constants};

/// 8 MP, four-lane sensor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ov8865Model;

impl Ov8865Model {
    /// The model; it carries no state.
    pub fn new() -> Self {
        Self
    }
}

impl SensorModel for Ov8865Model {
    fn kind(&self) -> SensorKind {
        SensorKind::Ov8865
    }

    fn chip_id(&self) -> ChipId {
        ChipId {
            register: constants::REG_CHIP_ID,
            width: RegWidth::U24,
            accepted: &[config::CHIP_ID],
        }
    }

    fn modes(&self) -> &'static [SensorMode] {
        config::MODES
    }

    fn global_regs(&self) -> RegisterList {
        RegisterList::new("ov8865_global", regs::GLOBAL)
    }

    fn link_freqs(&self) -> &'static [u64] {
        config::LINK_FREQS
    }

    fn link_freq_regs(&self, index: usize) -> RegisterList {
        match index {
            0 => RegisterList::new("ov8865_720mbps", regs::LINK_720MBPS),
            _ => RegisterList::new("ov8865_360mbps", regs::LINK_360MBPS),
        }
    }

    fn timing(&self) -> SensorTiming {
        SensorTiming {
            lanes: config::LANES,
            bit_depth: config::BIT_DEPTH,
            system_clock: Some(config::SYSTEM_CLOCK),
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
            flip: true,
        }
    }

    fn media_bus_code(&self) -> MediaBusCode {
        MediaBusCode::Sgrbg10
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

    fn post_identify(&self) -> Option<RegisterList> {
        Some(RegisterList::new("ov8865_otp_load", regs::OTP_LOAD))
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
            ControlId::Exposure => write_exposure(bus, controls),
            ControlId::AnalogueGain => {
                bus.write_value(config::REG_ANALOG_GAIN, RegWidth::U16, value as u32)
            }
            ControlId::DigitalGain => {
                for reg in config::REG_MWB_GAINS {
                    bus.write_value(reg, RegWidth::U16, value as u32)?;
                }
                Ok(())
            }
            ControlId::TestPattern => {
                let reg = if value > 0 {
                    (((value - 1) as u8) << config::TEST_PATTERN_SHIFT) | config::TEST_PATTERN_ENABLE
                } else {
                    0
                };
                bus.write(config::REG_TEST_PATTERN, reg)
            }
            ControlId::HorizontalFlip => {
                bus.modify(config::REG_FORMAT2, config::FORMAT_FLIP_BITS, flip_bits(value))
            }
            ControlId::VerticalFlip => {
                bus.modify(config::REG_FORMAT1, config::FORMAT_FLIP_BITS, flip_bits(value))
            }
            // derived values have no register of their own
            _ => Ok(()),
        }
    }
}

fn flip_bits(on: i64) -> u8 {
    if on != 0 { config::FORMAT_FLIP_BITS } else { 0 }
}
