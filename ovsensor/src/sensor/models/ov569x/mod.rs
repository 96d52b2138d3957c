mod config;
mod regs;

use crate::bus::{RegWidth, RegisterBus};
use crate::power::PowerTiming;
use crate::regs::RegisterList;
use crate::sensor::controls::{ControlLimits, ControlSet, SensorTiming};
use crate::sensor::mode::SensorMode;
use crate::sensor::models::{ChipId, SensorModel, write_exposure, write_vts};
use crate::types::{ControlId, SensorKind};
use crate::{Result, constants};

/// OV5693/OV5695, 5 MP on two lanes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ov569xModel;

impl Ov569xModel {
    /// The model; it carries no state.
    pub fn new() -> Self {
        Self
    }
}

impl SensorModel for Ov569xModel {
    fn kind(&self) -> SensorKind {
        SensorKind::Ov569x
    }

    fn chip_id(&self) -> ChipId {
        ChipId {
            register: constants::REG_CHIP_ID,
            width: RegWidth::U24,
            accepted: config::CHIP_IDS,
        }
    }

    fn modes(&self) -> &'static [SensorMode] {
        config::MODES
    }

    fn global_regs(&self) -> RegisterList {
        RegisterList::new("ov569x_global", regs::GLOBAL)
    }

    fn link_freqs(&self) -> &'static [u64] {
        config::LINK_FREQS
    }

    // single link rate, configured by the global table
    fn link_freq_regs(&self, _index: usize) -> RegisterList {
        RegisterList::empty("ov569x_840mbps")
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

    fn supply_names(&self) -> &'static [&'static str] {
        config::SUPPLIES
    }

    fn power_timing(&self) -> PowerTiming {
        PowerTiming {
            reset_hold_us: 0,
            settle_us: config::SETTLE_US,
        }
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
            ControlId::AnalogueGain => bus.write(config::REG_ANALOG_GAIN, value as u8),
            ControlId::DigitalGain => {
                bus.write(config::REG_DIGI_GAIN_L, (value & config::DIGI_GAIN_L_MASK) as u8)?;
                bus.write(config::REG_DIGI_GAIN_H, (value >> config::DIGI_GAIN_H_SHIFT) as u8)
            }
            ControlId::TestPattern => {
                let reg = if value > 0 {
                    (value - 1) as u8 | config::TEST_PATTERN_ENABLE
                } else {
                    0
                };
                bus.write(config::REG_TEST_PATTERN, reg)
            }
            _ => Ok(()),
        }
    }
}
