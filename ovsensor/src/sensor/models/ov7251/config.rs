//! OV7251 configuration

use crate::regs::RegisterList;
use crate::sensor::mode::SensorMode;
use crate::types::ControlRange;

use super::regs;

pub const CHIP_ID: u32 = 0x7251;
pub const I2C_ADDRESS: u8 = 0x60;

/// 422.4 MHz single-lane link.
pub const LINK_FREQS: &[u64] = &[422_400_000];
pub const LANES: u32 = 1;
pub const BIT_DEPTH: u32 = 10;
pub const VTS_MAX: u32 = 0xffff;

pub const EXPOSURE_MIN: i64 = 1;
pub const EXPOSURE_MAX_MARGIN: i64 = 4;

/// Gain register pair; only seven integer bits are valid.
pub const REG_GAIN: u16 = 0x350a;
pub const ANALOG_GAIN: ControlRange = ControlRange::new(0, 0x7f, 0x10);
pub const GAIN_FRACTION_SHIFT: u32 = 4;

/// Manual white balance gains, used as digital gain on this mono part.
pub const REG_MWB_GAINS: [u16; 3] = [0x5186, 0x5188, 0x518a];
pub const DIGITAL_GAIN: ControlRange = ControlRange::new(0, 0x0fff, 0x0400);

/// Exposure and gain updates are latched together through group hold.
pub const REG_GROUP_ACCESS: u16 = 0x3208;
pub const GROUP_HOLD_START: u8 = 0x00;
pub const GROUP_HOLD_END: u8 = 0x10;
pub const GROUP_HOLD_LAUNCH: u8 = 0xa0;

pub const REG_TEST_PATTERN: u16 = 0x5e00;
pub const TEST_PATTERN_ENABLE: u8 = 0x80;
pub const TEST_PATTERNS: &[&str] = &["Disabled", "Vertical Color Bar"];

pub const SUPPLIES: &[&str] = &["vdddo", "vdda", "vddd"];
pub const RESET_HOLD_US: u32 = 5_000;
pub const SETTLE_US: u32 = 20_000;

pub const MODES: &[SensorMode] = &[SensorMode {
    width: 640,
    height: 480,
    hts: 928,
    vts_def: 1724,
    vts_min: 1724,
    link_freq_index: 0,
    fps: 75,
    exposure_default: None,
    regs: RegisterList::new("ov7251_640x480", regs::MODE_640X480),
}];
