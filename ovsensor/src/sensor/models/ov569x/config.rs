//! OV5693/OV5695 configuration

use crate::regs::RegisterList;
use crate::sensor::mode::SensorMode;
use crate::types::ControlRange;

use super::regs;

/// The two members of the family report different ids.
pub const CHIP_IDS: &[u32] = &[0x56906c, 0x005695];

pub const LINK_FREQS: &[u64] = &[420_000_000];
pub const LANES: u32 = 2;
pub const BIT_DEPTH: u32 = 10;
pub const VTS_MAX: u32 = 0x7fff;

pub const EXPOSURE_MIN: i64 = 4;
pub const EXPOSURE_MAX_MARGIN: i64 = 4;

pub const REG_ANALOG_GAIN: u16 = 0x3509;
pub const ANALOG_GAIN: ControlRange = ControlRange::new(0x10, 0xf8, 0xf8);

/// Digital gain spans two registers: six low bits and the remainder.
pub const REG_DIGI_GAIN_L: u16 = 0x350b;
pub const REG_DIGI_GAIN_H: u16 = 0x350a;
pub const DIGI_GAIN_L_MASK: i64 = 0x3f;
pub const DIGI_GAIN_H_SHIFT: u32 = 6;
pub const DIGITAL_GAIN: ControlRange = ControlRange::new(0, 0x3fff, 1024);

pub const REG_TEST_PATTERN: u16 = 0x4503;
pub const TEST_PATTERN_ENABLE: u8 = 0x80;
pub const TEST_PATTERNS: &[&str] = &[
    "Disabled",
    "Vertical Color Bar Type 1",
    "Vertical Color Bar Type 2",
    "Vertical Color Bar Type 3",
    "Vertical Color Bar Type 4",
];

pub const SUPPLIES: &[&str] = &["avdd", "dovdd", "dvdd"];
pub const SETTLE_US: u32 = 1_000;

const fn mode(
    width: u32,
    height: u32,
    hts: u32,
    vts: u32,
    fps: u32,
    exposure: u32,
    regs: RegisterList,
) -> SensorMode {
    SensorMode {
        width,
        height,
        hts,
        vts_def: vts,
        vts_min: vts,
        link_freq_index: 0,
        fps,
        exposure_default: Some(exposure),
        regs,
    }
}

pub const MODES: &[SensorMode] = &[
    mode(2592, 1944, 2960, 0x7e8, 30, 0x450, RegisterList::new("ov569x_2592x1944", regs::MODE_2592X1944)),
    mode(1920, 1080, 2688, 0x8b8, 30, 0x450, RegisterList::new("ov569x_1920x1080", regs::MODE_1920X1080)),
    mode(1296, 972, 2960, 0x3f4, 60, 0x3e0, RegisterList::new("ov569x_1296x972", regs::MODE_1296X972)),
    mode(1280, 720, 2688, 0x8b8, 30, 0x450, RegisterList::new("ov569x_1280x720", regs::MODE_1280X720)),
    mode(640, 480, 2688, 0x22e, 120, 0x450, RegisterList::new("ov569x_640x480", regs::MODE_640X480)),
];
