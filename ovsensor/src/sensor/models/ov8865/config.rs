//! OV8865-specific configuration

use crate::regs::RegisterList;
use crate::sensor::mode::SensorMode;
use crate::types::ControlRange;

use super::regs;

pub const CHIP_ID: u32 = 0x008865;

/// 360 MHz and 180 MHz CSI-2 link clocks.
pub const LINK_FREQS: &[u64] = &[360_000_000, 180_000_000];
pub const LANES: u32 = 4;
pub const BIT_DEPTH: u32 = 10;
/// `hts` is counted in system clocks, not pixel clocks.
pub const SYSTEM_CLOCK: u64 = 144_000_000;
pub const VTS_MAX: u32 = 0x7fff;

pub const EXPOSURE_MIN: i64 = 6;
pub const EXPOSURE_MAX_MARGIN: i64 = 6;

pub const REG_ANALOG_GAIN: u16 = 0x3508;
pub const ANALOG_GAIN: ControlRange = ControlRange::new(128, 2047, 128);

/// White balance gains double as digital gain.
pub const REG_MWB_GAINS: [u16; 3] = [0x5019, 0x501b, 0x501d];
pub const DIGITAL_GAIN: ControlRange = ControlRange::new(0, 4095, 1024);

pub const REG_TEST_PATTERN: u16 = 0x5e00;
pub const TEST_PATTERN_ENABLE: u8 = 0x80;
pub const TEST_PATTERN_SHIFT: u32 = 2;
pub const TEST_PATTERNS: &[&str] = &[
    "Disabled",
    "Standard Color Bar",
    "Top-Bottom Darker Color Bar",
    "Right-Left Darker Color Bar",
    "Bottom-Top Darker Color Bar",
];

/// Vertical flip lives in FORMAT1, horizontal mirror in FORMAT2. Each
/// needs both the array and the digital bit.
pub const REG_FORMAT1: u16 = 0x3820;
pub const REG_FORMAT2: u16 = 0x3821;
pub const FORMAT_FLIP_BITS: u8 = 0x06;

pub const SUPPLIES: &[&str] = &["dovdd", "avdd", "dvdd"];
pub const RESET_HOLD_US: u32 = 1_000;
pub const SETTLE_US: u32 = 1_500;

pub const MODES: &[SensorMode] = &[
    SensorMode {
        width: 3280,
        height: 2464,
        hts: 1928,
        vts_def: 2488,
        vts_min: 2488,
        link_freq_index: 0,
        fps: 30,
        exposure_default: None,
        regs: RegisterList::new("ov8865_3280x2464", regs::MODE_3280X2464),
    },
    SensorMode {
        width: 1632,
        height: 1224,
        hts: 1932,
        vts_def: 2482,
        vts_min: 2482,
        link_freq_index: 1,
        fps: 30,
        exposure_default: None,
        regs: RegisterList::new("ov8865_1632x1224", regs::MODE_1632X1224),
    },
];
