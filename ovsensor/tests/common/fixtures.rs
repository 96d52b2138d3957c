// fixtures.rs: a small sensor model with fully known registers

#![allow(dead_code)]

use ovsensor::bus::{RegWidth, RegisterBus};
use ovsensor::sensor::{ChipId, ControlLimits, ControlSet, SensorMode, SensorModel, SensorTiming};
use ovsensor::test_support::{MockRig, rigged_sensor};
use ovsensor::{ControlId, ControlRange, Result, SensorKind, Sensor};
use ovsensor::regs::{RegisterList, RegisterOp};

pub const CHIP_ID: u32 = 0x5a5a;
pub const REG_CHIP_ID: u16 = 0x300a;
pub const REG_MODE_SELECT: u16 = 0x0100;
pub const REG_VTS: u16 = 0x380e;
pub const REG_EXPOSURE: u16 = 0x3500;
pub const REG_ANALOGUE_GAIN: u16 = 0x3509;
pub const REG_DIGITAL_GAIN: u16 = 0x350a;
pub const REG_TEST_PATTERN: u16 = 0x4503;

pub const GLOBAL_OPS: [RegisterOp; 2] = [RegisterOp::with_delay(0x0103, 0x01, 5), RegisterOp::new(0x3000, 0x11)];
pub const LINK_OPS: [RegisterOp; 1] = [RegisterOp::new(0x0300, 0x05)];
pub const VGA_OPS: [RegisterOp; 2] = [RegisterOp::new(0x3808, 0x02), RegisterOp::new(0x380a, 0x01)];
pub const HD_OPS: [RegisterOp; 2] = [RegisterOp::new(0x3808, 0x05), RegisterOp::new(0x380a, 0x02)];

/// 640x480: vts 720, so vblank 240 and exposure up to 714.
pub const MODES: [SensorMode; 2] = [
    SensorMode {
        width: 640,
        height: 480,
        hts: 1350,
        vts_def: 720,
        vts_min: 500,
        link_freq_index: 0,
        fps: 30,
        exposure_default: None,
        regs: RegisterList::new("vga", &VGA_OPS),
    },
    SensorMode {
        width: 1280,
        height: 720,
        hts: 1800,
        vts_def: 960,
        vts_min: 740,
        link_freq_index: 0,
        fps: 30,
        exposure_default: Some(500),
        regs: RegisterList::new("hd", &HD_OPS),
    },
];

pub const TEST_PATTERNS: [&str; 2] = ["Disabled", "Color Bars"];

#[derive(Debug, Default)]
pub struct FixtureModel;

impl SensorModel for FixtureModel {
    fn kind(&self) -> SensorKind {
        SensorKind::Ov569x
    }

    fn chip_id(&self) -> ChipId {
        ChipId {
            register: REG_CHIP_ID,
            width: RegWidth::U16,
            accepted: &[CHIP_ID],
        }
    }

    fn modes(&self) -> &'static [SensorMode] {
        &MODES
    }

    fn global_regs(&self) -> RegisterList {
        RegisterList::new("global", &GLOBAL_OPS)
    }

    fn link_freqs(&self) -> &'static [u64] {
        &[360_000_000]
    }

    fn link_freq_regs(&self, _index: usize) -> RegisterList {
        RegisterList::new("link", &LINK_OPS)
    }

    fn timing(&self) -> SensorTiming {
        SensorTiming {
            lanes: 2,
            bit_depth: 10,
            system_clock: None,
            vts_max: 0x7fff,
        }
    }

    fn limits(&self) -> ControlLimits {
        ControlLimits {
            exposure_min: 4,
            exposure_margin: 6,
            analogue_gain: ControlRange::new(16, 248, 128),
            digital_gain: ControlRange::new(0, 0x3fff, 1024),
            test_patterns: &TEST_PATTERNS,
            flip: false,
        }
    }

    fn supply_names(&self) -> &'static [&'static str] {
        &["avdd", "dovdd", "dvdd"]
    }

    fn write_control(&self, bus: &mut dyn RegisterBus, id: ControlId, controls: &ControlSet) -> Result<()> {
        let value = controls.value(id);
        match id {
            ControlId::VerticalBlank => {
                let vts = i64::from(controls.height()) + value;
                bus.write_value(REG_VTS, RegWidth::U16, vts as u32)
            }
            ControlId::Exposure => bus.write_value(REG_EXPOSURE, RegWidth::U24, (value as u32) << 4),
            ControlId::AnalogueGain => bus.write(REG_ANALOGUE_GAIN, value as u8),
            ControlId::DigitalGain => bus.write_value(REG_DIGITAL_GAIN, RegWidth::U16, value as u32),
            ControlId::TestPattern => bus.write(REG_TEST_PATTERN, if value == 0 { 0 } else { 0x80 }),
            _ => Ok(()),
        }
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A probed fixture sensor, powered off, with empty mock logs.
pub fn fixture_sensor() -> (Sensor, MockRig) {
    init_logging();
    rigged_sensor(Box::new(FixtureModel)).expect("fixture probe")
}

/// Value of a big-endian multi-byte register as last written.
pub fn register_value(rig: &MockRig, address: u16, width: RegWidth) -> Option<u32> {
    (0..width.bytes()).try_fold(0u32, |acc, i| {
        rig.bus
            .register(address + i as u16)
            .map(|b| (acc << 8) | u32::from(b))
    })
}

/// Index of the first write to `address` in the bus log.
pub fn first_write(rig: &MockRig, address: u16) -> Option<usize> {
    rig.bus.writes().iter().position(|(a, _)| *a == address)
}
