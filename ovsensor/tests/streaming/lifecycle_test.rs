#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{
    REG_ANALOGUE_GAIN, REG_CHIP_ID, REG_EXPOSURE, REG_MODE_SELECT, REG_TEST_PATTERN, REG_VTS,
    first_write, fixture_sensor, register_value,
};
use ovsensor::bus::RegWidth;
use ovsensor::{Error, MediaBusCode, StreamState};

#[test]
fn stream_start_writes_lists_then_controls_then_stream_on() {
    let (sensor, rig) = fixture_sensor();
    sensor.set_stream(true).unwrap();
    assert_eq!(sensor.state(), StreamState::Streaming);
    assert_eq!(sensor.power_refs(), 1);
    assert!(rig.is_powered());

    let writes = rig.bus.writes();
    assert_eq!(&writes[..5], &[
        (0x0103, 0x01),
        (0x3000, 0x11),
        (0x0300, 0x05),
        (0x3808, 0x02),
        (0x380a, 0x01),
    ]);
    assert_eq!(writes.last(), Some(&(REG_MODE_SELECT, 0x01)));

    let vts = first_write(&rig, REG_VTS).unwrap();
    let gain = first_write(&rig, REG_ANALOGUE_GAIN).unwrap();
    let exposure = first_write(&rig, REG_EXPOSURE).unwrap();
    let pattern = first_write(&rig, REG_TEST_PATTERN).unwrap();
    assert!(vts > 4 && vts < gain && gain < exposure && exposure < pattern);

    assert_eq!(register_value(&rig, REG_VTS, RegWidth::U16), Some(720));
    assert_eq!(register_value(&rig, REG_EXPOSURE, RegWidth::U24), Some(714 << 4));
}

#[test]
fn global_list_delay_is_honoured() {
    let (sensor, rig) = fixture_sensor();
    sensor.set_stream(true).unwrap();
    assert!(rig.delay.total_ns() >= 5_000_000);
}

#[test]
fn set_stream_is_idempotent() {
    let (sensor, rig) = fixture_sensor();
    sensor.set_stream(true).unwrap();
    sensor.set_stream(true).unwrap();
    assert_eq!(sensor.power_refs(), 1);
    let starts = rig
        .bus
        .writes()
        .iter()
        .filter(|w| **w == (REG_MODE_SELECT, 0x01))
        .count();
    assert_eq!(starts, 1);

    sensor.set_stream(false).unwrap();
    sensor.set_stream(false).unwrap();
    assert_eq!(sensor.state(), StreamState::Off);
    assert_eq!(sensor.power_refs(), 0);
    assert_eq!(rig.bus.writes().last(), Some(&(REG_MODE_SELECT, 0x00)));
    assert!(!rig.is_powered());
}

#[test]
fn outside_power_reference_keeps_sensor_configured() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    assert_eq!(sensor.state(), StreamState::Configured);
    sensor.set_stream(true).unwrap();
    assert_eq!(sensor.power_refs(), 2);

    sensor.set_stream(false).unwrap();
    assert_eq!(sensor.state(), StreamState::Configured);
    assert!(rig.is_powered());

    sensor.power_off();
    assert_eq!(sensor.state(), StreamState::Off);
    assert!(!rig.is_powered());
}

#[test]
fn failed_start_releases_its_power_reference() {
    let (sensor, rig) = fixture_sensor();
    rig.bus.fail_writes_to(0x380a);
    let err = sensor.set_stream(true).unwrap_err();
    assert_eq!(err.bus_address(), Some(0x380a));
    assert_eq!(sensor.state(), StreamState::Off);
    assert_eq!(sensor.power_refs(), 0);
    assert!(!rig.is_powered());
    assert!(!rig.bus.writes().contains(&(REG_MODE_SELECT, 0x01)));
}

#[test]
fn failed_start_with_outside_reference_returns_to_configured() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    rig.bus.fail_writes_to(REG_EXPOSURE);
    assert!(matches!(sensor.set_stream(true), Err(Error::Bus { .. })));
    assert_eq!(sensor.state(), StreamState::Configured);
    assert_eq!(sensor.power_refs(), 1);

    rig.bus.heal();
    sensor.set_stream(true).unwrap();
    assert_eq!(sensor.state(), StreamState::Streaming);
}

#[test]
fn foreign_chip_is_powered_back_down() {
    let (sensor, rig) = fixture_sensor();
    rig.bus.set_register(REG_CHIP_ID, 0x12);
    assert!(matches!(
        sensor.power_on(),
        Err(Error::WrongDevice { expected: 0x5a5a, actual: 0x125a })
    ));
    assert_eq!(sensor.state(), StreamState::Off);
    assert_eq!(sensor.power_refs(), 0);
    assert!(!rig.is_powered());
}

#[test]
fn power_failure_leaves_reference_count_untouched() {
    let (sensor, rig) = fixture_sensor();
    rig.regulators[1].set_failing(true);
    assert!(matches!(sensor.power_on(), Err(Error::Power { .. })));
    assert_eq!(sensor.power_refs(), 0);
    assert_eq!(sensor.state(), StreamState::Off);
    assert!(!rig.clock.is_enabled());
    assert!(matches!(sensor.set_stream(true), Err(Error::Power { .. })));
}

#[test]
fn remove_stops_stream_and_powers_down() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    sensor.set_stream(true).unwrap();
    sensor.remove();
    assert_eq!(rig.bus.writes().last(), Some(&(REG_MODE_SELECT, 0x00)));
    assert!(!rig.is_powered());
    assert!(rig.reset.is_active());
    assert!(!rig.clock.is_enabled());
}

#[test]
fn enumeration_reports_catalog() {
    let (sensor, _rig) = fixture_sensor();
    assert_eq!(sensor.enum_mbus_code(0), Some(MediaBusCode::Sbggr10));
    assert_eq!(sensor.enum_mbus_code(1), None);
    assert_eq!(sensor.enum_frame_size(0), Some((640, 480)));
    assert_eq!(sensor.enum_frame_size(1), Some((1280, 720)));
    assert_eq!(sensor.enum_frame_size(2), None);
    assert_eq!(sensor.frame_interval().to_string(), "1/30");
}
