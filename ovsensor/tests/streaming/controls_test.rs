#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{
    REG_ANALOGUE_GAIN, REG_EXPOSURE, REG_VTS, first_write, fixture_sensor, register_value,
};
use ovsensor::bus::RegWidth;
use ovsensor::{ControlId, Error};

#[test]
fn defaults_follow_the_first_mode() {
    let (sensor, _rig) = fixture_sensor();
    let snap = sensor.controls_snapshot();
    assert_eq!(snap.link_frequency, 360_000_000);
    assert_eq!(snap.pixel_rate, 144_000_000);
    assert_eq!(snap.hblank, 1350 - 640);
    assert_eq!(snap.vblank, 240);
    assert_eq!(snap.exposure, 714);
    assert_eq!(snap.analogue_gain, 128);
    assert_eq!(snap.digital_gain, 1024);
    assert_eq!(snap.test_pattern, 0);
}

#[test]
fn shrinking_vblank_pulls_exposure_down() {
    let (sensor, _rig) = fixture_sensor();
    sensor.set_control(ControlId::VerticalBlank, 100).unwrap();
    assert_eq!(sensor.control(ControlId::Exposure), 574);
    assert_eq!(sensor.control_range(ControlId::Exposure).max, 574);

    sensor.set_control(ControlId::VerticalBlank, 400).unwrap();
    assert_eq!(sensor.control(ControlId::Exposure), 574);
    assert_eq!(sensor.control_range(ControlId::Exposure).max, 874);
}

#[test]
fn derived_controls_are_read_only() {
    let (sensor, _rig) = fixture_sensor();
    for id in [ControlId::PixelRate, ControlId::LinkFrequency, ControlId::HorizontalBlank] {
        assert!(matches!(sensor.set_control(id, 1), Err(Error::ReadOnly(got)) if got == id));
    }
}

#[test]
fn out_of_range_value_is_rejected_without_change() {
    let (sensor, _rig) = fixture_sensor();
    let err = sensor.set_control(ControlId::AnalogueGain, 300).unwrap_err();
    assert!(matches!(
        err,
        Error::OutOfRange { control: ControlId::AnalogueGain, value: 300, min: 16, max: 248 }
    ));
    assert_eq!(sensor.control(ControlId::AnalogueGain), 128);
}

#[test]
fn configured_sensor_receives_changes_immediately() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    rig.bus.clear_log();

    sensor.set_control(ControlId::VerticalBlank, 100).unwrap();
    assert_eq!(register_value(&rig, REG_VTS, RegWidth::U16), Some(580));
    assert_eq!(register_value(&rig, REG_EXPOSURE, RegWidth::U24), Some(574 << 4));
    assert!(first_write(&rig, REG_VTS) < first_write(&rig, REG_EXPOSURE));
}

#[test]
fn unpowered_sensor_only_stores_values() {
    let (sensor, rig) = fixture_sensor();
    sensor.set_control(ControlId::Exposure, 300).unwrap();
    assert_eq!(sensor.control(ControlId::Exposure), 300);
    assert!(rig.bus.writes().is_empty());
}

#[test]
fn failed_write_restores_previous_values() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    rig.bus.fail_writes_to(REG_EXPOSURE);

    let err = sensor.set_control(ControlId::VerticalBlank, 100).unwrap_err();
    assert_eq!(err.bus_address(), Some(REG_EXPOSURE));
    assert_eq!(sensor.control(ControlId::VerticalBlank), 240);
    assert_eq!(sensor.control(ControlId::Exposure), 714);

    // VTS went out as 580 before the exposure write failed; it is put back.
    let vts_writes: Vec<u8> = rig
        .bus
        .writes()
        .iter()
        .filter(|(a, _)| *a == REG_VTS + 1)
        .map(|(_, v)| *v)
        .collect();
    assert_eq!(vts_writes, vec![(580 & 0xff) as u8, (720 & 0xff) as u8]);
    assert_eq!(register_value(&rig, REG_VTS, RegWidth::U16), Some(720));
    assert_eq!(register_value(&rig, REG_EXPOSURE, RegWidth::U24), None);
}

#[test]
fn failed_restore_is_not_fatal() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    sensor.set_control(ControlId::AnalogueGain, 64).unwrap();
    rig.bus.fail_writes_to(REG_ANALOGUE_GAIN);

    assert!(sensor.set_control(ControlId::AnalogueGain, 200).is_err());
    assert_eq!(sensor.control(ControlId::AnalogueGain), 64);
    assert_eq!(register_value(&rig, REG_ANALOGUE_GAIN, RegWidth::U8), Some(64));

    rig.bus.heal();
    sensor.set_control(ControlId::AnalogueGain, 200).unwrap();
    assert_eq!(register_value(&rig, REG_ANALOGUE_GAIN, RegWidth::U8), Some(200));
}

#[test]
fn test_pattern_menu() {
    let (sensor, _rig) = fixture_sensor();
    assert_eq!(sensor.test_pattern_names(), &["Disabled", "Color Bars"]);
    assert_eq!(sensor.control_range(ControlId::TestPattern).max, 1);
    assert!(sensor.set_control(ControlId::TestPattern, 2).is_err());
    sensor.set_control(ControlId::TestPattern, 1).unwrap();
}

#[cfg(feature = "ov8865")]
#[test]
fn ov8865_flips_land_after_the_mode_tables() {
    use ovsensor::SensorKind;
    use ovsensor::test_support::mocked_sensor;

    let (sensor, rig) = mocked_sensor(SensorKind::Ov8865).unwrap();
    sensor.set_control(ControlId::HorizontalFlip, 1).unwrap();
    sensor.set_stream(true).unwrap();
    // the tables leave FORMAT1 = 0x06 and FORMAT2 = 0x40
    assert_eq!(rig.bus.register(0x3821), Some(0x46));
    assert_eq!(rig.bus.register(0x3820), Some(0x00));

    sensor.set_control(ControlId::VerticalFlip, 1).unwrap();
    assert_eq!(rig.bus.register(0x3820), Some(0x06));
    assert!(sensor.controls_snapshot().vflip);
}
