#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{REG_VTS, fixture_sensor, register_value};
use ovsensor::bus::RegWidth;
use ovsensor::{ControlId, Error, FormatWhich, MediaBusCode, NegotiatedFormat};

#[test]
fn try_format_leaves_active_mode_alone() {
    let (sensor, _rig) = fixture_sensor();
    let fmt = sensor.set_format(1300, 700, FormatWhich::Try).unwrap();
    assert_eq!(
        fmt,
        NegotiatedFormat { width: 1280, height: 720, code: MediaBusCode::Sbggr10 }
    );
    assert_eq!(sensor.format(FormatWhich::Try).width, 1280);
    assert_eq!(sensor.format(FormatWhich::Active).width, 640);
    assert_eq!(sensor.control(ControlId::Exposure), 714);
}

#[test]
fn untried_format_reports_active() {
    let (sensor, _rig) = fixture_sensor();
    assert_eq!(sensor.format(FormatWhich::Try), sensor.format(FormatWhich::Active));
}

#[test]
fn active_format_rederives_controls() {
    let (sensor, _rig) = fixture_sensor();
    sensor.set_control(ControlId::VerticalBlank, 100).unwrap();
    sensor.set_format(1280, 720, FormatWhich::Active).unwrap();

    let mode = sensor.current_mode();
    assert_eq!((mode.width, mode.height), (1280, 720));
    assert_eq!(sensor.control(ControlId::VerticalBlank), 240);
    assert_eq!(sensor.control(ControlId::HorizontalBlank), 1800 - 1280);
    let exposure = sensor.control_range(ControlId::Exposure);
    assert_eq!(exposure.max, 954);
    assert_eq!(exposure.default, 500);
}

#[test]
fn exposure_is_clamped_into_a_smaller_mode() {
    let (sensor, _rig) = fixture_sensor();
    sensor.set_format(1280, 720, FormatWhich::Active).unwrap();
    sensor.set_control(ControlId::Exposure, 900).unwrap();
    sensor.set_format(640, 480, FormatWhich::Active).unwrap();
    assert_eq!(sensor.control(ControlId::Exposure), 714);
}

#[test]
fn active_change_is_refused_while_streaming() {
    let (sensor, _rig) = fixture_sensor();
    sensor.set_stream(true).unwrap();
    assert!(matches!(
        sensor.set_format(1280, 720, FormatWhich::Active),
        Err(Error::Busy)
    ));
    assert!(sensor.set_format(1280, 720, FormatWhich::Try).is_ok());
    assert_eq!(sensor.format(FormatWhich::Active).width, 640);
}

#[test]
fn next_stream_uses_the_new_mode() {
    let (sensor, rig) = fixture_sensor();
    sensor.set_format(1280, 720, FormatWhich::Active).unwrap();
    sensor.set_stream(true).unwrap();
    assert!(rig.bus.writes().contains(&(0x3808, 0x05)));
    assert!(!rig.bus.writes().contains(&(0x3808, 0x02)));
    assert_eq!(register_value(&rig, REG_VTS, RegWidth::U16), Some(960));
}
