#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{REG_ANALOGUE_GAIN, REG_CHIP_ID, REG_MODE_SELECT, fixture_sensor};
use ovsensor::{ControlId, Error, FormatWhich, StreamState};

#[test]
fn suspend_stops_stream_and_resume_restarts_it() {
    let (sensor, rig) = fixture_sensor();
    sensor.set_stream(true).unwrap();

    sensor.suspend().unwrap();
    assert!(sensor.is_suspended());
    assert_eq!(sensor.state(), StreamState::Off);
    assert!(!rig.is_powered());
    assert_eq!(rig.bus.writes().last(), Some(&(REG_MODE_SELECT, 0x00)));
    assert_eq!(sensor.power_refs(), 1);

    rig.bus.clear_log();
    sensor.resume().unwrap();
    assert!(!sensor.is_suspended());
    assert_eq!(sensor.state(), StreamState::Streaming);
    assert!(rig.is_powered());
    assert!(rig.bus.reads().contains(&(REG_CHIP_ID, 2)));
    assert_eq!(rig.bus.writes().last(), Some(&(REG_MODE_SELECT, 0x01)));
}

#[test]
fn operations_are_refused_while_suspended() {
    let (sensor, _rig) = fixture_sensor();
    sensor.suspend().unwrap();
    assert!(matches!(sensor.set_stream(true), Err(Error::Suspended)));
    assert!(matches!(sensor.power_on(), Err(Error::Suspended)));
    sensor.resume().unwrap();
    sensor.set_stream(true).unwrap();
}

#[test]
fn suspend_while_off_touches_nothing() {
    let (sensor, rig) = fixture_sensor();
    sensor.suspend().unwrap();
    sensor.suspend().unwrap();
    sensor.resume().unwrap();
    assert_eq!(sensor.state(), StreamState::Off);
    assert!(rig.log.actions().is_empty());
    assert!(rig.bus.writes().is_empty());
}

#[test]
fn resume_of_idle_sensor_restores_power_only() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    sensor.suspend().unwrap();
    rig.bus.clear_log();
    sensor.resume().unwrap();
    assert_eq!(sensor.state(), StreamState::Configured);
    assert!(rig.bus.writes().is_empty());
}

#[test]
fn resume_identify_failure_is_reported() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    sensor.suspend().unwrap();
    rig.bus.set_register(REG_CHIP_ID, 0x00);

    assert!(matches!(sensor.resume(), Err(Error::WrongDevice { .. })));
    assert_eq!(sensor.state(), StreamState::Off);
    assert_eq!(sensor.power_refs(), 0);
    assert!(!rig.is_powered());
}

#[test]
fn resume_power_failure_is_reported() {
    let (sensor, rig) = fixture_sensor();
    sensor.set_stream(true).unwrap();
    sensor.suspend().unwrap();
    rig.clock.set_failing(true);

    assert!(matches!(sensor.resume(), Err(Error::Power { .. })));
    assert_eq!(sensor.state(), StreamState::Off);
    assert_eq!(sensor.power_refs(), 0);

    rig.clock.set_failing(false);
    sensor.set_stream(true).unwrap();
    assert_eq!(sensor.state(), StreamState::Streaming);
}

#[test]
fn controls_set_while_suspended_apply_on_next_start() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    sensor.suspend().unwrap();
    rig.bus.clear_log();

    sensor.set_control(ControlId::AnalogueGain, 64).unwrap();
    assert!(rig.bus.writes().is_empty());

    sensor.resume().unwrap();
    sensor.set_stream(true).unwrap();
    assert_eq!(rig.bus.register(REG_ANALOGUE_GAIN), Some(64));
}

#[test]
fn active_format_change_is_busy_while_a_stream_awaits_resume() {
    let (sensor, _rig) = fixture_sensor();
    sensor.set_stream(true).unwrap();
    sensor.suspend().unwrap();
    assert!(matches!(
        sensor.set_format(1280, 720, FormatWhich::Active),
        Err(Error::Busy)
    ));
    assert!(sensor.set_format(1280, 720, FormatWhich::Try).is_ok());
}
