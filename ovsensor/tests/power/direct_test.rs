#[path = "../common/mod.rs"]
mod common;

use common::fixtures::fixture_sensor;
use ovsensor::StreamState;
use ovsensor::platform::mock::PowerEvent;

fn line(name: &str, active: bool) -> PowerEvent {
    PowerEvent::Line { name: name.to_string(), active }
}

#[test]
fn power_on_follows_hardware_order() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    assert_eq!(
        rig.log.actions(),
        vec![
            PowerEvent::ClockOn,
            line("reset", true),
            PowerEvent::RegulatorOn("avdd".into()),
            PowerEvent::RegulatorOn("dovdd".into()),
            PowerEvent::RegulatorOn("dvdd".into()),
            line("reset", false),
        ]
    );
}

#[test]
fn power_off_mirrors_power_on() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    rig.log.clear();
    sensor.power_off();
    assert_eq!(
        rig.log.actions(),
        vec![
            line("reset", true),
            PowerEvent::RegulatorOff("dvdd".into()),
            PowerEvent::RegulatorOff("dovdd".into()),
            PowerEvent::RegulatorOff("avdd".into()),
            PowerEvent::ClockOff,
        ]
    );
}

#[test]
fn settle_delays_are_issued() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    let delays: Vec<_> = rig
        .log
        .events()
        .into_iter()
        .filter(|e| matches!(e, PowerEvent::Delay { .. }))
        .collect();
    assert_eq!(
        delays,
        vec![PowerEvent::Delay { ns: 1_000_000 }, PowerEvent::Delay { ns: 1_500_000 }]
    );
}

#[test]
fn references_are_counted() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_on().unwrap();
    sensor.power_on().unwrap();
    assert_eq!(sensor.power_refs(), 2);
    let clock_ons = rig
        .log
        .actions()
        .iter()
        .filter(|e| **e == PowerEvent::ClockOn)
        .count();
    assert_eq!(clock_ons, 1);

    sensor.power_off();
    assert!(rig.is_powered());
    sensor.power_off();
    assert!(!rig.is_powered());
    assert_eq!(sensor.state(), StreamState::Off);
}

#[test]
fn unbalanced_release_is_harmless() {
    let (sensor, rig) = fixture_sensor();
    sensor.power_off();
    assert_eq!(sensor.power_refs(), 0);
    assert!(rig.log.actions().is_empty());
}

#[test]
fn rail_failure_unwinds_enabled_rails() {
    let (sensor, rig) = fixture_sensor();
    rig.regulators[2].set_failing(true);
    assert!(sensor.power_on().is_err());
    assert_eq!(
        rig.log.actions(),
        vec![
            PowerEvent::ClockOn,
            line("reset", true),
            PowerEvent::RegulatorOn("avdd".into()),
            PowerEvent::RegulatorOn("dovdd".into()),
            PowerEvent::RegulatorOff("dovdd".into()),
            PowerEvent::RegulatorOff("avdd".into()),
            PowerEvent::ClockOff,
        ]
    );
}
