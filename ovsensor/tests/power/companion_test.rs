#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{CHIP_ID, FixtureModel, REG_CHIP_ID, init_logging};
use ovsensor::bus::{MockBus, RegWidth};
use ovsensor::platform::mock::{EventLog, MockClock, MockDelay, MockFirmware, MockGpio, PowerEvent};
use ovsensor::power::DirectPower;
use ovsensor::sensor::SensorBuilder;
use ovsensor::{Error, FirmwareId, StreamState};

fn line(name: &str, active: bool) -> PowerEvent {
    PowerEvent::Line { name: name.to_string(), active }
}

fn builder() -> SensorBuilder {
    init_logging();
    SensorBuilder::for_model(Box::new(FixtureModel))
        .with_bus(MockBus::new().with_chip_id(REG_CHIP_ID, RegWidth::U16, CHIP_ID))
        .with_delay(MockDelay::new())
}

fn firmware(log: &EventLog, led: bool) -> MockFirmware {
    let mut fw = MockFirmware::new();
    fw.add_node("CAM0", "INT33BE");
    fw.add_node("PMIC", "INT3472");
    fw.set_dependencies("CAM0", &["PMIC"]);
    let mut lines = vec![
        Some(MockGpio::new("xshutdown", log)),
        Some(MockGpio::new("pwdn", log)),
    ];
    if led {
        lines.push(Some(MockGpio::new("led", log)));
    }
    fw.set_gpio_lines("INT3472:01", lines);
    fw
}

#[test]
fn companion_lines_drive_power() {
    let log = EventLog::new();
    let mut fw = firmware(&log, true);
    fw.set_platform_device("PMIC", "INT3472:01");

    let sensor = builder()
        .probe_with_firmware(&fw, &FirmwareId::from("CAM0"))
        .unwrap();
    log.clear();

    sensor.power_on().unwrap();
    assert_eq!(
        log.actions(),
        vec![line("xshutdown", true), line("pwdn", true), line("led", true)]
    );
    log.clear();
    sensor.power_off();
    assert_eq!(
        log.actions(),
        vec![line("led", false), line("pwdn", false), line("xshutdown", false)]
    );
}

#[test]
fn physical_node_fallback_is_flagged() {
    let log = EventLog::new();
    let mut fw = firmware(&log, false);
    fw.set_physical_nodes("PMIC", &["INT3472:01"]);

    let sensor = builder()
        .probe_with_firmware(&fw, &FirmwareId::from("CAM0"))
        .unwrap();
    assert!(sensor.companion_is_heuristic());
    let companion = sensor.companion().unwrap();
    assert_eq!(companion.firmware_id().as_str(), "PMIC");
    sensor.set_stream(true).unwrap();
    assert_eq!(sensor.state(), StreamState::Streaming);
}

#[test]
fn missing_required_line_aborts_probe() {
    let log = EventLog::new();
    let mut fw = firmware(&log, false);
    fw.set_platform_device("PMIC", "INT3472:01");
    fw.set_gpio_lines("INT3472:01", vec![Some(MockGpio::new("xshutdown", &log)), None]);

    let err = builder()
        .probe_with_firmware(&fw, &FirmwareId::from("CAM0"))
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(ref what) if what.contains("power_down")));
}

#[test]
fn sensor_without_companion_uses_direct_power() {
    let log = EventLog::new();
    let mut fw = MockFirmware::new();
    fw.add_node("CAM0", "INT33BE");
    let clock = MockClock::new(&log);

    let sensor = builder()
        .with_direct_power(DirectPower::new(Box::new(clock.clone())))
        .probe_with_firmware(&fw, &FirmwareId::from("CAM0"))
        .unwrap();
    assert!(sensor.companion().is_none());
    sensor.power_on().unwrap();
    assert!(clock.is_enabled());
}

#[test]
fn companion_without_backing_device_is_not_found() {
    let log = EventLog::new();
    let fw = firmware(&log, false);
    let err = builder()
        .probe_with_firmware(&fw, &FirmwareId::from("CAM0"))
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}
