use ovsensor::platform::mock::MockFirmware;
use ovsensor::platform::{DependentDeviceResolver, Resolved};
use ovsensor::{Error, FirmwareId};

fn cam() -> FirmwareId {
    FirmwareId::from("CAM0")
}

fn firmware() -> MockFirmware {
    let mut fw = MockFirmware::new();
    fw.add_node("CAM0", "INT347A");
    fw.add_node("DSDT", "PNP0A08");
    fw.add_node("PMIC", "INT3472");
    fw.set_dependencies("CAM0", &["DSDT", "PMIC"]);
    fw
}

#[test]
fn platform_device_wins_over_physical_nodes() {
    let mut fw = firmware();
    fw.set_platform_device("PMIC", "INT3472:05");
    fw.set_physical_nodes("PMIC", &["i2c-INT3472:05"]);
    match DependentDeviceResolver::default().resolve(&fw, &cam()).unwrap() {
        Resolved::Exact(h) => {
            assert_eq!(h.firmware_id().as_str(), "PMIC");
            assert_eq!(h.device().as_str(), "INT3472:05");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn first_physical_node_is_a_heuristic_match() {
    let mut fw = firmware();
    fw.set_physical_nodes("PMIC", &["i2c-INT3472:05", "spare"]);
    let resolved = DependentDeviceResolver::default().resolve(&fw, &cam()).unwrap();
    assert!(resolved.is_heuristic());
    assert_eq!(resolved.handle().unwrap().device().as_str(), "i2c-INT3472:05");
}

#[test]
fn unevaluable_dependency_is_skipped() {
    let mut fw = firmware();
    fw.add_broken_node("DSDT");
    fw.set_platform_device("PMIC", "INT3472:05");
    let resolved = DependentDeviceResolver::default().resolve(&fw, &cam()).unwrap();
    assert!(matches!(resolved, Resolved::Exact(_)));
}

#[test]
fn no_matching_dependency() {
    let mut fw = firmware();
    fw.set_dependencies("CAM0", &["DSDT"]);
    assert!(matches!(
        DependentDeviceResolver::default().resolve(&fw, &cam()).unwrap(),
        Resolved::NotFound
    ));
}

#[test]
fn custom_hardware_id() {
    let mut fw = firmware();
    fw.set_platform_device("DSDT", "root");
    let resolver = DependentDeviceResolver::new("PNP0A08");
    let resolved = resolver.resolve(&fw, &cam()).unwrap();
    assert_eq!(resolved.handle().unwrap().firmware_id().as_str(), "DSDT");
}

#[test]
fn unknown_sensor_node_is_a_firmware_error() {
    let fw = firmware();
    let err = DependentDeviceResolver::default()
        .resolve(&fw, &FirmwareId::from("CAM9"))
        .unwrap_err();
    assert!(matches!(err, Error::Firmware(_)));
}
