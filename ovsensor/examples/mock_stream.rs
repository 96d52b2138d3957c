//! Probe an OV5693 over mocks, switch modes and stream.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p ovsensor --example mock_stream

use anyhow::Context;
use ovsensor::test_support::mocked_sensor;
use ovsensor::{ControlId, FormatWhich, SensorKind};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (sensor, rig) = mocked_sensor(SensorKind::Ov569x).context("probe failed")?;
    println!("probed {} (chip id {:#x?})", sensor.kind(), sensor.chip_id());

    for index in 0.. {
        let Some((w, h)) = sensor.enum_frame_size(index) else { break };
        println!("  mode {}: {}x{}", index, w, h);
    }

    let fmt = sensor.set_format(1920, 1080, FormatWhich::Active)?;
    println!("active format {}x{} {}", fmt.width, fmt.height, fmt.code);

    sensor.set_control(ControlId::VerticalBlank, 200)?;
    println!("controls: {:?}", sensor.controls_snapshot());

    sensor.set_stream(true)?;
    println!("{} register writes to start streaming", rig.bus.writes().len());
    sensor.suspend()?;
    sensor.resume()?;
    println!("state after resume: {}", sensor.state());
    sensor.set_stream(false)?;
    sensor.remove();
    Ok(())
}
