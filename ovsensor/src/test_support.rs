//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the mock wiring of a directly powered sensor
//! so tests across the crate and the tests/ directory share one setup.
#![allow(dead_code)]

use crate::bus::MockBus;
use crate::platform::mock::{EventLog, MockClock, MockDelay, MockGpio, MockRegulator};
use crate::power::DirectPower;
use crate::sensor::{Sensor, SensorBuilder, SensorModel, create_model_for};
use crate::types::SensorKind;
use crate::Result;

/// Handles onto every mock a rigged sensor was built from. All of them
/// share state with the copies moved into the sensor.
#[doc(hidden)]
#[derive(Debug, Clone)]
pub struct MockRig {
    /// Register bus.
    pub bus: MockBus,
    /// Power events of every mock below.
    pub log: EventLog,
    /// Master clock.
    pub clock: MockClock,
    /// Reset line.
    pub reset: MockGpio,
    /// One rail per model supply, in supply order.
    pub regulators: Vec<MockRegulator>,
    /// Delay provider.
    pub delay: MockDelay,
}

impl MockRig {
    /// Mocks matching `model`: its chip id is pre-loaded and one rail is
    /// created per supply name.
    #[doc(hidden)]
    pub fn for_model(model: &dyn SensorModel) -> Self {
        let log = EventLog::new();
        let id = model.chip_id();
        let bus = MockBus::new().with_chip_id(
            id.register,
            id.width,
            id.accepted.first().copied().unwrap_or_default(),
        );
        Self {
            bus,
            clock: MockClock::new(&log),
            reset: MockGpio::new("reset", &log),
            regulators: model
                .supply_names()
                .iter()
                .map(|n| MockRegulator::new(*n, &log))
                .collect(),
            delay: MockDelay::with_log(&log),
            log,
        }
    }

    #[doc(hidden)]
    pub fn direct_power(&self) -> DirectPower {
        let mut power = DirectPower::new(Box::new(self.clock.clone()))
            .with_reset(Box::new(self.reset.clone()));
        for r in &self.regulators {
            power = power.with_regulator(Box::new(r.clone()));
        }
        power
    }

    /// Whether the clock and every rail are on.
    #[doc(hidden)]
    pub fn is_powered(&self) -> bool {
        self.clock.is_enabled() && self.regulators.iter().all(|r| r.is_enabled())
    }
}

/// Probe `model` over fresh mocks.
#[doc(hidden)]
pub fn rigged_sensor(model: Box<dyn SensorModel>) -> Result<(Sensor, MockRig)> {
    let rig = MockRig::for_model(model.as_ref());
    let sensor = SensorBuilder::for_model(model)
        .with_bus(rig.bus.clone())
        .with_delay(rig.delay.clone())
        .with_direct_power(rig.direct_power())
        .probe()?;
    rig.bus.clear_log();
    rig.log.clear();
    Ok((sensor, rig))
}

/// Probe a built-in family over fresh mocks.
#[doc(hidden)]
pub fn mocked_sensor(kind: SensorKind) -> Result<(Sensor, MockRig)> {
    rigged_sensor(create_model_for(kind)?)
}
