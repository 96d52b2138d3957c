// ovsensor/src/sensor/builder.rs

//! Resource collection and probing.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, info, warn};

use crate::bus::{I2cBus, RegisterBus};
use crate::platform::{DependentDeviceResolver, Firmware, Resolved};
use crate::power::{CompanionPower, DirectPower, PowerSequencer, PowerTiming, PowerTopology};
use crate::sensor::handle::Sensor;
use crate::sensor::models::{SensorModel, create_model_for};
use crate::types::{FirmwareId, SensorKind};
use crate::utils::StdDelay;
use crate::{Error, Result};

/// Collects the resources a sensor needs and probes it.
pub struct SensorBuilder {
    model: Result<Box<dyn SensorModel>>,
    bus: Option<Box<dyn RegisterBus + Send>>,
    delay: Option<Box<dyn DelayNs + Send>>,
    direct: Option<DirectPower>,
    timing: Option<PowerTiming>,
    resolver: DependentDeviceResolver,
}

impl SensorBuilder {
    /// Builder for one of the built-in families. A family compiled out by
    /// feature selection fails at probe time.
    pub fn new(kind: SensorKind) -> Self {
        Self::from_model(create_model_for(kind))
    }

    /// Builder for a caller-supplied model.
    pub fn for_model(model: Box<dyn SensorModel>) -> Self {
        Self::from_model(Ok(model))
    }

    fn from_model(model: Result<Box<dyn SensorModel>>) -> Self {
        Self {
            model,
            bus: None,
            delay: None,
            direct: None,
            timing: None,
            resolver: DependentDeviceResolver::default(),
        }
    }

    /// Use an already addressed register bus.
    pub fn with_bus(mut self, bus: impl RegisterBus + Send + 'static) -> Self {
        self.bus = Some(Box::new(bus));
        self
    }

    /// Talk to the sensor over `i2c` at 7-bit `address`. Each model
    /// reports its usual address through `SensorModel::i2c_address`.
    pub fn with_i2c<I>(self, i2c: I, address: u8) -> Self
    where
        I: I2c + Send + 'static,
    {
        self.with_bus(I2cBus::new(i2c, address))
    }

    /// Defaults to `StdDelay`.
    pub fn with_delay(mut self, delay: impl DelayNs + Send + 'static) -> Self {
        self.delay = Some(Box::new(delay));
        self
    }

    /// Power the sensor from its own clock, reset line and rails.
    pub fn with_direct_power(mut self, power: DirectPower) -> Self {
        self.direct = Some(power);
        self
    }

    /// Override the model's power-up settle times.
    pub fn with_power_timing(mut self, timing: PowerTiming) -> Self {
        self.timing = Some(timing);
        self
    }

    /// Replace the default companion resolver.
    pub fn with_resolver(mut self, resolver: DependentDeviceResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Probe a directly wired sensor.
    pub fn probe(mut self) -> Result<Sensor> {
        let power = self
            .direct
            .take()
            .ok_or_else(|| Error::MissingResource("power topology".to_string()))?;
        self.finish(power.into())
    }

    /// Probe a sensor described by platform firmware. A companion found in
    /// the dependency list powers the sensor; without one the builder falls
    /// back to direct power, and fails with `NotFound` if none was given.
    pub fn probe_with_firmware(mut self, firmware: &dyn Firmware, sensor: &FirmwareId) -> Result<Sensor> {
        if let Ok(hid) = firmware.hardware_id(sensor) {
            if let (Some(found), Ok(model)) = (SensorKind::from_hardware_id(&hid), self.model.as_ref()) {
                if found != model.kind() {
                    warn!("{} is described as {}, probing as {}", sensor, found, model.kind());
                }
            }
        }

        let topology = match self.resolver.resolve(firmware, sensor)? {
            Resolved::NotFound => match self.direct.take() {
                Some(power) => {
                    debug!("{}: no companion, using direct power", sensor);
                    PowerTopology::from(power)
                }
                None => {
                    return Err(Error::NotFound(format!("power companion for {}", sensor)));
                }
            },
            resolved => CompanionPower::acquire(firmware, &resolved)?.into(),
        };
        self.finish(topology)
    }

    fn finish(self, topology: PowerTopology) -> Result<Sensor> {
        let model = self.model?;
        let bus = self
            .bus
            .ok_or_else(|| Error::MissingResource("register bus".to_string()))?;
        let delay = self.delay.unwrap_or_else(|| Box::new(StdDelay::new()));
        let sequencer = PowerSequencer::new(self.timing.unwrap_or_else(|| model.power_timing()));
        let kind = model.kind();
        let power = topology.name();

        let sensor = Sensor::new(model, sequencer, bus, delay, topology)?;
        sensor.initialize()?;
        info!("{} probed ({} power)", kind, power);
        Ok(sensor)
    }
}
