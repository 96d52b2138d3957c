// ovsensor/src/platform/mock.rs

//! Recording mocks for the platform collaborators. Every mock is cheap to
//! clone and clones share state, so tests keep a handle after handing one
//! to a sensor.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};

use crate::platform::traits::{Clock, Firmware, FirmwareDevice, GpioLine, Regulator};
use crate::types::{DeviceName, FirmwareId};
use crate::{Error, Result};

/// Observable power-related side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerEvent {
    /// Clock enabled.
    ClockOn,
    /// Clock disabled.
    ClockOff,
    /// Named rail enabled.
    RegulatorOn(String),
    /// Named rail disabled.
    RegulatorOff(String),
    /// A line changed its logical level.
    Line {
        /// Line name.
        name: String,
        /// New logical level.
        active: bool,
    },
    /// A delay was requested.
    Delay {
        /// Nanoseconds.
        ns: u64,
    },
}

/// Shared, ordered log of power events.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<PowerEvent>>>);

impl EventLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&self, event: PowerEvent) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Every event, delays included.
    pub fn events(&self) -> Vec<PowerEvent> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Events without delay entries.
    pub fn actions(&self) -> Vec<PowerEvent> {
        self.events()
            .into_iter()
            .filter(|e| !matches!(e, PowerEvent::Delay { .. }))
            .collect()
    }

    /// Drop every recorded event.
    pub fn clear(&self) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

/// Output pin that records its transitions.
#[derive(Debug, Clone)]
pub struct MockGpio {
    name: String,
    log: EventLog,
    level: Arc<AtomicBool>,
    fail: Arc<AtomicBool>,
}

impl MockGpio {
    /// Inactive line named `name` recording into `log`.
    pub fn new(name: impl Into<String>, log: &EventLog) -> Self {
        Self {
            name: name.into(),
            log: log.clone(),
            level: Arc::new(AtomicBool::new(false)),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Current logical level.
    pub fn is_active(&self) -> bool {
        self.level.load(Ordering::SeqCst)
    }

    /// Make every later transition fail.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn drive(&mut self, active: bool) -> std::result::Result<(), digital::ErrorKind> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(digital::ErrorKind::Other);
        }
        self.level.store(active, Ordering::SeqCst);
        self.log.push(PowerEvent::Line {
            name: self.name.clone(),
            active,
        });
        Ok(())
    }
}

impl digital::ErrorType for MockGpio {
    type Error = digital::ErrorKind;
}

impl OutputPin for MockGpio {
    fn set_low(&mut self) -> std::result::Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> std::result::Result<(), Self::Error> {
        self.drive(true)
    }
}

/// Clock that records enable and disable.
#[derive(Debug, Clone)]
pub struct MockClock {
    log: EventLog,
    enabled: Arc<AtomicBool>,
    fail: Arc<AtomicBool>,
}

impl MockClock {
    /// Disabled clock recording into `log`.
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            enabled: Arc::new(AtomicBool::new(false)),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the clock is running.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Make every later enable fail.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

impl Clock for MockClock {
    fn enable(&mut self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::Platform("clock enable failed".to_string()));
        }
        self.enabled.store(true, Ordering::SeqCst);
        self.log.push(PowerEvent::ClockOn);
        Ok(())
    }

    fn disable(&mut self) -> Result<()> {
        self.enabled.store(false, Ordering::SeqCst);
        self.log.push(PowerEvent::ClockOff);
        Ok(())
    }
}

/// Named rail that records enable and disable.
#[derive(Debug, Clone)]
pub struct MockRegulator {
    name: String,
    log: EventLog,
    enabled: Arc<AtomicBool>,
    fail_enable: Arc<AtomicBool>,
    fail_disable: Arc<AtomicBool>,
}

impl MockRegulator {
    /// Disabled rail named `name` recording into `log`.
    pub fn new(name: impl Into<String>, log: &EventLog) -> Self {
        Self {
            name: name.into(),
            log: log.clone(),
            enabled: Arc::new(AtomicBool::new(false)),
            fail_enable: Arc::new(AtomicBool::new(false)),
            fail_disable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the rail is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Make every later enable fail.
    pub fn set_failing(&self, fail: bool) {
        self.fail_enable.store(fail, Ordering::SeqCst);
    }

    /// Make every later disable fail.
    pub fn set_failing_disable(&self, fail: bool) {
        self.fail_disable.store(fail, Ordering::SeqCst);
    }
}

impl Regulator for MockRegulator {
    fn name(&self) -> &str {
        &self.name
    }

    fn enable(&mut self) -> Result<()> {
        if self.fail_enable.load(Ordering::SeqCst) {
            return Err(Error::Platform(format!("{} enable failed", self.name)));
        }
        self.enabled.store(true, Ordering::SeqCst);
        self.log.push(PowerEvent::RegulatorOn(self.name.clone()));
        Ok(())
    }

    fn disable(&mut self) -> Result<()> {
        if self.fail_disable.load(Ordering::SeqCst) {
            return Err(Error::Platform(format!("{} disable failed", self.name)));
        }
        self.enabled.store(false, Ordering::SeqCst);
        self.log.push(PowerEvent::RegulatorOff(self.name.clone()));
        Ok(())
    }
}

/// Delay provider that only accounts for the requested time.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    total_ns: Arc<AtomicU64>,
    log: Option<EventLog>,
}

impl MockDelay {
    /// Delay that records nothing but its running total.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also record each delay into `log`.
    pub fn with_log(log: &EventLog) -> Self {
        Self {
            total_ns: Arc::default(),
            log: Some(log.clone()),
        }
    }

    /// Sum of every requested delay.
    pub fn total_ns(&self) -> u64 {
        self.total_ns.load(Ordering::SeqCst)
    }

    fn record(&mut self, ns: u64) {
        self.total_ns.fetch_add(ns, Ordering::SeqCst);
        if let Some(log) = &self.log {
            log.push(PowerEvent::Delay { ns });
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000_000);
    }
}

#[derive(Debug, Default)]
struct MockNode {
    hid: Option<String>,
    deps: Option<Vec<FirmwareId>>,
    platform_device: Option<DeviceName>,
    physical_nodes: Vec<DeviceName>,
}

/// In-memory firmware description.
#[derive(Debug, Default)]
pub struct MockFirmware {
    nodes: HashMap<FirmwareId, MockNode>,
    lines: HashMap<DeviceName, Vec<Option<MockGpio>>>,
}

impl MockFirmware {
    /// Firmware with no nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare node `id` with hardware id `hid`.
    pub fn add_node(&mut self, id: &str, hid: &str) {
        self.nodes.entry(id.into()).or_default().hid = Some(hid.to_string());
    }

    /// A node whose hardware id cannot be evaluated.
    pub fn add_broken_node(&mut self, id: &str) {
        self.nodes.entry(id.into()).or_default().hid = None;
    }

    /// Dependency list of node `id`.
    pub fn set_dependencies(&mut self, id: &str, deps: &[&str]) {
        self.nodes.entry(id.into()).or_default().deps =
            Some(deps.iter().map(|d| FirmwareId::from(*d)).collect());
    }

    /// Live device instance behind node `id`.
    pub fn set_platform_device(&mut self, id: &str, device: &str) {
        self.nodes.entry(id.into()).or_default().platform_device = Some(device.into());
    }

    /// Physical nodes backing node `id`.
    pub fn set_physical_nodes(&mut self, id: &str, nodes: &[&str]) {
        self.nodes.entry(id.into()).or_default().physical_nodes =
            nodes.iter().map(|n| DeviceName::from(*n)).collect();
    }

    /// Lines exported by `device`, by index; `None` leaves a hole.
    pub fn set_gpio_lines(&mut self, device: &str, lines: Vec<Option<MockGpio>>) {
        self.lines.insert(device.into(), lines);
    }

    fn node(&self, id: &FirmwareId) -> Result<&MockNode> {
        self.nodes
            .get(id)
            .ok_or_else(|| Error::Firmware(format!("unknown node {}", id)))
    }
}

impl Firmware for MockFirmware {
    fn dependencies_of(&self, id: &FirmwareId) -> Result<Option<Vec<FirmwareId>>> {
        Ok(self.node(id)?.deps.clone())
    }

    fn hardware_id(&self, id: &FirmwareId) -> Result<String> {
        self.node(id)?
            .hid
            .clone()
            .ok_or_else(|| Error::Firmware(format!("{}: _HID evaluation failed", id)))
    }

    fn device_of(&self, id: &FirmwareId) -> Result<FirmwareDevice> {
        let node = self.node(id)?;
        Ok(FirmwareDevice {
            name: DeviceName::new(id.as_str()),
            platform_device: node.platform_device.clone(),
            physical_nodes: node.physical_nodes.clone(),
        })
    }

    fn gpio_line(
        &self,
        device: &DeviceName,
        index: usize,
    ) -> Result<Option<Box<dyn GpioLine + Send>>> {
        let line = self
            .lines
            .get(device)
            .and_then(|lines| lines.get(index).cloned().flatten());
        Ok(line.map(|g| Box::new(g) as Box<dyn GpioLine + Send>))
    }
}
