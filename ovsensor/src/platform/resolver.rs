// ovsensor/src/platform/resolver.rs

//! Companion lookup through the firmware dependency list.

use log::{debug, info, warn};

use crate::constants::COMPANION_HARDWARE_ID;
use crate::platform::traits::Firmware;
use crate::types::{DeviceName, FirmwareId};
use crate::Result;

/// Non-owning reference to a resolved companion device. It is a lookup
/// key only; the companion's lifetime belongs to the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DependentDeviceHandle {
    firmware_id: FirmwareId,
    device: DeviceName,
}

impl DependentDeviceHandle {
    /// Handle for the companion node `firmware_id` bound to `device`.
    pub fn new(firmware_id: FirmwareId, device: DeviceName) -> Self {
        Self {
            firmware_id,
            device,
        }
    }

    /// Firmware node of the companion.
    pub fn firmware_id(&self) -> &FirmwareId {
        &self.firmware_id
    }

    /// Device that exports the GPIO lines.
    pub fn device(&self) -> &DeviceName {
        &self.device
    }
}

/// Outcome of companion resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The companion node has a platform device of its own.
    Exact(DependentDeviceHandle),
    /// No platform device; the first physical node was used instead.
    Heuristic(DependentDeviceHandle),
    /// No dependency list, or nothing in it matched.
    NotFound,
}

impl Resolved {
    /// The handle of either found variant.
    pub fn handle(&self) -> Option<&DependentDeviceHandle> {
        match self {
            Resolved::Exact(h) | Resolved::Heuristic(h) => Some(h),
            Resolved::NotFound => None,
        }
    }

    /// Whether the physical-node fallback produced the handle.
    pub fn is_heuristic(&self) -> bool {
        matches!(self, Resolved::Heuristic(_))
    }
}

/// Finds the power companion a sensor depends on.
#[derive(Debug, Clone)]
pub struct DependentDeviceResolver {
    accepted_hid: String,
}

impl Default for DependentDeviceResolver {
    fn default() -> Self {
        Self::new(COMPANION_HARDWARE_ID)
    }
}

impl DependentDeviceResolver {
    /// Resolver accepting companions with hardware id `accepted_hid`.
    pub fn new(accepted_hid: impl Into<String>) -> Self {
        Self {
            accepted_hid: accepted_hid.into(),
        }
    }

    /// Hardware id a companion must carry.
    pub fn accepted_hid(&self) -> &str {
        &self.accepted_hid
    }

    /// Walk the sensor's dependency list and return the first entry whose
    /// hardware id matches. Entries whose id cannot be read are skipped.
    pub fn resolve(&self, firmware: &dyn Firmware, sensor: &FirmwareId) -> Result<Resolved> {
        let deps = match firmware.dependencies_of(sensor)? {
            Some(deps) => deps,
            None => {
                debug!("{}: no dependency list", sensor);
                return Ok(Resolved::NotFound);
            }
        };

        let matched = deps.into_iter().find(|dep| match firmware.hardware_id(dep) {
            Ok(hid) => hid == self.accepted_hid,
            Err(e) => {
                debug!("{}: skipping dependency {}: {}", sensor, dep, e);
                false
            }
        });
        let Some(dep) = matched else {
            debug!("{}: no {} dependency", sensor, self.accepted_hid);
            return Ok(Resolved::NotFound);
        };

        let device = firmware.device_of(&dep)?;
        if let Some(platform) = device.platform_device {
            info!("{}: companion {} at {}", sensor, dep, platform);
            return Ok(Resolved::Exact(DependentDeviceHandle::new(dep, platform)));
        }
        match device.physical_nodes.into_iter().next() {
            Some(node) => {
                warn!(
                    "{}: companion {} has no platform device, using physical node {}",
                    sensor, dep, node
                );
                Ok(Resolved::Heuristic(DependentDeviceHandle::new(dep, node)))
            }
            None => {
                warn!("{}: companion {} has no backing device", sensor, dep);
                Ok(Resolved::NotFound)
            }
        }
    }
}
