// ovsensor/src/types.rs

//! Value types shared by the sensor, power and platform layers.

use derive_more::{Display, From};
use std::convert::TryFrom;

use crate::Error;

/// Sensor families supported by the built-in models.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorKind {
    /// 8 MP, four lanes.
    #[display(fmt = "OV8865")]
    Ov8865,
    /// OV5693 and OV5695 share one register map.
    #[display(fmt = "OV569x")]
    Ov569x,
    /// Global-shutter VGA monochrome sensor.
    #[display(fmt = "OV7251")]
    Ov7251,
}

impl SensorKind {
    /// Firmware hardware id the platform uses to describe this sensor.
    pub fn hardware_id(&self) -> &'static str {
        match self {
            SensorKind::Ov8865 => "INT347A",
            SensorKind::Ov569x => "INT33BE",
            SensorKind::Ov7251 => "INT347E",
        }
    }

    /// Inverse of [`SensorKind::hardware_id`].
    pub fn from_hardware_id(hid: &str) -> Option<Self> {
        match hid {
            "INT347A" => Some(SensorKind::Ov8865),
            "INT33BE" => Some(SensorKind::Ov569x),
            "INT347E" => Some(SensorKind::Ov7251),
            _ => None,
        }
    }
}

impl TryFrom<&str> for SensorKind {
    type Error = Error;

    fn try_from(hid: &str) -> Result<Self, Self::Error> {
        SensorKind::from_hardware_id(hid).ok_or_else(|| Error::UnsupportedSensor(hid.to_string()))
    }
}

/// Control identifiers exposed by every sensor.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlId {
    /// CSI-2 link frequency in Hz (read only).
    #[display(fmt = "link_frequency")]
    LinkFrequency,
    /// Pixel rate in pixels per second (read only).
    #[display(fmt = "pixel_rate")]
    PixelRate,
    /// Horizontal blanking in pixels (read only).
    #[display(fmt = "hblank")]
    HorizontalBlank,
    /// Vertical blanking in lines.
    #[display(fmt = "vblank")]
    VerticalBlank,
    /// Coarse exposure in lines.
    #[display(fmt = "exposure")]
    Exposure,
    /// Analogue gain in sensor units.
    #[display(fmt = "analogue_gain")]
    AnalogueGain,
    /// Digital gain in sensor units.
    #[display(fmt = "digital_gain")]
    DigitalGain,
    /// Index into the test pattern menu.
    #[display(fmt = "test_pattern")]
    TestPattern,
    /// Mirror the readout left to right.
    #[display(fmt = "hflip")]
    HorizontalFlip,
    /// Flip the readout top to bottom.
    #[display(fmt = "vflip")]
    VerticalFlip,
}

impl ControlId {
    /// Every control, read-only ones included.
    pub const ALL: [ControlId; 10] = [
        ControlId::LinkFrequency,
        ControlId::PixelRate,
        ControlId::VerticalBlank,
        ControlId::HorizontalBlank,
        ControlId::AnalogueGain,
        ControlId::DigitalGain,
        ControlId::Exposure,
        ControlId::TestPattern,
        ControlId::HorizontalFlip,
        ControlId::VerticalFlip,
    ];

    /// Derived controls cannot be written by callers.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            ControlId::LinkFrequency | ControlId::PixelRate | ControlId::HorizontalBlank
        )
    }
}

/// Media bus pixel codes produced by the supported sensors.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaBusCode {
    /// 10-bit Bayer, BGGR order.
    #[display(fmt = "SBGGR10_1X10")]
    Sbggr10,
    /// 10-bit Bayer, GRBG order.
    #[display(fmt = "SGRBG10_1X10")]
    Sgrbg10,
    /// 10-bit greyscale.
    #[display(fmt = "Y10_1X10")]
    Y10,
}

impl MediaBusCode {
    /// Numeric media bus format code.
    pub fn code(&self) -> u32 {
        match self {
            MediaBusCode::Sbggr10 => 0x3007,
            MediaBusCode::Sgrbg10 => 0x300a,
            MediaBusCode::Y10 => 0x200a,
        }
    }
}

/// Which format slot a negotiation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatWhich {
    /// Negotiate only; the active mode is untouched.
    Try,
    /// Replace the instance mode.
    Active,
}

/// Result of a format negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NegotiatedFormat {
    /// Width of the chosen mode in pixels.
    pub width: u32,
    /// Height of the chosen mode in lines.
    pub height: u32,
    /// Pixel code on the media bus.
    pub code: MediaBusCode,
}

/// Frame interval as a fraction of a second.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{}/{}", numerator, denominator)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameInterval {
    /// Seconds numerator.
    pub numerator: u32,
    /// Seconds denominator.
    pub denominator: u32,
}

impl FrameInterval {
    /// `1/fps`.
    pub fn from_fps(fps: u32) -> Self {
        Self {
            numerator: 1,
            denominator: fps,
        }
    }
}

/// Opaque identity of a node in the platform firmware description.
#[derive(Debug, Display, From, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareId(String);

impl FirmwareId {
    /// Wrap a firmware node path or name.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identity.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FirmwareId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Name of a live device instance.
#[derive(Debug, Display, From, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceName(String);

impl DeviceName {
    /// Wrap a device instance name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the raw name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeviceName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Streaming state machine states.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StreamState {
    /// Unpowered.
    #[default]
    #[display(fmt = "off")]
    Off,
    /// Powered, chip not yet identified.
    #[display(fmt = "powered-idle")]
    PoweredIdle,
    /// Powered and identified, ready to stream.
    #[display(fmt = "configured")]
    Configured,
    /// Producing frames.
    #[display(fmt = "streaming")]
    Streaming,
}

impl StreamState {
    /// Whether the sensor is powered and identified.
    pub fn is_configured(&self) -> bool {
        matches!(self, StreamState::Configured | StreamState::Streaming)
    }
}

/// Inclusive range of a control together with its step and default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlRange {
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value.
    pub max: i64,
    /// Always 1 for the built-in controls.
    pub step: i64,
    /// Value a fresh control starts with.
    pub default: i64,
}

impl ControlRange {
    /// Range with step 1.
    pub const fn new(min: i64, max: i64, default: i64) -> Self {
        Self {
            min,
            max,
            step: 1,
            default,
        }
    }

    /// Single-valued range used for derived controls.
    pub const fn fixed(value: i64) -> Self {
        Self::new(value, value, value)
    }

    /// Whether `value` lies within `min..=max`.
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Nearest value inside the range.
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max.max(self.min))
    }
}

/// Point-in-time copy of every control value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlSnapshot {
    /// Hz.
    pub link_frequency: i64,
    /// Pixels per second.
    pub pixel_rate: i64,
    /// Pixels.
    pub hblank: i64,
    /// Lines.
    pub vblank: i64,
    /// Lines.
    pub exposure: i64,
    /// Sensor gain units.
    pub analogue_gain: i64,
    /// Sensor gain units.
    pub digital_gain: i64,
    /// Test pattern menu index, 0 when disabled.
    pub test_pattern: i64,
    /// Horizontal mirror.
    pub hflip: bool,
    /// Vertical flip.
    pub vflip: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hardware_id_roundtrip() {
        for kind in [SensorKind::Ov8865, SensorKind::Ov569x, SensorKind::Ov7251] {
            assert_eq!(SensorKind::from_hardware_id(kind.hardware_id()), Some(kind));
        }
        assert!(matches!(
            SensorKind::try_from("INT3472"),
            Err(Error::UnsupportedSensor(_))
        ));
    }

    #[test]
    fn read_only_controls() {
        assert!(ControlId::PixelRate.is_read_only());
        assert!(ControlId::HorizontalBlank.is_read_only());
        assert!(!ControlId::VerticalBlank.is_read_only());
        assert_eq!(format!("{}", ControlId::AnalogueGain), "analogue_gain");
    }

    #[test]
    fn frame_interval_from_fps() {
        let fi = FrameInterval::from_fps(30);
        assert_eq!(format!("{}", fi), "1/30");
    }

    #[test]
    fn control_range_clamp() {
        let r = ControlRange::new(6, 714, 714);
        assert!(r.contains(6));
        assert!(!r.contains(715));
        assert_eq!(r.clamp(900), 714);
        assert_eq!(r.clamp(0), 6);
    }

    #[test]
    fn newtypes_display() {
        let id = FirmwareId::from("\\_SB_.PCI0.CAM1");
        assert_eq!(id.as_str(), "\\_SB_.PCI0.CAM1");
        let name: DeviceName = String::from("INT3472:01").into();
        assert_eq!(format!("{}", name), "INT3472:01");
    }
}
