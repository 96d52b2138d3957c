// ovsensor/src/sensor/controls.rs

//! Interdependent exposure, gain and blanking controls.
//!
//! Horizontal blanking, pixel rate and link frequency follow from the
//! current mode and are read-only. Vertical blanking bounds the exposure:
//! every accepted vblank change recomputes the exposure range first and
//! pulls a now-too-large exposure down to the new maximum.

use crate::sensor::mode::{SensorMode, derive_pixel_rate, derive_pixels_per_line};
use crate::types::{ControlId, ControlRange, ControlSnapshot};
use crate::{Error, Result};

/// Model-specific control bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlLimits {
    /// Shortest exposure in lines.
    pub exposure_min: i64,
    /// Lines between the frame length and the longest exposure.
    pub exposure_margin: i64,
    /// Analogue gain range and default.
    pub analogue_gain: ControlRange,
    /// Digital gain range and default.
    pub digital_gain: ControlRange,
    /// Test pattern menu; entry 0 disables the pattern.
    pub test_patterns: &'static [&'static str],
    /// Whether the readout can be mirrored and flipped. Without it both
    /// flip controls are pinned to 0.
    pub flip: bool,
}

/// CSI-2 link and frame timing parameters of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorTiming {
    /// CSI-2 data lanes.
    pub lanes: u32,
    /// Bits per pixel on the link.
    pub bit_depth: u32,
    /// Clock `hts` is counted in. `None` means the pixel clock itself.
    pub system_clock: Option<u64>,
    /// Largest programmable frame length in lines.
    pub vts_max: u32,
}

/// Current control values of one sensor, kept consistent with its mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSet {
    limits: ControlLimits,
    timing: SensorTiming,
    link_freqs: &'static [u64],
    width: u32,
    height: u32,
    link_freq: i64,
    pixel_rate: i64,
    hblank: i64,
    vblank: i64,
    vblank_range: ControlRange,
    exposure: i64,
    exposure_range: ControlRange,
    analogue_gain: i64,
    digital_gain: i64,
    test_pattern: i64,
    hflip: bool,
    vflip: bool,
}

impl ControlSet {
    /// Controls pushed to hardware at stream start, in this order.
    pub const HARDWARE_ORDER: [ControlId; 7] = [
        ControlId::VerticalBlank,
        ControlId::AnalogueGain,
        ControlId::DigitalGain,
        ControlId::Exposure,
        ControlId::TestPattern,
        ControlId::HorizontalFlip,
        ControlId::VerticalFlip,
    ];

    /// Controls for `mode`, every writable value at its default.
    pub fn new(
        limits: ControlLimits,
        timing: SensorTiming,
        link_freqs: &'static [u64],
        mode: &SensorMode,
    ) -> Self {
        let mut set = Self {
            limits,
            timing,
            link_freqs,
            width: 0,
            height: 0,
            link_freq: 0,
            pixel_rate: 0,
            hblank: 0,
            vblank: 0,
            vblank_range: ControlRange::fixed(0),
            exposure: 0,
            exposure_range: ControlRange::fixed(0),
            analogue_gain: limits.analogue_gain.default,
            digital_gain: limits.digital_gain.default,
            test_pattern: 0,
            hflip: false,
            vflip: false,
        };
        set.set_mode(mode);
        set.exposure = set.exposure_range.default;
        set
    }

    /// Re-derive every mode-dependent value. Vertical blanking returns to
    /// the mode default and exposure is clamped into the new range.
    pub fn set_mode(&mut self, mode: &SensorMode) {
        self.width = mode.width;
        self.height = mode.height;

        let link_freq = self
            .link_freqs
            .get(mode.link_freq_index)
            .copied()
            .unwrap_or_default();
        let pixel_rate = derive_pixel_rate(link_freq, self.timing.lanes, self.timing.bit_depth);
        let system_clock = self.timing.system_clock.unwrap_or(pixel_rate);
        let ppl = derive_pixels_per_line(mode.hts, pixel_rate, system_clock);
        self.link_freq = link_freq as i64;
        self.pixel_rate = pixel_rate as i64;
        self.hblank = (ppl as i64 - i64::from(mode.width)).max(0);

        let height = i64::from(mode.height);
        self.vblank_range = ControlRange::new(
            i64::from(mode.vts_min) - height,
            i64::from(self.timing.vts_max) - height,
            i64::from(mode.vts_def) - height,
        );
        self.vblank = self.vblank_range.default;

        let max = self.exposure_max(self.vblank);
        let default = mode.exposure_default.map_or(max, i64::from);
        self.update_exposure_range(default);
    }

    fn exposure_max(&self, vblank: i64) -> i64 {
        (i64::from(self.height) + vblank - self.limits.exposure_margin).max(self.limits.exposure_min)
    }

    // Returns whether the held exposure had to move.
    fn update_exposure_range(&mut self, default: i64) -> bool {
        let min = self.limits.exposure_min;
        let max = self.exposure_max(self.vblank);
        self.exposure_range = ControlRange::new(min, max, default.clamp(min, max));
        let clamped = self.exposure_range.clamp(self.exposure);
        let moved = clamped != self.exposure;
        self.exposure = clamped;
        moved
    }

    /// Accept a new vertical blank. Returns `true` when the exposure was
    /// clamped to the tightened range.
    pub fn set_vblank(&mut self, vblank: i64) -> Result<bool> {
        check(ControlId::VerticalBlank, &self.vblank_range, vblank)?;
        self.vblank = vblank;
        let default = self.exposure_range.default;
        Ok(self.update_exposure_range(default))
    }

    /// Exposure in lines, within the range the current vblank allows.
    pub fn set_exposure(&mut self, exposure: i64) -> Result<()> {
        check(ControlId::Exposure, &self.exposure_range, exposure)?;
        self.exposure = exposure;
        Ok(())
    }

    /// Analogue gain within the model's range.
    pub fn set_analogue_gain(&mut self, gain: i64) -> Result<()> {
        check(ControlId::AnalogueGain, &self.limits.analogue_gain, gain)?;
        self.analogue_gain = gain;
        Ok(())
    }

    /// Digital gain within the model's range.
    pub fn set_digital_gain(&mut self, gain: i64) -> Result<()> {
        check(ControlId::DigitalGain, &self.limits.digital_gain, gain)?;
        self.digital_gain = gain;
        Ok(())
    }

    /// Test pattern menu index; 0 disables the pattern.
    pub fn set_test_pattern(&mut self, index: i64) -> Result<()> {
        check(ControlId::TestPattern, &self.test_pattern_range(), index)?;
        self.test_pattern = index;
        Ok(())
    }

    /// Horizontal mirror, 0 or 1.
    pub fn set_hflip(&mut self, on: i64) -> Result<()> {
        check(ControlId::HorizontalFlip, &self.flip_range(), on)?;
        self.hflip = on != 0;
        Ok(())
    }

    /// Vertical flip, 0 or 1.
    pub fn set_vflip(&mut self, on: i64) -> Result<()> {
        check(ControlId::VerticalFlip, &self.flip_range(), on)?;
        self.vflip = on != 0;
        Ok(())
    }

    /// Set any writable control. Returns every control whose value changed
    /// as a consequence, the written one first.
    pub fn set(&mut self, id: ControlId, value: i64) -> Result<Vec<ControlId>> {
        match id {
            ControlId::LinkFrequency | ControlId::PixelRate | ControlId::HorizontalBlank => {
                Err(Error::ReadOnly(id))
            }
            ControlId::VerticalBlank => {
                if self.set_vblank(value)? {
                    Ok(vec![ControlId::VerticalBlank, ControlId::Exposure])
                } else {
                    Ok(vec![ControlId::VerticalBlank])
                }
            }
            ControlId::Exposure => self.set_exposure(value).map(|_| vec![id]),
            ControlId::AnalogueGain => self.set_analogue_gain(value).map(|_| vec![id]),
            ControlId::DigitalGain => self.set_digital_gain(value).map(|_| vec![id]),
            ControlId::TestPattern => self.set_test_pattern(value).map(|_| vec![id]),
            ControlId::HorizontalFlip => self.set_hflip(value).map(|_| vec![id]),
            ControlId::VerticalFlip => self.set_vflip(value).map(|_| vec![id]),
        }
    }

    /// Current value of `id`; flips read as 0 or 1.
    pub fn value(&self, id: ControlId) -> i64 {
        match id {
            ControlId::LinkFrequency => self.link_freq,
            ControlId::PixelRate => self.pixel_rate,
            ControlId::HorizontalBlank => self.hblank,
            ControlId::VerticalBlank => self.vblank,
            ControlId::Exposure => self.exposure,
            ControlId::AnalogueGain => self.analogue_gain,
            ControlId::DigitalGain => self.digital_gain,
            ControlId::TestPattern => self.test_pattern,
            ControlId::HorizontalFlip => i64::from(self.hflip),
            ControlId::VerticalFlip => i64::from(self.vflip),
        }
    }

    /// Range of `id` under the current mode.
    pub fn range(&self, id: ControlId) -> ControlRange {
        match id {
            ControlId::LinkFrequency => ControlRange::fixed(self.link_freq),
            ControlId::PixelRate => ControlRange::fixed(self.pixel_rate),
            ControlId::HorizontalBlank => ControlRange::fixed(self.hblank),
            ControlId::VerticalBlank => self.vblank_range,
            ControlId::Exposure => self.exposure_range,
            ControlId::AnalogueGain => self.limits.analogue_gain,
            ControlId::DigitalGain => self.limits.digital_gain,
            ControlId::TestPattern => self.test_pattern_range(),
            ControlId::HorizontalFlip | ControlId::VerticalFlip => self.flip_range(),
        }
    }

    fn flip_range(&self) -> ControlRange {
        if self.limits.flip {
            ControlRange::new(0, 1, 0)
        } else {
            ControlRange::fixed(0)
        }
    }

    fn test_pattern_range(&self) -> ControlRange {
        let last = self.limits.test_patterns.len().saturating_sub(1) as i64;
        ControlRange::new(0, last, 0)
    }

    /// Test pattern menu entries.
    pub fn test_pattern_names(&self) -> &'static [&'static str] {
        self.limits.test_patterns
    }

    /// Height of the mode the controls were derived for.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width of the mode the controls were derived for.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Every value at once.
    pub fn snapshot(&self) -> ControlSnapshot {
        ControlSnapshot {
            link_frequency: self.link_freq,
            pixel_rate: self.pixel_rate,
            hblank: self.hblank,
            vblank: self.vblank,
            exposure: self.exposure,
            analogue_gain: self.analogue_gain,
            digital_gain: self.digital_gain,
            test_pattern: self.test_pattern,
            hflip: self.hflip,
            vflip: self.vflip,
        }
    }
}

fn check(control: ControlId, range: &ControlRange, value: i64) -> Result<()> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            control,
            value,
            min: range.min,
            max: range.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regs::RegisterList;

    const LINKS: &[u64] = &[360_000_000];

    fn limits() -> ControlLimits {
        ControlLimits {
            exposure_min: 6,
            exposure_margin: 6,
            analogue_gain: ControlRange::new(128, 2047, 128),
            digital_gain: ControlRange::new(0, 4095, 1024),
            test_patterns: &["Disabled", "Color Bar"],
            flip: true,
        }
    }

    fn timing() -> SensorTiming {
        SensorTiming {
            lanes: 4,
            bit_depth: 10,
            system_clock: None,
            vts_max: 0x7fff,
        }
    }

    fn vga() -> SensorMode {
        SensorMode {
            width: 640,
            height: 480,
            hts: 1350,
            vts_def: 720,
            vts_min: 720,
            link_freq_index: 0,
            fps: 30,
            exposure_default: None,
            regs: RegisterList::empty("vga"),
        }
    }

    #[test]
    fn defaults_follow_mode() {
        let c = ControlSet::new(limits(), timing(), LINKS, &vga());
        assert_eq!(c.value(ControlId::VerticalBlank), 240);
        assert_eq!(c.range(ControlId::Exposure).max, 714);
        assert_eq!(c.value(ControlId::Exposure), 714);
        assert_eq!(c.value(ControlId::HorizontalBlank), 1350 - 640);
        assert_eq!(c.value(ControlId::PixelRate), 288_000_000);
        assert_eq!(c.value(ControlId::DigitalGain), 1024);
    }

    #[test]
    fn vblank_shrink_clamps_exposure() {
        let mut mode = vga();
        mode.vts_min = 500;
        let mut c = ControlSet::new(limits(), timing(), LINKS, &mode);
        c.set_exposure(700).unwrap();
        let changed = c.set(ControlId::VerticalBlank, 100).unwrap();
        assert_eq!(changed, vec![ControlId::VerticalBlank, ControlId::Exposure]);
        assert_eq!(c.range(ControlId::Exposure).max, 480 + 100 - 6);
        assert_eq!(c.value(ControlId::Exposure), 574);
    }

    #[test]
    fn vblank_growth_keeps_exposure() {
        let mut c = ControlSet::new(limits(), timing(), LINKS, &vga());
        c.set_exposure(300).unwrap();
        assert_eq!(c.set(ControlId::VerticalBlank, 1000).unwrap(), vec![ControlId::VerticalBlank]);
        assert_eq!(c.value(ControlId::Exposure), 300);
        assert_eq!(c.range(ControlId::Exposure).max, 1474);
    }

    #[test]
    fn rejects_out_of_range() {
        let mut c = ControlSet::new(limits(), timing(), LINKS, &vga());
        assert!(matches!(
            c.set_exposure(715),
            Err(Error::OutOfRange {
                control: ControlId::Exposure,
                max: 714,
                ..
            })
        ));
        assert!(c.set_vblank(239).is_err());
        assert!(c.set_vblank(0x7fff - 480 + 1).is_err());
        assert!(c.set_analogue_gain(127).is_err());
        assert!(c.set_test_pattern(2).is_err());
        // nothing moved
        assert_eq!(c.value(ControlId::VerticalBlank), 240);
        assert_eq!(c.value(ControlId::AnalogueGain), 128);
    }

    #[test]
    fn read_only_controls_reject_writes() {
        let mut c = ControlSet::new(limits(), timing(), LINKS, &vga());
        assert!(matches!(
            c.set(ControlId::HorizontalBlank, 10),
            Err(Error::ReadOnly(ControlId::HorizontalBlank))
        ));
        assert!(matches!(
            c.set(ControlId::PixelRate, 10),
            Err(Error::ReadOnly(_))
        ));
    }

    #[test]
    fn mode_change_resets_vblank_and_clamps_exposure() {
        let mut c = ControlSet::new(limits(), timing(), LINKS, &vga());
        c.set_vblank(2000).unwrap();
        c.set_exposure(2400).unwrap();
        c.set_mode(&vga());
        assert_eq!(c.value(ControlId::VerticalBlank), 240);
        assert_eq!(c.value(ControlId::Exposure), 714);
    }

    #[test]
    fn flips_are_binary_and_survive_mode_change() {
        let mut c = ControlSet::new(limits(), timing(), LINKS, &vga());
        assert_eq!(c.range(ControlId::VerticalFlip), ControlRange::new(0, 1, 0));
        assert_eq!(c.set(ControlId::HorizontalFlip, 1).unwrap(), vec![ControlId::HorizontalFlip]);
        assert!(c.set(ControlId::VerticalFlip, 2).is_err());
        c.set_mode(&vga());
        assert_eq!(c.value(ControlId::HorizontalFlip), 1);
        assert_eq!(c.value(ControlId::VerticalFlip), 0);
        assert!(c.snapshot().hflip);
    }

    #[test]
    fn flips_pinned_without_support() {
        let no_flip = ControlLimits {
            flip: false,
            ..limits()
        };
        let mut c = ControlSet::new(no_flip, timing(), LINKS, &vga());
        assert_eq!(c.range(ControlId::HorizontalFlip), ControlRange::fixed(0));
        assert!(matches!(
            c.set(ControlId::HorizontalFlip, 1),
            Err(Error::OutOfRange { max: 0, .. })
        ));
        c.set(ControlId::HorizontalFlip, 0).unwrap();
    }

    #[test]
    fn explicit_system_clock_scales_hblank() {
        let t = SensorTiming {
            system_clock: Some(144_000_000),
            ..timing()
        };
        let c = ControlSet::new(limits(), t, LINKS, &vga());
        // 1350 * 288 MHz / 144 MHz - 640
        assert_eq!(c.value(ControlId::HorizontalBlank), 2700 - 640);
    }
}
