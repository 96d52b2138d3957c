// ovsensor/src/sensor/mode.rs

//! Mode catalogs, nearest-mode search and rate derivations.

use crate::regs::RegisterList;
use crate::types::FrameInterval;
use crate::{Error, Result};

/// One fixed output configuration of a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorMode {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in lines.
    pub height: u32,
    /// Horizontal total size in sensor clocks.
    pub hts: u32,
    /// Default vertical total size in lines.
    pub vts_def: u32,
    /// Smallest vertical total size the mode allows.
    pub vts_min: u32,
    /// Index into the model's link frequency table.
    pub link_freq_index: usize,
    /// Nominal frame rate at `vts_def`.
    pub fps: u32,
    /// Mode-specific exposure default; the maximum is used when absent.
    pub exposure_default: Option<u32>,
    /// Writes selecting the mode.
    pub regs: RegisterList,
}

impl SensorMode {
    /// `1/fps`.
    pub fn frame_interval(&self) -> FrameInterval {
        FrameInterval::from_fps(self.fps)
    }

    /// `vts_min <= vts_def <= vts_max` and the link index is in range.
    pub fn is_consistent(&self, vts_max: u32, link_freqs: usize) -> bool {
        self.vts_min <= self.vts_def
            && self.vts_def <= vts_max
            && self.vts_min >= self.height
            && self.link_freq_index < link_freqs
    }
}

/// Pick the catalog entry nearest to `width`x`height`.
///
/// Distance is `|dw| + |dh|`; ties go to the earlier entry. With `exact`
/// the nearest entry must match both dimensions.
pub fn find_mode(
    catalog: &[SensorMode],
    width: u32,
    height: u32,
    exact: bool,
) -> Result<&SensorMode> {
    let mut best: Option<(&SensorMode, u64)> = None;
    for mode in catalog {
        let dist = u64::from(mode.width.abs_diff(width)) + u64::from(mode.height.abs_diff(height));
        match best {
            Some((_, d)) if d <= dist => {}
            _ => best = Some((mode, dist)),
        }
    }
    match best {
        Some((mode, 0)) => Ok(mode),
        Some((mode, _)) if !exact => Ok(mode),
        _ => Err(Error::NotSupported { width, height }),
    }
}

/// `link_freq * 2 * lanes / bit_depth`, truncating.
pub fn derive_pixel_rate(link_freq: u64, lanes: u32, bit_depth: u32) -> u64 {
    (link_freq * 2 * u64::from(lanes))
        .checked_div(u64::from(bit_depth))
        .unwrap_or(0)
}

/// `floor(hts * pixel_rate / system_clock)`.
pub fn derive_pixels_per_line(hts: u32, pixel_rate: u64, system_clock: u64) -> u64 {
    (u64::from(hts) * pixel_rate)
        .checked_div(system_clock)
        .unwrap_or(0)
}
