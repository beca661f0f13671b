use serde::{Deserialize, Serialize};

use crate::consts::MAX_TARGET_PIXELS;
use crate::error::{Error, Result};

/// Unit the requested width/height are expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Pixels,
    Inches,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pixels => write!(f, "pixels"),
            Self::Inches => write!(f, "inches"),
        }
    }
}

/// Convert a requested dimension to pixels.
///
/// Pixel values pass through unchanged (fractions included); inch values
/// become `round(value * dpi)`. `dpi` is ignored for pixels.
pub fn convert_to_pixels(value: f64, dpi: u32, unit: Unit) -> f64 {
    match unit {
        Unit::Pixels => value,
        Unit::Inches => (value * dpi as f64).round(),
    }
}

/// Whole-pixel size of a raster surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    /// Convert a requested size to whole pixels.
    ///
    /// Fractional pixel values are truncated, as a raster surface does when
    /// its size is assigned. Results below one pixel, or larger than
    /// [`MAX_TARGET_PIXELS`] in area, are rejected.
    pub fn from_request(width: f64, height: f64, dpi: u32, unit: Unit) -> Result<TargetSize> {
        let w = convert_to_pixels(width, dpi, unit);
        let h = convert_to_pixels(height, dpi, unit);

        let invalid = || Error::InvalidDimensions {
            width: w,
            height: h,
        };

        let in_range = |v: f64| v.is_finite() && (1.0..=u32::MAX as f64).contains(&v);
        if !in_range(w) || !in_range(h) {
            return Err(invalid());
        }

        let size = TargetSize {
            width: w.trunc() as u32,
            height: h.trunc() as u32,
        };
        if size.area() > MAX_TARGET_PIXELS {
            return Err(invalid());
        }
        Ok(size)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
