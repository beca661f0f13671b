use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Offscreen surface the source is drawn onto.
pub trait RasterSurface {
    /// Draw `source` scaled to fill a `width` x `height` surface and return
    /// the surface's pixels.
    fn draw(&self, source: &DynamicImage, width: u32, height: u32) -> RgbaImage;
}

/// Resampling kernel used when the drawn size differs from the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Triangle => write!(f, "Bilinear"),
            Self::CatmullRom => write!(f, "Catmull-Rom"),
            Self::Gaussian => write!(f, "Gaussian"),
            Self::Lanczos3 => write!(f, "Lanczos3"),
        }
    }
}

/// CPU surface backed by `image::imageops`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageSurface {
    pub filter: ResampleFilter,
}

impl ImageSurface {
    pub fn new(filter: ResampleFilter) -> Self {
        Self { filter }
    }
}

impl RasterSurface for ImageSurface {
    fn draw(&self, source: &DynamicImage, width: u32, height: u32) -> RgbaImage {
        let rgba = source.to_rgba8();
        // Same size: copy pixels as-is, no resampling pass.
        if rgba.dimensions() == (width, height) {
            return rgba;
        }
        imageops::resize(&rgba, width, height, self.filter.into())
    }
}

/// Encode a raster as PNG bytes.
pub fn encode_png(raster: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    raster.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
