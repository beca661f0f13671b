mod raster;
mod svg;

pub use raster::{encode_png, ImageSurface, RasterSurface, ResampleFilter};
pub use svg::build_svg_document;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::consts::{PNG_MIME, SVG_MIME};
use crate::error::Result;
use crate::io::data_url::DataUrl;
use crate::io::loader::SourceImage;
use crate::units::{TargetSize, Unit};

/// Output format of a resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    #[default]
    Png,
    Svg,
}

impl ResizeMode {
    /// File extension of a download in this mode.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

impl std::fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Requested output size and format.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeRequest {
    pub width: f64,
    pub height: f64,
    pub dpi: u32,
    pub unit: Unit,
    pub mode: ResizeMode,
}

impl ResizeRequest {
    pub fn target_size(&self) -> Result<TargetSize> {
        TargetSize::from_request(self.width, self.height, self.dpi, self.unit)
    }
}

/// Result of a resize, before it is handed to the session.
#[derive(Clone, Debug)]
pub enum RenderedOutput {
    /// PNG drawn at the target size.
    Png { data_url: DataUrl, size: TargetSize },
    /// SVG declaring the target size around a PNG at the source's size.
    Svg {
        document: String,
        size: TargetSize,
        raster: (u32, u32),
    },
}

impl RenderedOutput {
    pub fn mode(&self) -> ResizeMode {
        match self {
            Self::Png { .. } => ResizeMode::Png,
            Self::Svg { .. } => ResizeMode::Svg,
        }
    }

    pub fn size(&self) -> TargetSize {
        match self {
            Self::Png { size, .. } | Self::Svg { size, .. } => *size,
        }
    }

    /// MIME type of the document this output downloads as.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Png { .. } => PNG_MIME,
            Self::Svg { .. } => SVG_MIME,
        }
    }
}

/// Resize `source` per `request`.
///
/// PNG mode resamples to the target size. SVG mode keeps the raster at the
/// source's native size and only declares the target size on the wrapper.
pub fn resize(
    surface: &dyn RasterSurface,
    source: &SourceImage,
    request: &ResizeRequest,
) -> Result<RenderedOutput> {
    let size = request.target_size()?;
    let image = source.decode()?;
    debug!(
        source_w = image.width(),
        source_h = image.height(),
        target = %size,
        mode = %request.mode,
        "Resizing"
    );

    let output = match request.mode {
        ResizeMode::Png => {
            let raster = surface.draw(&image, size.width, size.height);
            let data_url = DataUrl::encode(PNG_MIME, &encode_png(&raster)?);
            RenderedOutput::Png { data_url, size }
        }
        ResizeMode::Svg => {
            let raster = surface.draw(&image, image.width(), image.height());
            let png_url = DataUrl::encode(PNG_MIME, &encode_png(&raster)?);
            RenderedOutput::Svg {
                document: build_svg_document(png_url.as_str(), size),
                size,
                raster: raster.dimensions(),
            }
        }
    };

    info!(mode = %output.mode(), size = %size, "Resize complete");
    Ok(output)
}
