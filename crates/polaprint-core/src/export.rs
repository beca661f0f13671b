use std::path::PathBuf;

use chrono::NaiveDateTime;
use tracing::info;

use crate::error::Result;
use crate::io::blob::BlobRegistry;
use crate::io::data_url::DataUrl;
use crate::io::sink::DownloadSink;
use crate::resize::ResizeMode;
use crate::units::{TargetSize, Unit};

/// A resize result held by the session until it is downloaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResizedOutput {
    /// Self-contained PNG data URL.
    Png { data_url: DataUrl, size: TargetSize },
    /// Object URL of an SVG document in the session's [`BlobRegistry`].
    Svg { object_url: String, size: TargetSize },
}

impl ResizedOutput {
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

    /// URL a viewer can load the output from.
    pub fn url(&self) -> &str {
        match self {
            Self::Png { data_url, .. } => data_url.as_str(),
            Self::Svg { object_url, .. } => object_url,
        }
    }
}

/// Build the download name `{YYYY-MM-DD}_{HH-MM-SS}_{W}x{H}_DPI{dpi}`.
///
/// W and H are always in inches. Pixel sizes are divided by `dpi` and shown
/// with two decimals; inch sizes are shown as entered. No extension.
pub fn build_filename(width: f64, height: f64, dpi: u32, unit: Unit, now: NaiveDateTime) -> String {
    let (w, h) = match unit {
        Unit::Inches => (width.to_string(), height.to_string()),
        Unit::Pixels => (
            fixed_2(width / dpi as f64),
            fixed_2(height / dpi as f64),
        ),
    };
    format!(
        "{}_{}_{}x{}_DPI{}",
        now.format("%Y-%m-%d"),
        now.format("%H-%M-%S"),
        w,
        h,
        dpi
    )
}

/// Format with two decimals, rounding exact ties away from zero.
///
/// `{:.2}` rounds ties to even. A binary value sits exactly halfway between
/// two hundredths only when it is an odd multiple of 1/8, so that case is
/// rounded by hand.
fn fixed_2(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if !is_tie {
        return format!("{:.2}", value);
    }

    // |value| * 100 = |eighths| * 12.5, rounded up.
    let hundredths = ((eighths.abs() as u64) * 25 + 1) / 2;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100)
}

/// Write `output` to `sink` as `{filename}.png` or `{filename}.svg`.
///
/// An SVG output's object URL is revoked once written; the caller must not
/// use it again.
pub fn download(
    output: &ResizedOutput,
    blobs: &mut BlobRegistry,
    sink: &mut dyn DownloadSink,
    filename: &str,
) -> Result<PathBuf> {
    let name = format!("{}.{}", filename, output.mode().extension());
    let path = match output {
        ResizedOutput::Png { data_url, .. } => sink.save(&name, &data_url.decode_bytes()?)?,
        ResizedOutput::Svg { object_url, .. } => {
            let path = sink.save(&name, &blobs.get(object_url)?.bytes)?;
            blobs.revoke(object_url);
            path
        }
    };
    info!(file = %name, "Downloaded resized image");
    Ok(path)
}
