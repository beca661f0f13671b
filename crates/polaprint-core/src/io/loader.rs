use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::error::Result;
use crate::io::data_url::DataUrl;

/// Reads a user-selected file into a data URL.
pub trait FileReader {
    fn read_as_data_url(&self, path: &Path) -> Result<DataUrl>;
}

/// [`FileReader`] backed by the local filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read_as_data_url(&self, path: &Path) -> Result<DataUrl> {
        let bytes = std::fs::read(path)?;
        let mime = sniff_mime(&bytes, path);
        debug!(path = %path.display(), bytes = bytes.len(), mime, "Read file");
        Ok(DataUrl::encode(mime, &bytes))
    }
}

/// MIME type from the file's magic bytes, then its extension.
fn sniff_mime(bytes: &[u8], path: &Path) -> &'static str {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream")
}

/// A loaded source image: the data URL it was read as, plus the intrinsic
/// pixel size found when it was decoded.
#[derive(Clone, Debug)]
pub struct SourceImage {
    data_url: DataUrl,
    width: u32,
    height: u32,
}

impl SourceImage {
    /// Decode `data_url` once to validate it and record its natural size.
    pub fn from_data_url(data_url: DataUrl) -> Result<Self> {
        let image = decode_data_url(&data_url)?;
        Ok(Self {
            width: image.width(),
            height: image.height(),
            data_url,
        })
    }

    /// Read and decode an image file.
    pub fn open(reader: &dyn FileReader, path: &Path) -> Result<Self> {
        Self::from_data_url(reader.read_as_data_url(path)?)
    }

    /// Decode into a pixel buffer.
    pub fn decode(&self) -> Result<DynamicImage> {
        decode_data_url(&self.data_url)
    }

    pub fn data_url(&self) -> &DataUrl {
        &self.data_url
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

fn decode_data_url(data_url: &DataUrl) -> Result<DynamicImage> {
    let bytes = data_url.decode_bytes()?;
    Ok(image::load_from_memory(&bytes)?)
}
