use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::code::{render_cells, sanitize_code, CodeCell};
use crate::config::ResizeConfig;
use crate::consts::SVG_MIME;
use crate::error::{Error, Result};
use crate::export::{self, build_filename, ResizedOutput};
use crate::io::blob::{Blob, BlobRegistry};
use crate::io::http::HttpTransport;
use crate::io::loader::{FileReader, SourceImage};
use crate::io::sink::DownloadSink;
use crate::lookup::{original_filename, LookupClient};
use crate::resize::{resize, RasterSurface, RenderedOutput, ResizeMode, ResizeRequest};
use crate::units::Unit;

/// State of one editing session, and the actions that change it.
///
/// The resized output always comes from the current source image: loading a
/// new source discards it, and discarding an SVG output revokes its object
/// URL.
#[derive(Debug)]
pub struct Session {
    source_image: Option<SourceImage>,
    resized_output: Option<ResizedOutput>,
    mode: ResizeMode,
    unit: Unit,
    width: f64,
    height: f64,
    dpi: u32,
    code: String,
    origin_image_url: Option<String>,
    blobs: BlobRegistry,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&ResizeConfig::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ResizeConfig) -> Self {
        Self {
            source_image: None,
            resized_output: None,
            mode: config.mode,
            unit: config.unit,
            width: config.width,
            height: config.height,
            dpi: config.dpi,
            code: String::new(),
            origin_image_url: None,
            blobs: BlobRegistry::new(),
        }
    }

    // -- code ---------------------------------------------------------------

    /// Store `raw` with every non-digit removed, truncated to six digits.
    pub fn set_code(&mut self, raw: &str) {
        self.code = sanitize_code(raw);
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn code_cells(&self) -> impl Iterator<Item = CodeCell> + '_ {
        render_cells(&self.code)
    }

    // -- remote lookup ------------------------------------------------------

    /// Look up the origin image URL for the current code.
    ///
    /// On failure the previously known URL (if any) is left untouched.
    pub fn lookup<T: HttpTransport>(&mut self, client: &LookupClient<T>) -> Result<&str> {
        let url = client.fetch_origin_url(&self.code)?;
        Ok(self.origin_image_url.insert(url).as_str())
    }

    pub fn origin_image_url(&self) -> Option<&str> {
        self.origin_image_url.as_deref()
    }

    /// Download the original image found by [`Session::lookup`].
    pub fn save_original<T: HttpTransport>(
        &self,
        client: &LookupClient<T>,
        sink: &mut dyn DownloadSink,
    ) -> Result<PathBuf> {
        let url = self.origin_image_url.as_deref().ok_or_else(|| {
            Error::NoResource("No originImageUrl available to open".into())
        })?;
        let bytes = client.fetch_original(url)?;
        sink.save(&original_filename(url), &bytes)
    }

    // -- source image -------------------------------------------------------

    /// Load an image file as the new source.
    ///
    /// Width and height are reset to the image's intrinsic pixel size and any
    /// previous resize result is discarded. Returns that size.
    pub fn load_source(&mut self, reader: &dyn FileReader, path: &Path) -> Result<(u32, u32)> {
        let source = SourceImage::open(reader, path)?;
        Ok(self.set_source(source))
    }

    /// Replace the source image. See [`Session::load_source`].
    pub fn set_source(&mut self, source: SourceImage) -> (u32, u32) {
        self.discard_output();
        let size = (source.width(), source.height());
        self.width = size.0 as f64;
        self.height = size.1 as f64;
        self.source_image = Some(source);
        info!(width = size.0, height = size.1, "Source image loaded");
        size
    }

    pub fn source_image(&self) -> Option<&SourceImage> {
        self.source_image.as_ref()
    }

    // -- settings -----------------------------------------------------------

    pub fn mode(&self) -> ResizeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ResizeMode) {
        self.mode = mode;
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Change the unit. Width, height and DPI keep their numbers.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    pub fn set_dpi(&mut self, dpi: u32) {
        self.dpi = dpi;
    }

    pub fn request(&self) -> ResizeRequest {
        ResizeRequest {
            width: self.width,
            height: self.height,
            dpi: self.dpi,
            unit: self.unit,
            mode: self.mode,
        }
    }

    // -- resize / export ----------------------------------------------------

    /// Resize the source with the current settings.
    ///
    /// Does nothing and returns `Ok(None)` when no source is loaded.
    pub fn resize(&mut self, surface: &dyn RasterSurface) -> Result<Option<&ResizedOutput>> {
        let Some(source) = self.source_image.as_ref() else {
            debug!("Resize requested without a source image");
            return Ok(None);
        };

        let rendered = resize(surface, source, &self.request())?;
        self.discard_output();

        let output = match rendered {
            RenderedOutput::Png { data_url, size } => ResizedOutput::Png { data_url, size },
            RenderedOutput::Svg { document, size, .. } => {
                let object_url = self.blobs.create_object_url(Blob {
                    mime: SVG_MIME.to_string(),
                    bytes: document.into_bytes(),
                });
                ResizedOutput::Svg { object_url, size }
            }
        };
        let output = self.resized_output.insert(output);
        Ok(Some(&*output))
    }

    pub fn resized_output(&self) -> Option<&ResizedOutput> {
        self.resized_output.as_ref()
    }

    /// Download name for the current settings at `now`, without extension.
    pub fn filename(&self, now: NaiveDateTime) -> String {
        build_filename(self.width, self.height, self.dpi, self.unit, now)
    }

    /// Write the resized output to `sink`.
    ///
    /// Fails with [`Error::NoResource`] and writes nothing when there is no
    /// resized output. An SVG output is consumed by the download.
    pub fn download(&mut self, sink: &mut dyn DownloadSink, now: NaiveDateTime) -> Result<PathBuf> {
        let filename = self.filename(now);
        let output = self.resized_output.as_ref().ok_or_else(|| {
            Error::NoResource("No resized image available to download".into())
        })?;

        let path = export::download(output, &mut self.blobs, sink, &filename)?;
        if output.mode() == ResizeMode::Svg {
            self.resized_output = None;
        }
        Ok(path)
    }

    /// Object URLs still held by this session.
    pub fn blobs(&self) -> &BlobRegistry {
        &self.blobs
    }

    /// Look up the SVG document behind an output's object URL.
    pub fn svg_document(&self) -> Option<&str> {
        match self.resized_output.as_ref()? {
            ResizedOutput::Svg { object_url, .. } => self
                .blobs
                .get(object_url)
                .ok()
                .and_then(|blob| std::str::from_utf8(&blob.bytes).ok()),
            ResizedOutput::Png { .. } => None,
        }
    }

    fn discard_output(&mut self) {
        if let Some(ResizedOutput::Svg { object_url, .. }) = self.resized_output.take() {
            self.blobs.revoke(&object_url);
        }
    }
}
