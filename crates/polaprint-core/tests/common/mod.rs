#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use image::{ImageFormat, Rgba, RgbaImage};

use polaprint_core::error::{Error, Result};
use polaprint_core::io::data_url::DataUrl;
use polaprint_core::io::http::{HttpResponse, HttpTransport};
use polaprint_core::io::loader::{FileReader, SourceImage};
use polaprint_core::io::sink::DownloadSink;

/// Build a `w` x `h` RGBA gradient so resampling changes are visible.
pub fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        Rgba([
            (x * 255 / w.max(1)) as u8,
            (y * 255 / h.max(1)) as u8,
            128,
            255,
        ])
    })
}

pub fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).expect("encode png");
    buf.into_inner()
}

/// A decoded source image of the given size.
pub fn source(w: u32, h: u32) -> SourceImage {
    let url = DataUrl::encode("image/png", &png_bytes(&gradient(w, h)));
    SourceImage::from_data_url(url).expect("decode source")
}

/// Write a gradient PNG into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, w: u32, h: u32) -> PathBuf {
    let path = dir.join(name);
    gradient(w, h).save(&path).expect("write png");
    path
}

pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 2)
        .unwrap()
        .and_hms_opt(9, 30, 15)
        .unwrap()
}

/// Transport answering from a fixed table and recording every request.
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, HttpResponse>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, url: &str, status: u16, body: &[u8]) -> Self {
        self.routes.insert(
            url.to_string(),
            HttpResponse {
                status,
                body: body.to_vec(),
            },
        );
        self
    }
}

impl HttpTransport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(url.to_string());
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Transport(format!("no route for {url}")))
    }
}

/// Sink keeping downloads in memory.
#[derive(Default)]
pub struct MemorySink {
    pub files: Vec<(String, Vec<u8>)>,
}

impl DownloadSink for MemorySink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.files.push((filename.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(filename))
    }
}

/// Reader serving a prepared data URL regardless of path.
pub struct StaticReader(pub DataUrl);

impl FileReader for StaticReader {
    fn read_as_data_url(&self, _path: &Path) -> Result<DataUrl> {
        Ok(self.0.clone())
    }
}
