mod common;

use polaprint_core::error::Error;
use polaprint_core::export::{build_filename, download, ResizedOutput};
use polaprint_core::io::blob::{Blob, BlobRegistry};
use polaprint_core::io::data_url::DataUrl;
use polaprint_core::io::sink::{DirectorySink, DownloadSink};
use polaprint_core::units::{TargetSize, Unit};

use common::{fixed_now, MemorySink};

const SIZE: TargetSize = TargetSize {
    width: 2,
    height: 2,
};

// ---------------------------------------------------------------------------
// build_filename
// ---------------------------------------------------------------------------

#[test]
fn test_filename_pixels_converted_to_inches() {
    let name = build_filename(1200.0, 600.0, 72, Unit::Pixels, fixed_now());
    assert_eq!(name, "2024-11-02_09-30-15_16.67x8.33_DPI72");
}

#[test]
fn test_filename_inches_as_entered() {
    let name = build_filename(4.0, 6.0, 300, Unit::Inches, fixed_now());
    assert_eq!(name, "2024-11-02_09-30-15_4x6_DPI300");
}

#[test]
fn test_filename_pixel_ties_round_up() {
    let name = build_filename(300.0, 300.0, 96, Unit::Pixels, fixed_now());
    assert_eq!(name, "2024-11-02_09-30-15_3.13x3.13_DPI96");

    let name = build_filename(9.0, 45.0, 72, Unit::Pixels, fixed_now());
    assert_eq!(name, "2024-11-02_09-30-15_0.13x0.63_DPI72");
}

#[test]
fn test_filename_has_no_extension() {
    let name = build_filename(100.0, 100.0, 100, Unit::Pixels, fixed_now());
    assert_eq!(name, "2024-11-02_09-30-15_1.00x1.00_DPI100");
    assert!(!name.ends_with(".png") && !name.ends_with(".svg"));
}

// ---------------------------------------------------------------------------
// download
// ---------------------------------------------------------------------------

#[test]
fn test_download_png_writes_decoded_bytes() {
    let output = ResizedOutput::Png {
        data_url: DataUrl::encode("image/png", b"not-really-png"),
        size: SIZE,
    };
    let mut blobs = BlobRegistry::new();
    let mut sink = MemorySink::default();

    download(&output, &mut blobs, &mut sink, "name").unwrap();

    assert_eq!(sink.files.len(), 1);
    assert_eq!(sink.files[0].0, "name.png");
    assert_eq!(sink.files[0].1, b"not-really-png");
}

#[test]
fn test_download_svg_revokes_object_url() {
    let mut blobs = BlobRegistry::new();
    let object_url = blobs.create_object_url(Blob {
        mime: "image/svg+xml;charset=utf-8".into(),
        bytes: b"<svg/>".to_vec(),
    });
    let output = ResizedOutput::Svg {
        object_url: object_url.clone(),
        size: SIZE,
    };
    let mut sink = MemorySink::default();

    download(&output, &mut blobs, &mut sink, "name").unwrap();

    assert_eq!(sink.files[0].0, "name.svg");
    assert_eq!(sink.files[0].1, b"<svg/>");
    assert_eq!(blobs.live_count(), 0);

    // A revoked URL can't be downloaded twice.
    let err = download(&output, &mut blobs, &mut sink, "name").unwrap_err();
    assert!(matches!(err, Error::UnknownObjectUrl(_)));
    assert_eq!(sink.files.len(), 1);
}

#[test]
fn test_directory_sink_creates_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out").join("prints");
    let mut sink = DirectorySink::new(&nested);

    let path = sink.save("a.png", b"abc").unwrap();

    assert_eq!(path, nested.join("a.png"));
    assert_eq!(std::fs::read(&path).unwrap(), b"abc");
}

#[test]
fn test_resized_output_accessors() {
    let url = DataUrl::encode("image/png", b"x");
    let output = ResizedOutput::Png {
        data_url: url.clone(),
        size: SIZE,
    };
    assert_eq!(output.url(), url.as_str());
    assert_eq!(output.size(), SIZE);
}
