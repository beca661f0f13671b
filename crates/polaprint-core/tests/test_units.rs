use approx::assert_relative_eq;

use polaprint_core::consts::MAX_TARGET_PIXELS;
use polaprint_core::error::Error;
use polaprint_core::units::{convert_to_pixels, TargetSize, Unit};

// ---------------------------------------------------------------------------
// convert_to_pixels
// ---------------------------------------------------------------------------

#[test]
fn test_pixels_pass_through() {
    for v in [1.0, 300.0, 12.75, 4096.0] {
        for dpi in [1, 72, 300, 600] {
            assert_relative_eq!(convert_to_pixels(v, dpi, Unit::Pixels), v);
        }
    }
}

#[test]
fn test_inches_multiply_and_round() {
    assert_relative_eq!(convert_to_pixels(4.0, 300, Unit::Inches), 1200.0);
    assert_relative_eq!(convert_to_pixels(6.0, 300, Unit::Inches), 1800.0);
    // 2.5 * 72 = 180 exactly, 1.33 * 72 = 95.76 -> 96
    assert_relative_eq!(convert_to_pixels(2.5, 72, Unit::Inches), 180.0);
    assert_relative_eq!(convert_to_pixels(1.33, 72, Unit::Inches), 96.0);
    // 0.5 * 3 = 1.5 rounds up
    assert_relative_eq!(convert_to_pixels(0.5, 3, Unit::Inches), 2.0);
}

#[test]
fn test_unit_display() {
    assert_eq!(format!("{}", Unit::Pixels), "pixels");
    assert_eq!(format!("{}", Unit::Inches), "inches");
    assert_eq!(Unit::default(), Unit::Pixels);
}

// ---------------------------------------------------------------------------
// TargetSize
// ---------------------------------------------------------------------------

#[test]
fn test_target_size_from_inches() {
    let size = TargetSize::from_request(4.0, 6.0, 300, Unit::Inches).unwrap();
    assert_eq!(size, TargetSize { width: 1200, height: 1800 });
    assert_eq!(size.to_string(), "1200x1800");
}

#[test]
fn test_target_size_truncates_fractional_pixels() {
    let size = TargetSize::from_request(300.9, 10.2, 72, Unit::Pixels).unwrap();
    assert_eq!(size, TargetSize { width: 300, height: 10 });
}

#[test]
fn test_target_size_ignores_dpi_for_pixels() {
    let a = TargetSize::from_request(640.0, 480.0, 72, Unit::Pixels).unwrap();
    let b = TargetSize::from_request(640.0, 480.0, 600, Unit::Pixels).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_target_size_rejects_empty() {
    for (w, h) in [(0.0, 10.0), (10.0, 0.0), (-5.0, 10.0), (0.4, 10.0), (f64::NAN, 1.0)] {
        let err = TargetSize::from_request(w, h, 72, Unit::Pixels).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }), "{w}x{h}");
    }
}

#[test]
fn test_target_size_rejects_zero_dpi_inches() {
    let err = TargetSize::from_request(4.0, 6.0, 0, Unit::Inches).unwrap_err();
    assert!(matches!(err, Error::InvalidDimensions { .. }));
}

#[test]
fn test_target_size_rejects_oversized_area() {
    // 1000in x 1000in at 300 DPI = 300000 x 300000 px.
    let err = TargetSize::from_request(1000.0, 1000.0, 300, Unit::Inches).unwrap_err();
    assert!(matches!(err, Error::InvalidDimensions { .. }));

    let err = TargetSize::from_request(16385.0, 16384.0, 72, Unit::Pixels).unwrap_err();
    assert!(matches!(err, Error::InvalidDimensions { .. }));
}

#[test]
fn test_target_size_accepts_area_limit() {
    let size = TargetSize::from_request(16384.0, 16384.0, 72, Unit::Pixels).unwrap();
    assert_eq!(size.area(), MAX_TARGET_PIXELS);

    // A long thin strip is fine as long as the area fits.
    let size = TargetSize::from_request(1_000_000.0, 10.0, 72, Unit::Pixels).unwrap();
    assert_eq!(size.area(), 10_000_000);
}
