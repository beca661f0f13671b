use std::path::PathBuf;

use polaprint_core::config::AppConfig;
use polaprint_core::consts::DEFAULT_API_BASE;
use polaprint_core::resize::{ResampleFilter, ResizeMode};
use polaprint_core::session::Session;
use polaprint_core::units::Unit;

#[test]
fn test_default_config() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.lookup.base_url, DEFAULT_API_BASE);
    assert_eq!(cfg.resize.width, 300.0);
    assert_eq!(cfg.resize.height, 300.0);
    assert_eq!(cfg.resize.dpi, 72);
    assert_eq!(cfg.resize.unit, Unit::Pixels);
    assert_eq!(cfg.resize.mode, ResizeMode::Png);
    assert_eq!(cfg.resize.filter, ResampleFilter::Triangle);
    assert_eq!(cfg.export.output_dir, PathBuf::from("."));
}

#[test]
fn test_empty_toml_is_default() {
    let cfg = AppConfig::from_toml("").unwrap();
    assert_eq!(cfg.lookup.base_url, DEFAULT_API_BASE);
    assert_eq!(cfg.resize.dpi, 72);
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let cfg = AppConfig::from_toml(
        r#"
[resize]
unit = "inches"
mode = "svg"
dpi = 300

[export]
output_dir = "prints"
"#,
    )
    .unwrap();
    assert_eq!(cfg.resize.unit, Unit::Inches);
    assert_eq!(cfg.resize.mode, ResizeMode::Svg);
    assert_eq!(cfg.resize.dpi, 300);
    assert_eq!(cfg.resize.width, 300.0);
    assert_eq!(cfg.export.output_dir, PathBuf::from("prints"));
    assert_eq!(cfg.lookup.base_url, DEFAULT_API_BASE);
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = AppConfig::from_toml("[resize]\nunit = \"furlongs\"\n").unwrap_err();
    assert!(err.to_string().starts_with("Invalid config"));
}

#[test]
fn test_zero_dpi_is_config_error() {
    let err = AppConfig::from_toml("[resize]\ndpi = 0\n").unwrap_err();
    assert!(err.to_string().contains("resize.dpi"));
}

#[test]
fn test_toml_roundtrip_through_file() {
    let mut cfg = AppConfig::default();
    cfg.lookup.base_url = "http://localhost:8080".into();
    cfg.resize.filter = ResampleFilter::Lanczos3;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("polaprint.toml");
    std::fs::write(&path, cfg.to_toml().unwrap()).unwrap();
    let loaded = AppConfig::load(&path).unwrap();

    assert_eq!(loaded.lookup.base_url, "http://localhost:8080");
    assert_eq!(loaded.resize.filter, ResampleFilter::Lanczos3);
}

#[test]
fn test_session_from_config() {
    let cfg = AppConfig::from_toml("[resize]\nwidth = 4\nheight = 6\nunit = \"inches\"\n").unwrap();
    let session = Session::from_config(&cfg.resize);
    assert_eq!(session.width(), 4.0);
    assert_eq!(session.height(), 6.0);
    assert_eq!(session.unit(), Unit::Inches);
}
