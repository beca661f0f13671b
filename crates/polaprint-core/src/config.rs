use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_API_BASE, DEFAULT_DPI, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{Error, Result};
use crate::resize::{ResampleFilter, ResizeMode};
use crate::units::Unit;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub resize: ResizeConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Read a TOML config file. Missing sections and keys take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))?;
        if config.resize.dpi == 0 {
            return Err(Error::Config("resize.dpi must be at least 1".into()));
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Scheme and host of the print-ticket service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Initial resize settings of a session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    pub width: f64,
    pub height: f64,
    pub dpi: u32,
    pub unit: Unit,
    pub mode: ResizeMode,
    pub filter: ResampleFilter,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            dpi: DEFAULT_DPI,
            unit: Unit::default(),
            mode: ResizeMode::default(),
            filter: ResampleFilter::default(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory downloads are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}
