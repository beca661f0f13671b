use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, ValueEnum};
use polaprint_core::config::AppConfig;
use polaprint_core::io::loader::FsReader;
use polaprint_core::io::sink::DirectorySink;
use polaprint_core::resize::{ImageSurface, ResampleFilter, ResizeMode};
use polaprint_core::session::Session;
use polaprint_core::units::Unit;

use crate::summary::{print_output, print_resize_summary};

#[derive(Clone, Copy, ValueEnum)]
pub enum UnitArg {
    Pixels,
    Inches,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Pixels => Unit::Pixels,
            UnitArg::Inches => Unit::Inches,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Png,
    Svg,
}

impl From<ModeArg> for ResizeMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Png => ResizeMode::Png,
            ModeArg::Svg => ResizeMode::Svg,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FilterArg {
    Nearest,
    Bilinear,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterArg> for ResampleFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => ResampleFilter::Nearest,
            FilterArg::Bilinear => ResampleFilter::Triangle,
            FilterArg::CatmullRom => ResampleFilter::CatmullRom,
            FilterArg::Gaussian => ResampleFilter::Gaussian,
            FilterArg::Lanczos3 => ResampleFilter::Lanczos3,
        }
    }
}

/// Size and format options shared by `resize` and `run`.
#[derive(Args)]
pub struct ResizeOptions {
    /// Target width in the chosen unit (default: the image's pixel width)
    #[arg(long)]
    pub width: Option<f64>,

    /// Target height in the chosen unit (default: the image's pixel height)
    #[arg(long)]
    pub height: Option<f64>,

    /// Unit of --width and --height
    #[arg(long, value_enum)]
    pub unit: Option<UnitArg>,

    /// Dots per inch, used for inch sizes and the file name
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub dpi: Option<u32>,

    /// Output format
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Resampling filter for PNG output
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ResizeOptions {
    /// Apply the flags that were given on top of the session's settings.
    fn apply(&self, session: &mut Session) {
        if let Some(unit) = self.unit {
            session.set_unit(unit.into());
        }
        if let Some(dpi) = self.dpi {
            session.set_dpi(dpi);
        }
        if let Some(mode) = self.mode {
            session.set_mode(mode.into());
        }
        if let Some(width) = self.width {
            session.set_width(width);
        }
        if let Some(height) = self.height {
            session.set_height(height);
        }
    }
}

#[derive(Args)]
pub struct ResizeArgs {
    /// Input image file
    pub file: PathBuf,

    #[command(flatten)]
    pub options: ResizeOptions,
}

pub fn run(args: &ResizeArgs, config: &AppConfig) -> Result<()> {
    let mut session = Session::from_config(&config.resize);
    resize_file(&mut session, &args.file, &args.options, config)
}

/// Load `file` into the session, resize it and download the result.
pub(super) fn resize_file(
    session: &mut Session,
    file: &Path,
    options: &ResizeOptions,
    config: &AppConfig,
) -> Result<()> {
    session
        .load_source(&FsReader, file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    // Loading resets width/height to the image size; flags win over that.
    options.apply(session);

    let filter = options.filter.map(Into::into).unwrap_or(config.resize.filter);
    print_resize_summary(session, filter);

    let output = session
        .resize(&ImageSurface::new(filter))
        .context("Resize failed")?
        .cloned()
        .context("No image loaded")?;

    let dir = options
        .output
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());
    let saved = session
        .download(&mut DirectorySink::new(dir), Local::now().naive_local())
        .context("Download failed")?;

    print_output(&output, &saved);
    println!();
    Ok(())
}
