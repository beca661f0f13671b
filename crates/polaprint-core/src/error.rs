use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch API data with status {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Data(String),

    #[error("{0}")]
    NoResource(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Unknown or revoked object URL: {0}")]
    UnknownObjectUrl(String),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
