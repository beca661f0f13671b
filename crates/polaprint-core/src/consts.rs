/// Number of digits in a print-ticket code.
pub const CODE_LENGTH: usize = 6;

/// Glyph shown in an empty code cell. A non-breaking space keeps the cell
/// width without printing a placeholder character.
pub const BLANK_CELL_GLYPH: char = '\u{00A0}';

/// Base URL of the print-ticket service.
pub const DEFAULT_API_BASE: &str = "https://polapolarplanet.azurewebsites.net";

/// Default target width (in the current unit) before any image is loaded.
pub const DEFAULT_WIDTH: f64 = 300.0;

/// Default target height (in the current unit) before any image is loaded.
pub const DEFAULT_HEIGHT: f64 = 300.0;

/// Default dots per inch for inch-based sizing.
pub const DEFAULT_DPI: u32 = 72;

/// Largest target area, in pixels, a resize may allocate (16384 x 16384).
pub const MAX_TARGET_PIXELS: u64 = 268_435_456;

/// MIME type of generated PNG output.
pub const PNG_MIME: &str = "image/png";

/// MIME type of generated SVG documents.
pub const SVG_MIME: &str = "image/svg+xml;charset=utf-8";

/// Upper bound on a downloaded original image, in bytes.
pub const MAX_DOWNLOAD_BYTES: u64 = 200 * 1024 * 1024;
