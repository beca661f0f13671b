use crate::units::TargetSize;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Wrap a PNG data URL in an SVG document whose `width`, `height` and
/// `viewBox` are `size`. The embedded image stretches to fill the viewBox,
/// so the viewer does the scaling.
pub fn build_svg_document(png_data_url: &str, size: TargetSize) -> String {
    let TargetSize { width, height } = size;
    format!(
        "<svg xmlns=\"{SVG_NS}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n  \
         <image href=\"{png_data_url}\" width=\"100%\" height=\"100%\" />\n\
         </svg>\n"
    )
}
