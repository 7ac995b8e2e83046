//! Guide captions rendered as SVG text over the system font set

use log::warn;

use crate::guides::raster::Canvas;
use crate::io::configuration::{CAPTION_FONT_SIZE, CAPTION_OUTLINE_WIDTH};

const CAPTION_FILL: &str = "#ffffff";
const CAPTION_OUTLINE: &str = "#000000";

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// SVG document holding one caption centered on `center_x` with its baseline at `baseline`
///
/// The outline is painted under the fill, so glyphs stay white with a black rim.
pub fn caption_svg(
    canvas_width: usize,
    canvas_height: usize,
    text: &str,
    center_x: f64,
    baseline: f64,
) -> String {
    let text = escape(text);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{canvas_width}" height="{canvas_height}">
<text x="{center_x}" y="{baseline}" text-anchor="middle"
    font-family="Arial, Helvetica, sans-serif" font-weight="bold" font-size="{CAPTION_FONT_SIZE}"
    fill="{CAPTION_FILL}" stroke="{CAPTION_OUTLINE}" stroke-width="{CAPTION_OUTLINE_WIDTH}"
    paint-order="stroke" text-rendering="optimizeSpeed">{text}</text>
</svg>"#
    )
}

/// Draw `text` centered on `center_x`, white with a black outline
///
/// Text is skipped when no usable font is installed.
pub fn draw_caption(canvas: &mut Canvas, text: &str, center_x: f64, baseline: f64) {
    let markup = caption_svg(canvas.width(), canvas.height(), text, center_x, baseline);
    if let Err(error) = canvas.draw_svg(&markup) {
        warn!("caption {text:?} could not be rendered: {error}");
    }
}
