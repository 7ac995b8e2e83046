//! Alignment dots: two red circles one pattern width apart

use crate::color::base::ColorSample;
use crate::guides::font::draw_caption;
use crate::guides::raster::{Canvas, Point};
use crate::io::configuration::{CAPTION_OFFSET, DOT_RADIUS, DOT_STROKE_WIDTH, DOT_Y};
use crate::synthesis::options::PatternWidth;

/// Fill color of the dots
pub const DOT_FILL: ColorSample = ColorSample::new(255, 0, 0);
/// Ring color of the dots
pub const DOT_STROKE: ColorSample = ColorSample::gray(255);

/// Centers of the left and right dots on a canvas `canvas_width` wide
pub fn dot_centers(canvas_width: usize, pattern_width: PatternWidth) -> [Point; 2] {
    let center_x = canvas_width as f64 / 2.0;
    let half = f64::from(pattern_width.pixels()) / 2.0;
    [
        Point::new(center_x - half, DOT_Y),
        Point::new(center_x + half, DOT_Y),
    ]
}

/// Caption printed under the dots
pub fn dots_caption(pattern_width: PatternWidth) -> String {
    format!("Align these dots ({pattern_width} apart)")
}

/// Draw both dots and their caption
pub fn draw_dots(canvas: &mut Canvas, pattern_width: PatternWidth) {
    for center in dot_centers(canvas.width(), pattern_width) {
        canvas.fill_circle(center, DOT_RADIUS, DOT_FILL);
        canvas.stroke_circle(center, DOT_RADIUS, DOT_STROKE_WIDTH, DOT_STROKE);
    }

    let center_x = canvas.width() as f64 / 2.0;
    draw_caption(canvas, &dots_caption(pattern_width), center_x, DOT_Y + CAPTION_OFFSET);
}
