//! Alignment frames: two tall outlined rectangles one pattern width apart
//!
//! Frames are nudged back onto the canvas when the pattern width would push
//! them off an edge, so the caption reports the separation actually drawn.

use crate::color::base::ColorSample;
use crate::guides::font::draw_caption;
use crate::guides::raster::{Canvas, Rect};
use crate::io::configuration::{
    FRAME_ACCENT_LENGTH, FRAME_CAPTION_Y, FRAME_EDGE_MARGIN, FRAME_MARGIN, FRAME_STROKE_WIDTH,
    FRAME_WIDTH,
};
use crate::synthesis::options::PatternWidth;

/// Outline color of the frames
pub const FRAME_STROKE: ColorSample = ColorSample::new(255, 0, 0);
/// Corner accent color
pub const FRAME_ACCENT: ColorSample = ColorSample::gray(255);

/// Placement of both frames on a particular canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLayout {
    /// Left frame rectangle
    pub left: Rect,
    /// Right frame rectangle
    pub right: Rect,
}

impl FrameLayout {
    /// Center the frames on the canvas and clamp them inside its side margins
    pub fn new(canvas_width: usize, canvas_height: usize, pattern_width: PatternWidth) -> Self {
        let center_x = canvas_width as f64 / 2.0;
        let half_pattern = f64::from(pattern_width.pixels()) / 2.0;
        let half_frame = FRAME_WIDTH / 2.0;
        let max_x = canvas_width as f64 - FRAME_WIDTH - FRAME_EDGE_MARGIN;
        let clamp = |x: f64| x.min(max_x).max(FRAME_EDGE_MARGIN);

        let height = 2.0f64.mul_add(-FRAME_MARGIN, canvas_height as f64);
        let frame = |x: f64| Rect::new(clamp(x), FRAME_MARGIN, FRAME_WIDTH, height);

        Self {
            left: frame(center_x - half_pattern - half_frame),
            right: frame(center_x + half_pattern - half_frame),
        }
    }

    /// Horizontal distance between the frames after clamping
    pub fn separation(&self) -> f64 {
        self.right.x - self.left.x
    }

    /// Whether the canvas is tall enough to hold the frames
    pub fn is_drawable(&self) -> bool {
        self.left.height > 0.0
    }
}

/// Caption printed above the frames
pub fn frames_caption(pattern_width: PatternWidth, layout: &FrameLayout) -> String {
    format!(
        "Align these frames ({pattern_width} pattern, {}px apart)",
        layout.separation().round() as i64
    )
}

fn draw_corner_accents(canvas: &mut Canvas, frame: Rect) {
    let reach = FRAME_ACCENT_LENGTH;
    let thickness = FRAME_STROKE_WIDTH;
    let half = thickness / 2.0;
    let (left, top) = (frame.x - half, frame.y - half);
    let (right, bottom) = (frame.x + frame.width + half, frame.y + frame.height + half);

    for (corner_x, corner_y, dir_x, dir_y) in [
        (left, top, 1.0, 1.0),
        (right, top, -1.0, 1.0),
        (left, bottom, 1.0, -1.0),
        (right, bottom, -1.0, -1.0),
    ] {
        let horizontal_x = if dir_x > 0.0 { corner_x } else { corner_x - reach };
        let vertical_y = if dir_y > 0.0 { corner_y } else { corner_y - reach };
        let arm_y = if dir_y > 0.0 { corner_y } else { corner_y - thickness };
        let arm_x = if dir_x > 0.0 { corner_x } else { corner_x - thickness };

        canvas.fill_rect(Rect::new(horizontal_x, arm_y, reach, thickness), FRAME_ACCENT);
        canvas.fill_rect(Rect::new(arm_x, vertical_y, thickness, reach), FRAME_ACCENT);
    }
}

/// Draw both frames, their accents and the caption
pub fn draw_frames(canvas: &mut Canvas, pattern_width: PatternWidth) {
    let layout = FrameLayout::new(canvas.width(), canvas.height(), pattern_width);

    if layout.is_drawable() {
        for frame in [layout.left, layout.right] {
            canvas.stroke_rect(frame, FRAME_STROKE_WIDTH, FRAME_STROKE);
            draw_corner_accents(canvas, frame);
        }
    }

    let center_x = canvas.width() as f64 / 2.0;
    let caption = frames_caption(pattern_width, &layout);
    draw_caption(canvas, &caption, center_x, FRAME_CAPTION_Y);
}
