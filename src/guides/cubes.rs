//! Alignment cubes: two small perspective cubes one pattern width apart
//!
//! Each eye's cube is skewed horizontally in opposite directions to fake the
//! slight perspective difference between the eyes. Cross-eyed viewing swaps
//! which eye sees which cube, so the skew flips with it.

use crate::color::base::ColorSample;
use crate::guides::font::draw_caption;
use crate::guides::raster::{Canvas, Point};
use crate::io::configuration::{
    CAPTION_OFFSET, CUBE_EYE_SKEW, CUBE_SIZE, CUBE_STROKE_WIDTH, CUBE_Y,
};
use crate::synthesis::options::{PatternWidth, ViewingMode};

/// Which eye a cube is drawn for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eye {
    /// Cube drawn on the left
    Left,
    /// Cube drawn on the right
    Right,
}

impl Eye {
    /// Horizontal skew in cube units, before the 0.1 damping factor
    pub const fn skew(self, mode: ViewingMode) -> f64 {
        let skew = match self {
            Self::Left => -CUBE_EYE_SKEW,
            Self::Right => CUBE_EYE_SKEW,
        };
        match mode {
            ViewingMode::Parallel => skew,
            ViewingMode::CrossEyed => -skew,
        }
    }
}

/// Unit cube corners, back face first
pub const CUBE_VERTICES: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Visible faces as vertex indices with their fill, painted in order
pub const CUBE_FACES: [([usize; 4], ColorSample); 3] = [
    ([0, 1, 2, 3], ColorSample::gray(0x66)),
    ([1, 5, 6, 2], ColorSample::gray(0x99)),
    ([3, 2, 6, 7], ColorSample::gray(0xCC)),
];

/// Outline color of every face
pub const CUBE_EDGE: ColorSample = ColorSample::gray(0x33);

/// Project the cube's corners around `center` for one eye
pub fn project_cube(center: Point, size: f64, eye: Eye, mode: ViewingMode) -> [Point; 8] {
    let scale = size / 2.0;
    let skew = eye.skew(mode) * 0.1;
    CUBE_VERTICES.map(|[vx, vy, vz]| {
        let perspective = 1.0 / vz.mul_add(0.1, 1.0);
        Point::new(
            ((vx + skew) * scale).mul_add(perspective, center.x),
            (vy * scale).mul_add(perspective, center.y),
        )
    })
}

/// Anchor points of the left and right cubes
pub fn cube_centers(canvas_width: usize, pattern_width: PatternWidth) -> [Point; 2] {
    let center_x = canvas_width as f64 / 2.0;
    let half = f64::from(pattern_width.pixels()) / 2.0;
    [
        Point::new(center_x - half, CUBE_Y),
        Point::new(center_x + half, CUBE_Y),
    ]
}

/// Caption printed under the cubes
pub fn cubes_caption(pattern_width: PatternWidth) -> String {
    format!("Align these cubes ({pattern_width} apart)")
}

fn draw_cube(canvas: &mut Canvas, center: Point, eye: Eye, mode: ViewingMode) {
    let projected = project_cube(center, CUBE_SIZE, eye, mode);
    for (indices, fill) in CUBE_FACES {
        let face = indices.map(|index| {
            projected
                .get(index)
                .copied()
                .unwrap_or(center)
        });
        canvas.fill_polygon(&face, fill);
        canvas.stroke_polygon(&face, CUBE_STROKE_WIDTH, CUBE_EDGE);
    }
}

/// Draw both cubes and their caption
pub fn draw_cubes(canvas: &mut Canvas, pattern_width: PatternWidth, mode: ViewingMode) {
    let [left, right] = cube_centers(canvas.width(), pattern_width);
    draw_cube(canvas, left, Eye::Left, mode);
    draw_cube(canvas, right, Eye::Right, mode);

    let center_x = canvas.width() as f64 / 2.0;
    let baseline = CUBE_Y + CUBE_SIZE + CAPTION_OFFSET;
    draw_caption(canvas, &cubes_caption(pattern_width), center_x, baseline);
}
