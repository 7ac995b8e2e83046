//! Guide drawing surface backed by a `tiny_skia` overlay
//!
//! Guides are drawn without anti-aliasing onto a transparent pixmap the size
//! of the stereogram, then composited over the pixel buffer in one pass.
//! Drawing near or past the canvas edge is clipped by the pixmap.

use std::sync::{Arc, LazyLock};

use log::warn;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use usvg::{Options, Tree, fontdb};

use crate::color::base::ColorSample;
use crate::synthesis::buffer::PixelBuffer;

static FONTS: LazyLock<Arc<fontdb::Database>> = LazyLock::new(|| {
    let mut fonts = fontdb::Database::new();
    fonts.load_system_fonts();
    Arc::new(fonts)
});

/// Point in canvas coordinates, where pixel `(x, y)` spans `[x, x + 1)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extent
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    // None for empty or non-finite rectangles
    fn to_skia(self) -> Option<tiny_skia::Rect> {
        tiny_skia::Rect::from_xywh(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

fn solid(color: ColorSample) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, u8::MAX);
    paint.anti_alias = false;
    paint
}

fn stroke(line_width: f64) -> Stroke {
    Stroke {
        width: line_width as f32,
        ..Stroke::default()
    }
}

fn closed_path(points: &[Point]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut builder = PathBuilder::new();
    builder.move_to(first.x as f32, first.y as f32);
    for point in rest {
        builder.line_to(point.x as f32, point.y as f32);
    }
    builder.close();
    builder.finish()
}

/// Transparent overlay the size of a stereogram
pub struct Canvas {
    overlay: Pixmap,
}

impl Canvas {
    /// Overlay for a `width` x `height` buffer, or `None` if either side is zero
    pub fn new(width: usize, height: usize) -> Option<Self> {
        let overlay = Pixmap::new(u32::try_from(width).ok()?, u32::try_from(height).ok()?)?;
        Some(Self { overlay })
    }

    /// Canvas width in pixels
    pub fn width(&self) -> usize {
        self.overlay.width() as usize
    }

    /// Canvas height in pixels
    pub fn height(&self) -> usize {
        self.overlay.height() as usize
    }

    /// Overlay color and coverage of a pixel, `None` where nothing was drawn
    pub fn pixel(&self, x: usize, y: usize) -> Option<(ColorSample, u8)> {
        let pixel = self
            .overlay
            .pixel(u32::try_from(x).ok()?, u32::try_from(y).ok()?)?
            .demultiply();
        (pixel.alpha() > 0).then_some((
            ColorSample::new(pixel.red(), pixel.green(), pixel.blue()),
            pixel.alpha(),
        ))
    }

    /// Filled disc
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: ColorSample) {
        if let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        {
            self.overlay.fill_path(
                &path,
                &solid(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    /// Ring of `line_width` centered on the circle's edge
    pub fn stroke_circle(
        &mut self,
        center: Point,
        radius: f64,
        line_width: f64,
        color: ColorSample,
    ) {
        if let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        {
            self.overlay.stroke_path(
                &path,
                &solid(color),
                &stroke(line_width),
                Transform::identity(),
                None,
            );
        }
    }

    /// Solid rectangle
    pub fn fill_rect(&mut self, rect: Rect, color: ColorSample) {
        if let Some(rect) = rect.to_skia() {
            self.overlay
                .fill_rect(rect, &solid(color), Transform::identity(), None);
        }
    }

    /// Rectangle outline of `line_width` centered on its edges
    pub fn stroke_rect(&mut self, rect: Rect, line_width: f64, color: ColorSample) {
        if let Some(rect) = rect.to_skia() {
            let path = PathBuilder::from_rect(rect);
            self.overlay.stroke_path(
                &path,
                &solid(color),
                &stroke(line_width),
                Transform::identity(),
                None,
            );
        }
    }

    /// Filled polygon using the even-odd rule
    pub fn fill_polygon(&mut self, points: &[Point], color: ColorSample) {
        if points.len() < 3 {
            return;
        }
        if let Some(path) = closed_path(points) {
            self.overlay.fill_path(
                &path,
                &solid(color),
                FillRule::EvenOdd,
                Transform::identity(),
                None,
            );
        }
    }

    /// Closed polygon outline of `line_width` centered on its edges
    pub fn stroke_polygon(&mut self, points: &[Point], line_width: f64, color: ColorSample) {
        if let Some(path) = closed_path(points) {
            self.overlay.stroke_path(
                &path,
                &solid(color),
                &stroke(line_width),
                Transform::identity(),
                None,
            );
        }
    }

    /// Render an SVG fragment sized to this canvas, with system fonts for text
    ///
    /// # Errors
    ///
    /// Returns the parser error if `markup` is not valid SVG.
    pub fn draw_svg(&mut self, markup: &str) -> Result<(), usvg::Error> {
        let options = Options {
            fontdb: Arc::clone(&FONTS),
            ..Options::default()
        };
        let tree = Tree::from_str(markup, &options)?;
        resvg::render(&tree, Transform::identity(), &mut self.overlay.as_mut());
        Ok(())
    }

    /// Blend everything drawn so far over `buffer`
    pub fn composite(&self, buffer: &mut PixelBuffer) {
        if (self.width(), self.height()) != (buffer.width(), buffer.height()) {
            warn!(
                "guide overlay is {}x{} but the stereogram is {}x{}; skipping",
                self.width(),
                self.height(),
                buffer.width(),
                buffer.height()
            );
            return;
        }

        for y in 0..self.height() {
            for x in 0..self.width() {
                let (Some((color, alpha)), Some(base)) = (self.pixel(x, y), buffer.color(x, y))
                else {
                    continue;
                };
                let blended = base.blend(color, f64::from(alpha) / f64::from(u8::MAX));
                buffer.set_color(x, y, blended);
            }
        }
    }
}
