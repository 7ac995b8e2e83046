//! Base color grids seeded from depth before noise is blended in

use ndarray::Array2;

use crate::depth::map::DepthMap;
use crate::depth::shapes::{ShapeGeometry, ShapeKind};
use crate::io::error::Result;

/// Single RGB color sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSample {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl ColorSample {
    /// Create a sample from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same value on every channel
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Channels in RGB order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Mix towards another sample, flooring each channel
    ///
    /// `weight` is the share of `other`; 0 keeps `self` and 1 yields `other`.
    pub fn blend(self, other: Self, weight: f64) -> Self {
        let mix = |base: u8, noise: u8| {
            let value = f64::from(base).mul_add(1.0 - weight, f64::from(noise) * weight);
            value.floor().clamp(0.0, 255.0) as u8
        };
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

/// Shape background outside every silhouette
pub const BACKGROUND_COLOR: ColorSample = ColorSample::gray(50);

/// Depth expressed as a byte intensity
fn intensity(depth: f64) -> u8 {
    (depth * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Color model shared by all procedural solids
///
/// Inside the circular silhouette radius the color is a blue-leaning ramp
/// driven by depth. Corners of square solids that poke outside that radius
/// get a warm ramp instead.
pub fn gradient_color(geometry: &ShapeGeometry, dx: f64, dy: f64, depth: f64) -> ColorSample {
    if depth == 0.0 {
        return BACKGROUND_COLOR;
    }

    let level = f64::from(intensity(depth));
    let channel = |value: f64| value.clamp(0.0, 255.0) as u8;

    if dx.hypot(dy) <= geometry.size {
        ColorSample::new(
            channel(level.mul_add(0.6, 100.0).floor()),
            channel(level.mul_add(0.4, 150.0).floor()),
            channel(level.mul_add(0.2, 200.0).floor()),
        )
    } else {
        ColorSample::new(
            channel(level),
            channel((level * 0.8).round()),
            channel((level * 0.6).round()),
        )
    }
}

/// Per-pixel base colors with the same shape as the depth map
#[derive(Debug, Clone, PartialEq)]
pub struct BaseColorGrid {
    colors: Array2<ColorSample>,
}

impl BaseColorGrid {
    /// Grayscale ramp used for photograph sources
    pub fn grayscale(depth: &DepthMap) -> Self {
        Self {
            colors: depth.values().mapv(|d| ColorSample::gray(intensity(d))),
        }
    }

    /// Colors from the profile of the solid that produced the depth map
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedShape` if the shape has no profile
    pub fn from_shape(depth: &DepthMap, shape: ShapeKind) -> Result<Self> {
        let profile = shape.profile()?;
        let geometry = ShapeGeometry::for_canvas(depth.width(), depth.height());

        let colors = Array2::from_shape_fn((depth.height(), depth.width()), |(y, x)| {
            let (dx, dy) = geometry.offset(x, y);
            (profile.color)(&geometry, dx, dy, depth.depth(x, y))
        });

        Ok(Self { colors })
    }

    /// Canvas width in pixels
    pub fn width(&self) -> usize {
        self.colors.ncols()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> usize {
        self.colors.nrows()
    }

    /// Color at a pixel, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<ColorSample> {
        self.colors.get([y, x]).copied()
    }
}
