//! Normalized depth grids built from decoded images or procedural solids

use ndarray::Array2;
use num_traits::Float;

use crate::depth::shapes::{ShapeGeometry, ShapeKind};
use crate::io::error::{Result, StereogramError, check_dimensions};

/// Clamp a value into the unit interval
pub fn clamp_unit<T: Float>(value: T) -> T {
    num_traits::clamp(value, T::zero(), T::one())
}

/// Immutable grid of scene depth values in `[0, 1]`
///
/// Stored row-major so that `values[[y, x]]` walks memory in scan order,
/// which is the order the synthesizer consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthMap {
    values: Array2<f64>,
}

impl DepthMap {
    /// Build a depth map from the luminance of an RGBA pixel grid
    ///
    /// The grid must already be at the target resolution. Depth is the plain
    /// average of the three color channels; alpha is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero or exceeds the canvas limit
    /// - The pixel slice length differs from `width * height * 4`
    pub fn from_rgba(pixels: &[u8], width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;

        let expected = width * height * 4;
        if pixels.len() != expected {
            return Err(StereogramError::InvalidSourceData {
                reason: format!(
                    "expected {expected} RGBA bytes for {width}x{height}, got {}",
                    pixels.len()
                ),
            });
        }

        let values = Array2::from_shape_fn((height, width), |(y, x)| {
            let index = (y * width + x) * 4;
            pixels
                .get(index..index + 3)
                .map_or(0.0, |rgb| {
                    let sum: u32 = rgb.iter().map(|&c| u32::from(c)).sum();
                    clamp_unit(f64::from(sum) / 3.0 / 255.0)
                })
        });

        Ok(Self { values })
    }

    /// Render one of the procedural solids into a depth map
    ///
    /// The solid is centered on the canvas with a radius of a quarter of the
    /// shorter side. Pixels outside its silhouette have depth 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or the shape has no
    /// depth model
    pub fn from_shape(shape: ShapeKind, width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        let profile = shape.profile()?;
        let geometry = ShapeGeometry::for_canvas(width, height);

        let values = Array2::from_shape_fn((height, width), |(y, x)| {
            let (dx, dy) = geometry.offset(x, y);
            clamp_unit((profile.depth)(&geometry, dx, dy))
        });

        Ok(Self { values })
    }

    /// Wrap an existing grid, clamping every value into `[0, 1]`
    pub fn from_array(mut values: Array2<f64>) -> Self {
        values.mapv_inplace(clamp_unit);
        Self { values }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> usize {
        self.values.ncols()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> usize {
        self.values.nrows()
    }

    /// Depth at a pixel, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        self.values.get([y, x]).copied()
    }

    /// Depth at a pixel, treating out-of-range coordinates as background
    pub fn depth(&self, x: usize, y: usize) -> f64 {
        self.get(x, y).unwrap_or(0.0)
    }

    /// Borrow the underlying row-major grid
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }
}
