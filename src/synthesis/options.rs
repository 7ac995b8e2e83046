//! Generation parameters and the pattern width derived from them

use std::fmt;

use crate::io::configuration::{
    DEFAULT_DEPTH_SCALE, DEFAULT_EYE_SEPARATION, DEFAULT_HEIGHT, DEFAULT_IMAGE_COLOR_DISPARITY,
    DEFAULT_SHAPE_COLOR_DISPARITY, DEFAULT_WIDTH, PATTERN_WIDTH_FACTOR,
};
use crate::io::error::{Result, check_dimensions, invalid_parameter};

/// How the viewer is expected to fuse the image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewingMode {
    /// Eyes diverge; nearer surfaces repeat at wider spacing
    #[default]
    Parallel,
    /// Eyes converge; nearer surfaces repeat at narrower spacing
    CrossEyed,
}

impl ViewingMode {
    /// Sign applied to the depth-driven shift
    pub const fn shift_sign(self) -> i64 {
        match self {
            Self::Parallel => 1,
            Self::CrossEyed => -1,
        }
    }
}

/// Overlay drawn on top of the finished stereogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentKind {
    /// No overlay
    None,
    /// Two filled circles near the top edge
    #[default]
    Dots,
    /// Two tall outlined rectangles
    Frames,
    /// Two small perspective cubes
    Cubes,
}

/// Round half up, matching the rounding the shift model was tuned with
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Baseline horizontal repetition distance in pixels
///
/// Derived once per generation from the eye separation and handed to both
/// the synthesizer and the guide renderer so their spacings agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternWidth(u32);

impl PatternWidth {
    /// `round(eye_separation * 1.2)`
    pub fn from_eye_separation(eye_separation: u32) -> Self {
        Self(round_half_up(f64::from(eye_separation) * PATTERN_WIDTH_FACTOR) as u32)
    }

    /// Width in pixels
    pub const fn pixels(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PatternWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Everything a single generation needs besides its depth source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Target inter-pupillary distance in pixels; 0 disables the stereo pass
    pub eye_separation: u32,
    /// Multiplier on depth before it becomes a horizontal shift
    pub depth_scale: f64,
    /// Parallel or cross-eyed fusion
    pub viewing_mode: ViewingMode,
    /// Blend factor between base color (0) and uniform noise (1)
    pub color_disparity: f64,
    /// Guide overlay to draw after synthesis
    pub alignment: AlignmentKind,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self::for_image()
    }
}

impl GenerationOptions {
    /// Defaults tuned for photograph depth sources
    pub const fn for_image() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            eye_separation: DEFAULT_EYE_SEPARATION,
            depth_scale: DEFAULT_DEPTH_SCALE,
            viewing_mode: ViewingMode::Parallel,
            color_disparity: DEFAULT_IMAGE_COLOR_DISPARITY,
            alignment: AlignmentKind::Dots,
        }
    }

    /// Defaults tuned for procedural solids
    pub const fn for_shape() -> Self {
        Self {
            color_disparity: DEFAULT_SHAPE_COLOR_DISPARITY,
            ..Self::for_image()
        }
    }

    /// Pattern width implied by the eye separation
    pub fn pattern_width(&self) -> PatternWidth {
        PatternWidth::from_eye_separation(self.eye_separation)
    }

    /// Check that the options describe a drawable canvas
    ///
    /// Degenerate but meaningful values such as a zero eye separation or a
    /// non-positive depth scale are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Width or height is zero or exceeds the canvas limit
    /// - `color_disparity` is outside `[0, 1]` or NaN
    /// - `depth_scale` is not finite
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)?;

        if !(0.0..=1.0).contains(&self.color_disparity) {
            return Err(invalid_parameter(
                "color_disparity",
                &self.color_disparity,
                &"must be between 0 and 1",
            ));
        }

        if !self.depth_scale.is_finite() {
            return Err(invalid_parameter(
                "depth_scale",
                &self.depth_scale,
                &"must be a finite number",
            ));
        }

        Ok(())
    }
}
