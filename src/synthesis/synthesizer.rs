//! Row-wise random-dot stereogram synthesis
//!
//! Every row is solved on its own. The row is first filled with base colors,
//! optionally blended with fresh noise, then a single left-to-right pass links
//! each pixel to the pixel `separation` columns to its right by copying it
//! there. Separation grows (parallel) or shrinks (cross-eyed) with depth.
//! When two links target the same cell the later one wins, which is what
//! produces the layered look of the illusion.

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::color::base::{BaseColorGrid, ColorSample};
use crate::depth::map::DepthMap;
use crate::io::configuration::MIN_SEPARATION;
use crate::synthesis::buffer::PixelBuffer;
use crate::synthesis::options::{GenerationOptions, PatternWidth, ViewingMode, round_half_up};

/// Inputs to the constraint pass taken from the generation options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisParams {
    /// Target inter-pupillary distance; 0 disables linking
    pub eye_separation: u32,
    /// Multiplier on depth before it becomes a shift
    pub depth_scale: f64,
    /// Direction of the depth-driven shift
    pub viewing_mode: ViewingMode,
    /// Share of noise blended into each base color
    pub color_disparity: f64,
    /// Baseline link distance shared with the guide renderer
    pub pattern_width: PatternWidth,
}

impl SynthesisParams {
    /// Pair the options with an already derived pattern width
    pub const fn new(options: &GenerationOptions, pattern_width: PatternWidth) -> Self {
        Self {
            eye_separation: options.eye_separation,
            depth_scale: options.depth_scale,
            viewing_mode: options.viewing_mode,
            color_disparity: options.color_disparity,
            pattern_width,
        }
    }
}

/// Link distance for the pixel at column `x` of a row `width` pixels wide
///
/// The result is clamped to `[MIN_SEPARATION, width - x - 1]`, with the lower
/// bound taking precedence near the right edge. The shift is clamped in
/// floating point, so any finite depth scale saturates at the row bounds.
pub fn separation_at(x: usize, width: usize, depth: f64, params: &SynthesisParams) -> i64 {
    let shift = round_half_up(depth * params.depth_scale * f64::from(params.eye_separation));
    let separation = (params.viewing_mode.shift_sign() as f64)
        .mul_add(shift, f64::from(params.pattern_width.pixels()));
    let remaining = width as f64 - x as f64 - 1.0;
    separation.min(remaining).max(MIN_SEPARATION as f64) as i64
}

/// Stereogram synthesizer owning its noise source
///
/// Each instance carries its own generator, so independent generations never
/// share random state. Seeded instances produce identical output for identical
/// inputs.
#[derive(Debug, Clone)]
pub struct Synthesizer<R> {
    rng: R,
}

impl Synthesizer<StdRng> {
    /// Reproducible synthesizer
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Synthesizer seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Synthesizer<R> {
    /// Wrap an existing random number generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Synthesize the full image
    ///
    /// The canvas takes the depth map's dimensions. Colors missing from the
    /// base grid are treated as black.
    pub fn synthesize(
        &mut self,
        depth: &DepthMap,
        colors: &BaseColorGrid,
        params: &SynthesisParams,
    ) -> PixelBuffer {
        self.synthesize_with_progress(depth, colors, params, |_| {})
    }

    /// Synthesize the full image, reporting each finished row
    pub fn synthesize_with_progress(
        &mut self,
        depth: &DepthMap,
        colors: &BaseColorGrid,
        params: &SynthesisParams,
        mut on_row: impl FnMut(usize),
    ) -> PixelBuffer {
        let (width, height) = (depth.width(), depth.height());
        debug!(
            "synthesizing {width}x{height} stereogram with pattern width {}",
            params.pattern_width
        );

        let mut buffer = PixelBuffer::new(width, height);
        let mut row = Vec::with_capacity(width);

        for y in 0..height {
            self.synthesize_row(y, depth, colors, params, &mut row);
            buffer.write_row(y, &row);
            on_row(y);
        }

        buffer
    }

    /// Solve one row into `row`, replacing its contents
    pub fn synthesize_row(
        &mut self,
        y: usize,
        depth: &DepthMap,
        colors: &BaseColorGrid,
        params: &SynthesisParams,
        row: &mut Vec<ColorSample>,
    ) {
        self.seed_row(y, depth.width(), colors, params.color_disparity, row);
        link_row(row, y, depth, params);
    }

    fn seed_row(
        &mut self,
        y: usize,
        width: usize,
        colors: &BaseColorGrid,
        disparity: f64,
        row: &mut Vec<ColorSample>,
    ) {
        row.clear();
        for x in 0..width {
            let base = colors.get(x, y).unwrap_or_default();
            let sample = if disparity <= 0.0 {
                base
            } else {
                let noise = ColorSample::new(
                    self.rng.random(),
                    self.rng.random(),
                    self.rng.random(),
                );
                base.blend(noise, disparity)
            };
            row.push(sample);
        }
    }
}

/// Left-to-right constraint pass over a seeded row
///
/// Copies rather than blends, so a later link silently replaces an earlier
/// one that targeted the same column.
pub fn link_row(row: &mut [ColorSample], y: usize, depth: &DepthMap, params: &SynthesisParams) {
    if params.eye_separation == 0 {
        return;
    }

    let width = row.len();
    for x in 0..width {
        let separation = separation_at(x, width, depth.depth(x, y), params);
        let target = x + separation as usize;
        if target < width {
            if let Some(source) = row.get(x).copied() {
                if let Some(cell) = row.get_mut(target) {
                    *cell = source;
                }
            }
        }
    }
}
