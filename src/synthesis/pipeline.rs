//! End-to-end generation: depth source to finished, guided pixel buffer

use log::debug;
use rand::{Rng, rngs::StdRng};

use crate::color::base::BaseColorGrid;
use crate::depth::map::DepthMap;
use crate::depth::shapes::ShapeKind;
use crate::guides::overlay::render_alignment;
use crate::io::error::Result;
use crate::synthesis::buffer::PixelBuffer;
use crate::synthesis::options::{GenerationOptions, PatternWidth};
use crate::synthesis::synthesizer::{SynthesisParams, Synthesizer};

/// Where the depth field comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthSource<'a> {
    /// Decoded RGBA pixels already at the canvas resolution
    Image {
        /// Row-major RGBA bytes, `width * height * 4` long
        pixels: &'a [u8],
    },
    /// Procedural solid
    Shape(ShapeKind),
}

/// Finished image and the pattern width it was built with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stereogram {
    /// Output pixels
    pub buffer: PixelBuffer,
    /// Spacing shared by the synthesizer and the guides
    pub pattern_width: PatternWidth,
}

/// Build the depth map and base colors for a source
///
/// # Errors
///
/// Returns an error if the dimensions are invalid, the pixel data doesn't
/// match them, or the shape has no profile
pub fn build_inputs(
    source: DepthSource<'_>,
    width: usize,
    height: usize,
) -> Result<(DepthMap, BaseColorGrid)> {
    match source {
        DepthSource::Image { pixels } => {
            debug!("building {width}x{height} depth map from image luminance");
            let depth = DepthMap::from_rgba(pixels, width, height)?;
            let colors = BaseColorGrid::grayscale(&depth);
            Ok((depth, colors))
        }
        DepthSource::Shape(shape) => {
            debug!("building {width}x{height} depth map for {shape}");
            let depth = DepthMap::from_shape(shape, width, height)?;
            let colors = BaseColorGrid::from_shape(&depth, shape)?;
            Ok((depth, colors))
        }
    }
}

/// Stereogram generator owning its synthesizer and noise source
#[derive(Debug, Clone)]
pub struct Generator<R> {
    synthesizer: Synthesizer<R>,
}

impl Generator<StdRng> {
    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self {
            synthesizer: Synthesizer::seeded(seed),
        }
    }

    /// Generator seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            synthesizer: Synthesizer::from_entropy(),
        }
    }
}

impl<R: Rng> Generator<R> {
    /// Wrap an existing random number generator
    pub const fn new(rng: R) -> Self {
        Self {
            synthesizer: Synthesizer::new(rng),
        }
    }

    /// Generate a stereogram
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail validation or the depth source
    /// cannot be turned into a depth map. No buffer is produced on failure.
    pub fn generate(
        &mut self,
        source: DepthSource<'_>,
        options: &GenerationOptions,
    ) -> Result<Stereogram> {
        self.generate_with_progress(source, options, |_| {})
    }

    /// Generate a stereogram, reporting each synthesized row
    ///
    /// # Errors
    ///
    /// Same as [`Generator::generate`]
    pub fn generate_with_progress(
        &mut self,
        source: DepthSource<'_>,
        options: &GenerationOptions,
        on_row: impl FnMut(usize),
    ) -> Result<Stereogram> {
        options.validate()?;
        let (depth, colors) = build_inputs(source, options.width, options.height)?;

        let pattern_width = options.pattern_width();
        let params = SynthesisParams::new(options, pattern_width);

        let mut buffer = self
            .synthesizer
            .synthesize_with_progress(&depth, &colors, &params, on_row);
        render_alignment(
            &mut buffer,
            options.alignment,
            pattern_width,
            options.viewing_mode,
        );

        Ok(Stereogram {
            buffer,
            pattern_width,
        })
    }
}
