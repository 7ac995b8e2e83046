//! Stereogram synthesis
//!
//! This module contains:
//! - Generation options and the derived pattern width
//! - The RGBA output buffer
//! - The row-wise constraint synthesizer
//! - The pipeline tying depth, color, synthesis and guides together

/// Flat RGBA output buffer
pub mod buffer;
/// Generation options and pattern width
pub mod options;
/// Depth source to finished image
pub mod pipeline;
/// Row-wise constraint propagation
pub mod synthesizer;

pub use buffer::PixelBuffer;
pub use options::{AlignmentKind, GenerationOptions, PatternWidth, ViewingMode};
