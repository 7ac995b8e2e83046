//! Random-dot autostereogram synthesis from per-pixel depth
//!
//! A depth field is taken from the luminance of a decoded image or rendered
//! analytically from one of six procedural solids. Each row of the output is
//! then solved independently by linking pixels at depth-dependent spacing, and
//! an optional alignment guide is drawn at the same base spacing to help the
//! viewer fuse the image.

#![forbid(unsafe_code)]

/// Base color grids derived from depth
pub mod color;
/// Depth map construction from images and procedural solids
pub mod depth;
/// Alignment guide overlays and the rasterizer behind them
pub mod guides;
/// Input/output operations and error handling
pub mod io;
/// Stereogram synthesis, generation options and the end-to-end pipeline
pub mod synthesis;

pub use io::error::{Result, StereogramError};
pub use synthesis::pipeline::{DepthSource, Generator, Stereogram};
