//! Alignment guides drawn over finished stereograms

/// Projected perspective cubes
pub mod cubes;
/// Red alignment dots
pub mod dots;
/// SVG caption text
pub mod font;
/// Tall outlined frames
pub mod frames;
/// Guide selection and dispatch
pub mod overlay;
/// Overlay canvas on tiny-skia
pub mod raster;
