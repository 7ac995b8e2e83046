//! Depth field construction
//!
//! This module contains:
//! - The normalized depth grid and its image and shape builders
//! - The analytic depth models of the procedural solids

/// Depth grid storage and builders
pub mod map;
/// Procedural solid models and their strategy table
pub mod shapes;

pub use map::DepthMap;
pub use shapes::ShapeKind;
