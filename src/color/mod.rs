//! Base color construction ahead of noise blending

/// Color samples, the base color grid and the shape color model
pub mod base;
