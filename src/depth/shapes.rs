//! Analytic depth models for the procedural solids
//!
//! Each solid is described by a [`ShapeProfile`] pairing its depth function
//! with the color function used to seed the base color grid. Profiles live in
//! a static table so every shape's math can be exercised on its own.

use std::f64::consts::FRAC_PI_4;
use std::fmt;
use std::str::FromStr;

use crate::color::base::{ColorSample, gradient_color};
use crate::io::configuration::SHAPE_SIZE_FACTOR;
use crate::io::error::{Result, StereogramError, unsupported_shape};

/// Closed set of procedural solids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Lit hemisphere
    Sphere,
    /// Rubik-style block with a 3x3 grid of stepped faces
    Cube,
    /// Five-step ziggurat shaded from left to right
    Pyramid,
    /// Upright cylinder seen from the front
    Cylinder,
    /// Ring with a circular tube cross-section
    Torus,
    /// Cone lit from the lower right
    Cone,
}

impl ShapeKind {
    /// Every shape in display order
    pub const ALL: [Self; 6] = [
        Self::Sphere,
        Self::Cube,
        Self::Pyramid,
        Self::Cylinder,
        Self::Torus,
        Self::Cone,
    ];

    /// Lowercase name used on the command line and in output files
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::Cube => "cube",
            Self::Pyramid => "pyramid",
            Self::Cylinder => "cylinder",
            Self::Torus => "torus",
            Self::Cone => "cone",
        }
    }

    /// Look up the depth and color functions for this shape
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedShape` if the profile table has no entry for the kind
    pub fn profile(self) -> Result<&'static ShapeProfile> {
        SHAPE_PROFILES
            .iter()
            .find(|profile| profile.kind == self)
            .ok_or_else(|| unsupported_shape(&self.name()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = StereogramError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| unsupported_shape(&s))
    }
}

/// Canvas-derived placement shared by every solid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeGeometry {
    /// Horizontal canvas center
    pub center_x: f64,
    /// Vertical canvas center
    pub center_y: f64,
    /// Silhouette radius, a quarter of the shorter canvas side
    pub size: f64,
}

impl ShapeGeometry {
    /// Center the solid on a canvas of the given size
    pub fn for_canvas(width: usize, height: usize) -> Self {
        Self {
            center_x: width as f64 / 2.0,
            center_y: height as f64 / 2.0,
            size: width.min(height) as f64 * SHAPE_SIZE_FACTOR,
        }
    }

    /// Offset of a pixel from the canvas center
    pub fn offset(&self, x: usize, y: usize) -> (f64, f64) {
        (x as f64 - self.center_x, y as f64 - self.center_y)
    }
}

/// Depth model evaluated at an offset from the canvas center
pub type DepthFn = fn(&ShapeGeometry, f64, f64) -> f64;
/// Base color model evaluated at an offset and its depth
pub type ColorFn = fn(&ShapeGeometry, f64, f64, f64) -> ColorSample;

/// Strategy table entry for one solid
#[derive(Debug)]
pub struct ShapeProfile {
    /// Shape this entry describes
    pub kind: ShapeKind,
    /// Unclamped depth at `(dx, dy)`; callers clamp to `[0, 1]`
    pub depth: DepthFn,
    /// Base color at `(dx, dy)` given the clamped depth
    pub color: ColorFn,
}

/// Depth and color models for every solid
pub static SHAPE_PROFILES: [ShapeProfile; 6] = [
    ShapeProfile {
        kind: ShapeKind::Sphere,
        depth: sphere_depth,
        color: gradient_color,
    },
    ShapeProfile {
        kind: ShapeKind::Cube,
        depth: cube_depth,
        color: gradient_color,
    },
    ShapeProfile {
        kind: ShapeKind::Pyramid,
        depth: pyramid_depth,
        color: gradient_color,
    },
    ShapeProfile {
        kind: ShapeKind::Cylinder,
        depth: cylinder_depth,
        color: gradient_color,
    },
    ShapeProfile {
        kind: ShapeKind::Torus,
        depth: torus_depth,
        color: gradient_color,
    },
    ShapeProfile {
        kind: ShapeKind::Cone,
        depth: cone_depth,
        color: gradient_color,
    },
];

// Light from the upper left, towards the viewer
const SPHERE_LIGHT: [f64; 3] = [-0.5, -0.5, 1.0];

const CUBE_FACE_LEVELS: [f64; 6] = [0.9, 0.8, 0.7, 0.6, 0.5, 0.4];
const CUBE_EDGE_WIDTH: f64 = 2.0;
const CUBE_EDGE_RAISE: f64 = 0.1;

const PYRAMID_STEPS: f64 = 5.0;

/// Hemisphere with Lambert-style shading
pub fn sphere_depth(geometry: &ShapeGeometry, dx: f64, dy: f64) -> f64 {
    let size = geometry.size;
    let distance = dx.hypot(dy);
    if distance > size {
        return 0.0;
    }

    let normalized = distance / size;
    let sphere_depth = normalized.mul_add(-normalized, 1.0).sqrt();

    let normal = [dx / size, dy / size, sphere_depth];
    let light_dot = normal
        .iter()
        .zip(SPHERE_LIGHT)
        .map(|(n, l)| n * l)
        .sum::<f64>()
        .max(0.0);

    sphere_depth * 0.7f64.mul_add(light_dot, 0.3)
}

/// Square block split into nine stepped sub-faces with raised seams
pub fn cube_depth(geometry: &ShapeGeometry, dx: f64, dy: f64) -> f64 {
    let cube_size = geometry.size * 0.8;
    if dx.abs() > cube_size || dy.abs() > cube_size {
        return 0.0;
    }

    let face_size = cube_size / 3.0;
    let local_x = dx + cube_size;
    let local_y = dy + cube_size;
    let face_x = (local_x / face_size).floor() as usize;
    let face_y = (local_y / face_size).floor() as usize;

    let face_index = (face_x * 3 + face_y) % CUBE_FACE_LEVELS.len();
    let depth = CUBE_FACE_LEVELS.get(face_index).copied().unwrap_or(0.0);

    if near_face_boundary(local_x, face_size) || near_face_boundary(local_y, face_size) {
        (depth + CUBE_EDGE_RAISE).min(1.0)
    } else {
        depth
    }
}

fn near_face_boundary(local: f64, face_size: f64) -> bool {
    let within = local % face_size;
    within < CUBE_EDGE_WIDTH || face_size - within < CUBE_EDGE_WIDTH
}

/// Stepped pyramid brightening towards the right
pub fn pyramid_depth(geometry: &ShapeGeometry, dx: f64, dy: f64) -> f64 {
    let base = geometry.size;
    if dx.abs() > base || dy.abs() > base {
        return 0.0;
    }

    let from_center = dx.abs().max(dy.abs());
    let height_factor = 1.0 - from_center / base;
    let stepped_height = (height_factor * PYRAMID_STEPS).floor() / PYRAMID_STEPS;

    let shading = (dx + base) / (2.0 * base);
    (stepped_height * 0.6f64.mul_add(shading, 0.4)).max(0.0)
}

/// Cylinder whose depth falls off towards its left and right sides
pub fn cylinder_depth(geometry: &ShapeGeometry, dx: f64, dy: f64) -> f64 {
    let size = geometry.size;
    if dx.hypot(dy) > size {
        return 0.0;
    }

    let shading = dx.abs() / size;
    0.8 * shading.mul_add(-0.5, 1.0)
}

/// Ring of radius `0.7 * size` with a tube of radius `0.3 * size`
pub fn torus_depth(geometry: &ShapeGeometry, dx: f64, dy: f64) -> f64 {
    let torus_radius = geometry.size * 0.7;
    let tube_radius = geometry.size * 0.3;
    let torus_distance = (dx.hypot(dy) - torus_radius).abs();
    if torus_distance > tube_radius {
        return 0.0;
    }

    let ratio = torus_distance / tube_radius;
    let tube_depth = ratio.mul_add(-ratio, 1.0).sqrt();

    let shading = (dy.atan2(dx).sin() + 1.0) / 2.0;
    tube_depth * 0.4f64.mul_add(shading, 0.4)
}

/// Cone with its apex at the canvas center
pub fn cone_depth(geometry: &ShapeGeometry, dx: f64, dy: f64) -> f64 {
    let size = geometry.size;
    let distance = dx.hypot(dy);
    if distance > size {
        return 0.0;
    }

    let cone_height = 1.0 - distance / size;
    let shading = ((dy.atan2(dx) - FRAC_PI_4).cos() + 1.0) / 2.0;
    (cone_height * 0.5f64.mul_add(shading, 0.3)).max(0.0)
}
