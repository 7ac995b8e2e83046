//! Generation constants and runtime configuration defaults

// Canvas defaults for both source kinds
/// Default canvas width in pixels
pub const DEFAULT_WIDTH: usize = 800;
/// Default canvas height in pixels
pub const DEFAULT_HEIGHT: usize = 600;

/// Default target inter-pupillary distance in pixels
pub const DEFAULT_EYE_SEPARATION: u32 = 60;
/// Default multiplier applied to depth before it becomes a horizontal shift
pub const DEFAULT_DEPTH_SCALE: f64 = 0.3;

/// Photographs keep more of their grayscale structure
pub const DEFAULT_IMAGE_COLOR_DISPARITY: f64 = 0.3;
/// Procedural solids lean on noise for a stronger illusion
pub const DEFAULT_SHAPE_COLOR_DISPARITY: f64 = 0.8;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
///
/// Caps a single RGBA buffer at 400 MB. Larger canvases are rejected with
/// `InvalidDimensions` even though the algorithm itself has no upper bound.
pub const MAX_CANVAS_DIMENSION: usize = 10_000;

/// Ratio between eye separation and the base repetition distance
pub const PATTERN_WIDTH_FACTOR: f64 = 1.2;
/// Lower clamp for the per-pixel constraint distance
pub const MIN_SEPARATION: i64 = 10;

/// Fraction of the shorter canvas side used as the solid's radius
pub const SHAPE_SIZE_FACTOR: f64 = 0.25;

// Alignment dot geometry
/// Radius of each alignment dot
pub const DOT_RADIUS: f64 = 8.0;
/// Vertical center of the alignment dots
pub const DOT_Y: f64 = 20.0;
/// Width of the white ring around each dot
pub const DOT_STROKE_WIDTH: f64 = 3.0;

// Alignment frame geometry
/// Width of each alignment frame
pub const FRAME_WIDTH: f64 = 40.0;
/// Distance kept free above and below the frames
pub const FRAME_MARGIN: f64 = 30.0;
/// Minimum distance between a frame and the canvas side
pub const FRAME_EDGE_MARGIN: f64 = 10.0;
/// Outline width of the frames
pub const FRAME_STROKE_WIDTH: f64 = 2.0;
/// Length of each arm of the white corner accents
pub const FRAME_ACCENT_LENGTH: f64 = 8.0;
/// Caption baseline for the frame guide
pub const FRAME_CAPTION_Y: f64 = 24.0;

// Alignment cube geometry
/// Edge length of the projected cubes before perspective
pub const CUBE_SIZE: f64 = 20.0;
/// Vertical center of the projected cubes
pub const CUBE_Y: f64 = 30.0;
/// Horizontal skew applied per eye, in cube units before the 0.1 factor
pub const CUBE_EYE_SKEW: f64 = 2.0;
/// Outline width of the cube faces
pub const CUBE_STROKE_WIDTH: f64 = 2.0;

/// Distance from a guide's anchor to its caption baseline
pub const CAPTION_OFFSET: f64 = 30.0;
/// Caption font size in pixels
pub const CAPTION_FONT_SIZE: f64 = 14.0;
/// Width of the black outline behind caption glyphs
pub const CAPTION_OUTLINE_WIDTH: f64 = 2.0;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_stereogram";
/// Extension of every written file
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
