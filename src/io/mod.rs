/// Command-line parsing and batch job processing
pub mod cli;
/// Defaults, geometry constants and limits
pub mod configuration;
/// Error type and validation helpers
pub mod error;
/// Depth image decoding and PNG export
pub mod image;
/// Terminal progress bars
pub mod progress;
