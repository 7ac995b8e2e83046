//! Depth image decoding and PNG export

use std::path::Path;

use image::{ImageBuffer, RgbaImage, imageops::FilterType};

use crate::io::error::{Result, StereogramError, check_dimensions};
use crate::synthesis::buffer::PixelBuffer;

/// Decode an image file and stretch it to exactly `width` x `height`
///
/// # Errors
///
/// Returns an error if:
/// - The dimensions are invalid
/// - The file cannot be opened or decoded
pub fn load_depth_source(path: &Path, width: usize, height: usize) -> Result<RgbaImage> {
    check_dimensions(width, height)?;

    let decoded = image::open(path).map_err(|e| StereogramError::SourceDecode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (target_width, target_height) = (width as u32, height as u32);
    let rgba = if decoded.width() == target_width && decoded.height() == target_height {
        decoded.to_rgba8()
    } else {
        image::imageops::resize(
            &decoded.to_rgba8(),
            target_width,
            target_height,
            FilterType::Triangle,
        )
    };

    Ok(rgba)
}

/// Copy a pixel buffer into an `image` RGBA image
///
/// # Errors
///
/// Returns an error if the buffer length doesn't match its dimensions
pub fn to_rgba_image(buffer: &PixelBuffer) -> Result<RgbaImage> {
    ImageBuffer::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.as_bytes().to_vec(),
    )
    .ok_or_else(|| StereogramError::InvalidSourceData {
        reason: format!(
            "pixel buffer does not hold {}x{} RGBA pixels",
            buffer.width(),
            buffer.height()
        ),
    })
}

/// Write a pixel buffer to disk as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_png(buffer: &PixelBuffer, output_path: &Path) -> Result<()> {
    let img = to_rgba_image(buffer)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StereogramError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| StereogramError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
