//! Flat RGBA output buffer

use crate::color::base::ColorSample;

/// Alpha written for every pixel
pub const OPAQUE: u8 = 255;

/// Row-major RGBA bytes, four per pixel, always opaque
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Opaque black canvas
    pub fn new(width: usize, height: usize) -> Self {
        let mut data = vec![0; width * height * 4];
        for pixel in data.chunks_exact_mut(4) {
            if let Some(alpha) = pixel.get_mut(3) {
                *alpha = OPAQUE;
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Canvas width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Byte offset of a pixel's red channel
    pub const fn index(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 4
    }

    /// RGBA value of a pixel, or `None` outside the canvas
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = self.index(x, y);
        self.data
            .get(index..index + 4)
            .and_then(|bytes| <[u8; 4]>::try_from(bytes).ok())
    }

    /// Color of a pixel without its alpha
    pub fn color(&self, x: usize, y: usize) -> Option<ColorSample> {
        self.pixel(x, y)
            .map(|[r, g, b, _]| ColorSample::new(r, g, b))
    }

    /// Overwrite a pixel's color, ignoring coordinates outside the canvas
    pub fn set_color(&mut self, x: usize, y: usize, color: ColorSample) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        if let Some(bytes) = self.data.get_mut(index..index + 4) {
            bytes.copy_from_slice(&[color.r, color.g, color.b, OPAQUE]);
        }
    }

    /// Write a full row of colors starting at column 0
    pub fn write_row(&mut self, y: usize, row: &[ColorSample]) {
        if y >= self.height {
            return;
        }
        let start = self.index(0, y);
        if let Some(bytes) = self.data.get_mut(start..start + self.width * 4) {
            for (pixel, color) in bytes.chunks_exact_mut(4).zip(row) {
                pixel.copy_from_slice(&[color.r, color.g, color.b, OPAQUE]);
            }
        }
    }

    /// RGBA bytes of one row
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = self.index(0, y);
        self.data.get(start..start + self.width * 4)
    }

    /// All bytes in scan order
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
