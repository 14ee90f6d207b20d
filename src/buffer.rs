//! Immutable RGBA pixel view with brightness sampling.

use image::RgbaImage;

use crate::error::DetectError;

/// Read-only view of a decoded image: width, height, and per-pixel RGBA.
///
/// The detection pipeline only ever samples brightness from this buffer;
/// it is never mutated. Coordinates are signed so neighbor arithmetic at
/// the image edge stays straightforward: out-of-bounds reads are simply
/// brightness 0, never a fault.
#[derive(Debug)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    /// Row-major RGBA, 4 bytes per pixel.
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Build from raw RGBA bytes.
    ///
    /// The one reportable error in the core: the declared dimensions must
    /// match the actual data length.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, DetectError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(DetectError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width: width as i32,
            height: height as i32,
            data,
        })
    }

    /// Build from a decoded image. Cannot fail: a decoded `RgbaImage` is
    /// dimensionally consistent by construction.
    pub fn from_image(img: &RgbaImage) -> Self {
        Self {
            width: img.width() as i32,
            height: img.height() as i32,
            data: img.as_raw().clone(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Brightness at (x, y): mean of the R, G, B channels, alpha ignored.
    /// Out-of-bounds reads return 0.0.
    pub fn brightness(&self, x: i32, y: i32) -> f64 {
        if !self.contains(x, y) {
            return 0.0;
        }
        let offset = (y * self.width + x) as usize * 4;
        let r = self.data[offset] as f64;
        let g = self.data[offset + 1] as f64;
        let b = self.data[offset + 2] as f64;
        (r + g + b) / 3.0
    }
}
