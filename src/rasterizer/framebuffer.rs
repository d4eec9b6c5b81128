//! RGBA framebuffer for software rendering

use std::path::Path;

use super::error::RasterError;
use super::types::Color;

/// Bytes per RGBA pixel
const BPP: usize = 4;

/// Fixed-size RGBA8888 pixel grid, row-major with `y = 0` at the top.
///
/// The size is chosen at construction and never changes, so a slice
/// returned by [`Framebuffer::data`] always covers the whole image.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Allocate a zeroed buffer. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }

        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BPP))
            .ok_or(RasterError::TooLarge { width, height })?;

        log::debug!("allocating {}x{} framebuffer ({} bytes)", width, height, len);

        Ok(Self {
            pixels: vec![0; len],
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, `width * height * 4` long
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(BPP) {
            px.copy_from_slice(&bytes);
        }
    }

    /// Write one pixel. Coordinates outside the buffer are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx..idx + BPP].copy_from_slice(&color.to_bytes());
        }
    }

    /// Read one pixel back, `None` outside the buffer
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let idx = self.index_of(x, y)?;
        let mut bytes = [0; BPP];
        bytes.copy_from_slice(&self.pixels[idx..idx + BPP]);
        Some(Color::from_bytes(bytes))
    }

    /// Write the buffer as a PNG (or any format `image` infers from the extension)
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        let path = path.as_ref();
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )?;
        log::info!("saved {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BPP)
    }
}
