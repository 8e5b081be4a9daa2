//! RGBA pixel buffers handed to the display/encoding side.

use crate::palette::Color;
use crate::png::{self, PngError};

/// Row-major RGBA image, 4 bytes per pixel, starting fully transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 4],
        }
    }

    /// Wrap existing RGBA bytes; `None` if the length does not match.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        (data.len() == width as usize * height as usize * 4).then_some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.data[idx..idx + 4];
        Some(Color::new(px[0], px[1], px[2], px[3]))
    }

    /// Paint a rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        let rgba = color.to_array();
        for row in y.min(y_end)..y_end {
            let start = (row as usize * self.width as usize + x as usize) * 4;
            let end = (row as usize * self.width as usize + x_end as usize) * 4;
            if start >= end {
                continue;
            }
            for px in self.data[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// Number of pixels with non-zero alpha.
    pub fn painted_pixels(&self) -> usize {
        self.data.chunks_exact(4).filter(|px| px[3] != 0).count()
    }

    /// Encode as PNG, indexed when the image has few enough colors.
    pub fn to_png(&self) -> Result<Vec<u8>, PngError> {
        png::create_png_auto(&self.data, self.width as usize, self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.fill_rect(2, 2, 10, 10, Color::new(1, 2, 3, 255));
        assert_eq!(buf.painted_pixels(), 4);
        assert_eq!(buf.pixel(3, 3), Some(Color::new(1, 2, 3, 255)));
        assert_eq!(buf.pixel(1, 1), Some(Color::transparent()));
        assert_eq!(buf.pixel(4, 0), None);
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 16]).is_some());
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 15]).is_none());
    }
}
