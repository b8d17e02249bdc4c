//! In-memory ARGB8888 color buffer.
//!
//! Owns a 1D color buffer with width/height metadata and offers
//! bounds-checked 2D pixel access. This is what the live window uploads to
//! its streaming texture every frame.

use crate::colors;
use crate::surface::Surface;

pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    background: u32,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Create a buffer filled with the default background color.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, colors::BACKGROUND)
    }

    pub fn with_background(width: u32, height: u32, background: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![background; size],
            background,
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![self.background; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Number of pixels that differ from the background.
    pub fn painted_count(&self) -> usize {
        self.color_buffer
            .iter()
            .filter(|&&c| c != self.background)
            .count()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The buffer as raw bytes (ARGB8888, native endianness) for texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u8 has no alignment requirement and every bit pattern is a valid u8;
        // the byte length is exactly the u32 length times four.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }
}

impl Surface for FrameBuffer {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    fn clear(&mut self) {
        self.color_buffer.fill(self.background);
    }
}
