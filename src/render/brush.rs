//! Square brush for thick strokes.
//!
//! [`Brush`] wraps another surface and replaces every pixel write with a
//! filled square centred on that pixel. Handing a brush to any line
//! rasterizer yields a thick line without touching the algorithm itself.

use crate::error::SurfaceError;
use crate::surface::Surface;

pub struct Brush<'a> {
    inner: &'a mut dyn Surface,
    size: i32,
}

impl<'a> Brush<'a> {
    /// A brush `size` pixels wide. Sizes below one behave as a single pixel.
    pub fn new(inner: &'a mut dyn Surface, size: i32) -> Self {
        Self {
            inner,
            size: size.max(1),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }
}

impl Surface for Brush<'_> {
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        let half = self.size / 2;
        for dy in 0..self.size {
            for dx in 0..self.size {
                self.inner.set_pixel(x - half + dx, y - half + dy, color);
            }
        }
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn flush(&mut self) -> Result<(), SurfaceError> {
        self.inner.flush()
    }

    fn set_status(&mut self, status: &str) {
        self.inner.set_status(status);
    }
}
