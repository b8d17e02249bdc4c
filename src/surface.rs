//! The pixel sink every rasterizer draws into.
//!
//! A [`Surface`] only has to know how to set one pixel, clear itself and
//! flush. The live SDL2 window, the in-memory [`FrameBuffer`](crate::FrameBuffer)
//! and the image-file [`ImageSurface`](crate::ImageSurface) all implement it,
//! so the same rasterizer code serves every output.

use std::collections::BTreeSet;

use crate::error::SurfaceError;
use crate::geometry::Point2D;

/// A 2D raster target.
///
/// Implementations must treat out-of-bounds coordinates in [`set_pixel`](Surface::set_pixel)
/// as a silent no-op, never as an error.
pub trait Surface {
    /// Write `color` (ARGB8888) at `(x, y)`.
    fn set_pixel(&mut self, x: i32, y: i32, color: u32);

    /// Reset every pixel to the surface's background.
    fn clear(&mut self);

    /// Make everything written since the last flush visible.
    fn flush(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }

    /// Show a one-line status text, e.g. in a window title. Ignored by
    /// surfaces with nowhere to put it.
    fn set_status(&mut self, _status: &str) {}
}

/// A surface that records every `set_pixel` call in emission order.
///
/// Unbounded: nothing is dropped, so tests can inspect coordinates that a
/// real surface would clip.
#[derive(Debug, Default, Clone)]
pub struct PixelRecorder {
    pixels: Vec<Point2D>,
    flushes: usize,
}

impl PixelRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixels in the order they were written, duplicates included.
    pub fn pixels(&self) -> &[Point2D] {
        &self.pixels
    }

    /// Distinct pixels written.
    pub fn pixel_set(&self) -> BTreeSet<Point2D> {
        self.pixels.iter().copied().collect()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.pixels.contains(&Point2D::new(x, y))
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl Surface for PixelRecorder {
    fn set_pixel(&mut self, x: i32, y: i32, _color: u32) {
        self.pixels.push(Point2D::new(x, y));
    }

    fn clear(&mut self) {
        self.pixels.clear();
    }

    fn flush(&mut self) -> Result<(), SurfaceError> {
        self.flushes += 1;
        Ok(())
    }
}
