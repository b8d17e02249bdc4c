//! Byte-buffer surface for decoded image files.
//!
//! Wraps a row-major pixel buffer with 3 (RGB) or 4 (RGBA) channels. Pixel
//! writes store the color's RGB channels and, when an alpha channel is
//! present, force it to fully opaque.

use std::path::Path;

use image::ExtendedColorType;

use crate::colors;
use crate::error::{BatchError, RasterError};
use crate::surface::Surface;

#[derive(Debug, Clone)]
pub struct ImageSurface {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl ImageSurface {
    /// Wrap an existing buffer.
    ///
    /// Fails if `channels` is not 3 or 4 or if the buffer length does not
    /// match `width * height * channels`.
    pub fn from_raw(
        data: Vec<u8>,
        width: u32,
        height: u32,
        channels: u8,
    ) -> Result<Self, RasterError> {
        if channels != 3 && channels != 4 {
            return Err(RasterError::InvalidChannels(channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Load an image file (PNG, JPG, ...). Images with an alpha channel keep
    /// four channels, everything else is converted to RGB.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BatchError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| BatchError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let surface = if img.color().has_alpha() {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            Self::from_raw(rgba.into_raw(), width, height, 4)?
        } else {
            let rgb = img.to_rgb8();
            let (width, height) = rgb.dimensions();
            Self::from_raw(rgb.into_raw(), width, height, 3)?
        };
        Ok(surface)
    }

    /// Encode the buffer to `path`; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BatchError> {
        let path = path.as_ref();
        let color_type = if self.channels == 4 {
            ExtendedColorType::Rgba8
        } else {
            ExtendedColorType::Rgb8
        };
        image::save_buffer(path, &self.data, self.width, self.height, color_type).map_err(
            |source| BatchError::Encode {
                path: path.to_path_buf(),
                source,
            },
        )
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// The channel bytes at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<&[u8]> {
        self.offset(x, y)
            .map(|idx| &self.data[idx..idx + self.channels as usize])
    }

    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as usize * self.width as usize + x as usize) * self.channels as usize)
        } else {
            None
        }
    }
}

impl Surface for ImageSurface {
    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        let Some(idx) = self.offset(x, y) else {
            return;
        };
        let (r, g, b) = colors::unpack_rgb(color);
        self.data[idx] = r;
        self.data[idx + 1] = g;
        self.data[idx + 2] = b;
        if self.channels == 4 {
            self.data[idx + 3] = 255;
        }
    }

    fn clear(&mut self) {
        let (r, g, b) = colors::unpack_rgb(colors::BACKGROUND);
        for px in self.data.chunks_exact_mut(self.channels as usize) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            if let Some(a) = px.get_mut(3) {
                *a = 255;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_channel_count() {
        let err = ImageSurface::from_raw(vec![0; 8], 2, 2, 2).unwrap_err();
        assert_eq!(err, RasterError::InvalidChannels(2));
    }

    #[test]
    fn rejects_wrong_buffer_length() {
        let err = ImageSurface::from_raw(vec![0; 10], 2, 2, 3).unwrap_err();
        assert_eq!(
            err,
            RasterError::BufferSize {
                expected: 12,
                actual: 10
            }
        );
    }

    #[test]
    fn rgb_write_touches_three_bytes() {
        let mut surface = ImageSurface::from_raw(vec![0; 2 * 2 * 3], 2, 2, 3).unwrap();
        surface.set_pixel(1, 0, colors::RED);
        assert_eq!(surface.pixel(1, 0), Some(&[255u8, 0, 0][..]));
        assert_eq!(surface.pixel(0, 0), Some(&[0u8, 0, 0][..]));
    }

    #[test]
    fn rgba_write_forces_opaque_alpha() {
        let mut surface = ImageSurface::from_raw(vec![0; 2 * 2 * 4], 2, 2, 4).unwrap();
        surface.set_pixel(0, 1, colors::pack_rgb(1, 2, 3));
        assert_eq!(surface.pixel(0, 1), Some(&[1u8, 2, 3, 255][..]));
        // Untouched pixels keep their transparent alpha.
        assert_eq!(surface.pixel(1, 1), Some(&[0u8, 0, 0, 0][..]));
    }

    #[test]
    fn out_of_bounds_is_noop() {
        let mut surface = ImageSurface::from_raw(vec![7; 3 * 3 * 3], 3, 3, 3).unwrap();
        surface.set_pixel(3, 0, colors::RED);
        surface.set_pixel(0, -1, colors::RED);
        assert!(surface.as_raw().iter().all(|&b| b == 7));
    }

    #[test]
    fn clear_paints_background() {
        let mut surface = ImageSurface::from_raw(vec![0; 4], 1, 1, 4).unwrap();
        surface.clear();
        assert_eq!(surface.into_raw(), vec![255, 255, 255, 255]);
    }
}
