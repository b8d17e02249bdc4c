//! Image-file line tool: load an image, draw one brute-force line into it
//! in place, save the result.

use std::path::Path;

use tracing::info;

use crate::error::BatchError;
use crate::geometry::Point2D;
use crate::render::line::{BruteForceLine, LineRasterizer};
use crate::render::ImageSurface;

/// Draw a single line onto an already decoded image.
pub fn draw_line_on_surface(image: &mut ImageSurface, from: Point2D, to: Point2D, color: u32) {
    BruteForceLine.draw_line(image, from, to, color);
}

/// Load `input`, draw the line `from`–`to` in `color` and write the result
/// to `output`. The output format follows its file extension.
pub fn draw_line_on_image(
    input: &Path,
    output: &Path,
    from: Point2D,
    to: Point2D,
    color: u32,
) -> Result<(), BatchError> {
    let mut image = ImageSurface::open(input)?;
    info!(
        path = %input.display(),
        width = image.width(),
        height = image.height(),
        channels = image.channels(),
        "image loaded"
    );

    draw_line_on_surface(&mut image, from, to, color);

    image.save(output)?;
    info!(path = %output.display(), "image saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn line_on_rgba_forces_alpha() {
        let mut image = ImageSurface::from_raw(vec![0; 8 * 8 * 4], 8, 8, 4).unwrap();
        draw_line_on_surface(&mut image, Point2D::new(0, 0), Point2D::new(7, 7), colors::RED);

        for i in 0..8 {
            assert_eq!(image.pixel(i, i), Some(&[255, 0, 0, 255][..]));
        }
        assert_eq!(image.pixel(1, 0), Some(&[0, 0, 0, 0][..]));
    }

    #[test]
    fn round_trips_through_png() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");

        ImageSurface::from_raw(vec![255; 16 * 4 * 3], 16, 4, 3)
            .unwrap()
            .save(&input)
            .unwrap();

        draw_line_on_image(
            &input,
            &output,
            Point2D::new(0, 2),
            Point2D::new(20, 2),
            colors::RED,
        )
        .unwrap();

        let result = ImageSurface::open(&output).unwrap();
        assert_eq!(result.channels(), 3);
        for x in 0..16 {
            assert_eq!(result.pixel(x, 2), Some(&[255, 0, 0][..]));
        }
        assert_eq!(result.pixel(0, 1), Some(&[255, 255, 255][..]));
    }

    #[test]
    fn missing_input_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = draw_line_on_image(
            &dir.path().join("absent.png"),
            &dir.path().join("out.png"),
            Point2D::ORIGIN,
            Point2D::new(1, 1),
            colors::RED,
        )
        .unwrap_err();
        assert!(matches!(err, BatchError::Decode { .. }));
    }
}
