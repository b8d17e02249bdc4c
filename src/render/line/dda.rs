//! Digital differential analyzer.

use super::LineRasterizer;
use crate::geometry::Point2D;
use crate::surface::Surface;

/// Same axis choice and direction as [`BruteForceLine`](super::BruteForceLine),
/// but the minor coordinate lives in a float accumulator advanced by the
/// slope each step. No multiply in the loop.
///
/// The accumulator is `f64` and the final step plots `to` itself, so drift
/// over very long lines never moves the far endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct DdaLine;

impl LineRasterizer for DdaLine {
    fn draw_line(&self, surface: &mut dyn Surface, from: Point2D, to: Point2D, color: u32) {
        // i64 so saturated coordinates cannot overflow the deltas.
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);

        if dx.abs() > dy.abs() {
            let x_step = dx.signum() as i32;
            // Slope per signed step, so the loop body is a single add.
            let y_increment = dy as f64 / dx as f64 * x_step as f64;
            let mut y = from.y as f64;
            let mut x = from.x;
            while x != to.x {
                surface.set_pixel(x, y.round() as i32, color);
                x += x_step;
                y += y_increment;
            }
        } else {
            if dy == 0 {
                surface.set_pixel(from.x, from.y, color);
                return;
            }

            let y_step = dy.signum() as i32;
            let x_increment = dx as f64 / dy as f64 * y_step as f64;
            let mut x = from.x as f64;
            let mut y = from.y;
            while y != to.y {
                surface.set_pixel(x.round() as i32, y, color);
                y += y_step;
                x += x_increment;
            }
        }
        surface.set_pixel(to.x, to.y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelRecorder;

    #[test]
    fn steep_negative_line() {
        let mut rec = PixelRecorder::new();
        DdaLine.draw_line(&mut rec, Point2D::new(0, 0), Point2D::new(-2, -4), 0);
        // x accumulates -0.5 per step: 0, -0.5, -1, -1.5, -2
        let expected = [(0, 0), (-1, -1), (-1, -2), (-2, -3), (-2, -4)].map(Point2D::from);
        assert_eq!(rec.pixels(), &expected);
    }

    #[test]
    fn horizontal_line_right_to_left() {
        let mut rec = PixelRecorder::new();
        DdaLine.draw_line(&mut rec, Point2D::new(2, 9), Point2D::new(-1, 9), 0);
        let expected = [(2, 9), (1, 9), (0, 9), (-1, 9)].map(Point2D::from);
        assert_eq!(rec.pixels(), &expected);
    }
}
