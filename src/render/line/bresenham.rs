//! Bresenham's line algorithm, integer arithmetic only.

use super::LineRasterizer;
use crate::geometry::Point2D;
use crate::surface::Surface;

/// Reflects steep lines across `y = x` so they become shallow, orders the
/// endpoints left to right, then walks x while an integer error term decides
/// when to step y.
///
/// The error starts at `dx / 2` and loses `dy` every column. When it drops
/// below zero the line has drifted half a pixel: step y toward the far
/// endpoint and pay back `dx`. Steep lines are un-reflected at the moment a
/// pixel is emitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct BresenhamLine;

impl LineRasterizer for BresenhamLine {
    fn draw_line(&self, surface: &mut dyn Surface, from: Point2D, to: Point2D, color: u32) {
        let (mut x0, mut y0, mut x1, mut y1) = (from.x, from.y, to.x, to.y);

        // Deltas in i64 so saturated coordinates cannot overflow.
        let span = |a: i32, b: i32| i64::from(b) - i64::from(a);

        let steep = span(y0, y1).abs() > span(x0, x1).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = span(x0, x1);
        let dy = span(y0, y1).abs();
        let y_step = if y0 < y1 { 1 } else { -1 };

        let mut error = dx / 2;
        let mut y = y0;
        for x in x0..=x1 {
            if steep {
                surface.set_pixel(y, x, color);
            } else {
                surface.set_pixel(x, y, color);
            }

            error -= dy;
            if error < 0 {
                y += y_step;
                error += dx;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelRecorder;

    #[test]
    fn shallow_line_breaks_ties_low() {
        let mut rec = PixelRecorder::new();
        BresenhamLine.draw_line(&mut rec, Point2D::new(0, 0), Point2D::new(4, 2), 0);
        let expected = [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)].map(Point2D::from);
        assert_eq!(rec.pixels(), &expected);
    }

    #[test]
    fn steep_line_is_unreflected() {
        let mut rec = PixelRecorder::new();
        BresenhamLine.draw_line(&mut rec, Point2D::new(0, 0), Point2D::new(1, 3), 0);
        // Walks y (reflected x) from 0 to 3, emitting (x, y) in screen space.
        let expected = [(0, 0), (0, 1), (1, 2), (1, 3)].map(Point2D::from);
        assert_eq!(rec.pixels(), &expected);
    }

    #[test]
    fn zero_length_line() {
        let mut rec = PixelRecorder::new();
        BresenhamLine.draw_line(&mut rec, Point2D::new(-7, 3), Point2D::new(-7, 3), 0);
        assert_eq!(rec.pixels(), &[Point2D::new(-7, 3)]);
    }
}
