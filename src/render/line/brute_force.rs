//! Line drawing straight from the line equation.

use super::LineRasterizer;
use crate::geometry::Point2D;
use crate::surface::Surface;

/// Steps the major axis one pixel at a time from the first endpoint toward
/// the second and evaluates `y = y1 + m·(x − x1)` (or its x analogue) at
/// every step, rounding to the nearest pixel.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForceLine;

impl LineRasterizer for BruteForceLine {
    fn draw_line(&self, surface: &mut dyn Surface, from: Point2D, to: Point2D, color: u32) {
        // i64 so saturated coordinates cannot overflow the deltas.
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);

        if dx.abs() > dy.abs() {
            // Shallow: x is the major axis, dx is never zero here.
            let m = dy as f64 / dx as f64;
            let x_step = dx.signum() as i32;
            let mut x = from.x;
            loop {
                let run = i64::from(x) - i64::from(from.x);
                let y = from.y as f64 + m * run as f64;
                surface.set_pixel(x, y.round() as i32, color);
                if x == to.x {
                    break;
                }
                x += x_step;
            }
        } else {
            if dy == 0 {
                // |dx| <= |dy| == 0: a single point.
                surface.set_pixel(from.x, from.y, color);
                return;
            }

            let m_inv = dx as f64 / dy as f64;
            let y_step = dy.signum() as i32;
            let mut y = from.y;
            loop {
                let rise = i64::from(y) - i64::from(from.y);
                let x = from.x as f64 + m_inv * rise as f64;
                surface.set_pixel(x.round() as i32, y, color);
                if y == to.y {
                    break;
                }
                y += y_step;
            }
        }
    }
}
