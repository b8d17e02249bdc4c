//! Midpoint (Bresenham) circle rasterization.
//!
//! Only the octant from 90° down to 45° is computed: starting at `(0, r)`,
//! x advances one pixel per step and an integer decision variable decides
//! whether y stays put (midpoint inside the circle) or steps down (midpoint
//! on or outside). Each computed `(x, y)` is mirrored into the other seven
//! octants.
//!
//! ```text
//!            (-x, y) | (x, y)
//!        (-y, x)  \  |  /  (y, x)
//!      ------------- c -------------
//!        (-y,-x)  /  |  \  (y,-x)
//!            (-x,-y) | (x,-y)
//! ```
//!
//! Decision variable: `P₀ = 1 − r`, then per step
//! `P += 2x + 1` when `P < 0`, otherwise `y -= 1; P += 2x + 1 − 2y`.
//! The loop ends once `x` reaches `y`, which also bounds it for `r = 0`
//! and `r = 1`.

use crate::error::RasterError;
use crate::geometry::Point2D;
use crate::surface::Surface;

/// Plot the outline of the circle centred on `center` with the given radius.
///
/// A radius of zero plots only the center. Negative radii are rejected.
pub fn draw_circle(
    surface: &mut dyn Surface,
    center: Point2D,
    radius: i32,
    color: u32,
) -> Result<(), RasterError> {
    if radius < 0 {
        return Err(RasterError::InvalidRadius(radius));
    }

    let mut x = 0;
    let mut y = radius;
    let mut p = 1 - radius;

    plot_octants(surface, center, x, y, color);

    while x < y {
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * x + 1 - 2 * y;
        }
        plot_octants(surface, center, x, y, color);
    }

    Ok(())
}

/// Write the eight reflections of the octant point `(x, y)` around `center`.
#[inline]
fn plot_octants(surface: &mut dyn Surface, center: Point2D, x: i32, y: i32, color: u32) {
    let Point2D { x: cx, y: cy } = center;
    surface.set_pixel(cx + x, cy + y, color);
    surface.set_pixel(cx - x, cy + y, color);
    surface.set_pixel(cx + x, cy - y, color);
    surface.set_pixel(cx - x, cy - y, color);
    surface.set_pixel(cx + y, cy + x, color);
    surface.set_pixel(cx - y, cy + x, color);
    surface.set_pixel(cx + y, cy - x, color);
    surface.set_pixel(cx - y, cy - x, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelRecorder;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn circle(cx: i32, cy: i32, radius: i32) -> PixelRecorder {
        let mut rec = PixelRecorder::new();
        draw_circle(&mut rec, Point2D::new(cx, cy), radius, 0).unwrap();
        rec
    }

    #[test]
    fn radius_zero_is_the_center() {
        let rec = circle(12, -4, 0);
        assert_eq!(rec.pixel_set().into_iter().collect::<Vec<_>>(), vec![Point2D::new(12, -4)]);
    }

    #[test]
    fn radius_one_is_a_plus_sign() {
        let rec = circle(0, 0, 1);
        let expected = [(0, 1), (0, -1), (1, 0), (-1, 0)].map(Point2D::from);
        assert_eq!(rec.pixel_set(), BTreeSet::from(expected));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let mut rec = PixelRecorder::new();
        let err = draw_circle(&mut rec, Point2D::ORIGIN, -3, 0).unwrap_err();
        assert_eq!(err, RasterError::InvalidRadius(-3));
        assert!(rec.is_empty());
    }

    #[test]
    fn eight_way_symmetry_at_fifty_fifty() {
        let pixels = circle(50, 50, 10).pixel_set();
        for p in &pixels {
            let (x, y) = (p.x, p.y);
            for mirrored in [
                (100 - x, y),
                (x, 100 - y),
                (100 - x, 100 - y),
                (y, x),
                (100 - y, x),
                (y, 100 - x),
                (100 - y, 100 - x),
            ] {
                assert!(
                    pixels.contains(&Point2D::from(mirrored)),
                    "{mirrored:?} missing for {p:?}"
                );
            }
        }
    }

    #[test]
    fn cardinal_points_are_on_the_circle() {
        let rec = circle(50, 50, 10);
        for (x, y) in [(60, 50), (40, 50), (50, 60), (50, 40)] {
            assert!(rec.contains(x, y));
        }
    }

    proptest! {
        #[test]
        fn pixels_lie_near_the_radius(cx in -100i32..100, cy in -100i32..100, r in 0i32..200) {
            let rec = circle(cx, cy, r);
            for p in rec.pixels() {
                let dx = (p.x - cx) as f64;
                let dy = (p.y - cy) as f64;
                let distance = (dx * dx + dy * dy).sqrt();
                prop_assert!((distance - r as f64).abs() < 1.0);
            }
        }

        #[test]
        fn output_is_symmetric(r in 0i32..150) {
            let pixels = circle(0, 0, r).pixel_set();
            for p in &pixels {
                prop_assert!(pixels.contains(&Point2D::new(-p.x, p.y)));
                prop_assert!(pixels.contains(&Point2D::new(p.x, -p.y)));
                prop_assert!(pixels.contains(&Point2D::new(p.y, p.x)));
            }
        }
    }
}
