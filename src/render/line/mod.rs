//! Line scan-conversion algorithms.
//!
//! Three interchangeable strategies turn two integer endpoints into a run of
//! `set_pixel` calls. All of them share one coverage contract:
//!
//! - both endpoints are plotted exactly;
//! - every unit step along the major axis emits exactly one pixel, so the
//!   line has no gaps whatever its slope sign or magnitude;
//! - horizontal, vertical and zero-length lines are handled without dividing
//!   by zero.
//!
//! | Algorithm | Minor coordinate | Arithmetic | Direction |
//! |-----------|------------------|------------|-----------|
//! | [`BruteForceLine`] | recomputed from `y = y1 + m·(x − x1)` each step | float, one multiply per step | first → second endpoint |
//! | [`DdaLine`] | running accumulator `y += m` | float, add only | first → second endpoint |
//! | [`BresenhamLine`] | integer error term | integer only | normalized left → right |
//!
//! The float variants round to nearest; on exact half-pixel ties they can
//! disagree with Bresenham by one pixel in the minor coordinate. Axis-aligned
//! and 45° lines produce identical pixels under all three.
//!
//! Coordinates are not clipped here. Pixels outside the target are dropped by
//! the [`Surface`] itself.

mod bresenham;
mod brute_force;
mod dda;

pub use bresenham::BresenhamLine;
pub use brute_force::BruteForceLine;
pub use dda::DdaLine;

use crate::geometry::Point2D;
use crate::surface::Surface;

/// A line scan-conversion strategy.
pub trait LineRasterizer {
    /// Plot the segment `from`–`to` into `surface`.
    fn draw_line(&self, surface: &mut dyn Surface, from: Point2D, to: Point2D, color: u32);
}

/// Which line algorithm the renderer uses.
///
/// This is caller-selected state, not computed. Resolve it to a rasterizer
/// once with [`LineAlgorithm::rasterizer`] and reuse the result for a batch
/// of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineAlgorithm {
    /// Recompute the minor coordinate from the line equation every step.
    #[default]
    BruteForce,
    /// Digital differential analyzer: incremental float stepping.
    Dda,
    /// Integer-only decision variable.
    Bresenham,
}

impl LineAlgorithm {
    pub const ALL: [LineAlgorithm; 3] = [
        LineAlgorithm::BruteForce,
        LineAlgorithm::Dda,
        LineAlgorithm::Bresenham,
    ];

    pub fn rasterizer(self) -> &'static dyn LineRasterizer {
        match self {
            LineAlgorithm::BruteForce => &BruteForceLine,
            LineAlgorithm::Dda => &DdaLine,
            LineAlgorithm::Bresenham => &BresenhamLine,
        }
    }

    /// Key that selects this algorithm in the live window.
    pub fn hotkey(self) -> char {
        match self {
            LineAlgorithm::BruteForce => 'F',
            LineAlgorithm::Dda => 'D',
            LineAlgorithm::Bresenham => 'B',
        }
    }
}

impl std::fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineAlgorithm::BruteForce => write!(f, "Brute-Force"),
            LineAlgorithm::Dda => write!(f, "DDA"),
            LineAlgorithm::Bresenham => write!(f, "Bresenham"),
        }
    }
}

/// Draw one line with the given algorithm.
#[inline]
pub fn draw_line(
    algorithm: LineAlgorithm,
    surface: &mut dyn Surface,
    from: Point2D,
    to: Point2D,
    color: u32,
) {
    algorithm.rasterizer().draw_line(surface, from, to, color);
}
