//! Value types shared by the rasterizers and the wireframe pipeline.

use std::ops::{Add, Sub};

/// A discrete screen coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, rounded to the nearest integer.
    pub fn rounded_distance(&self, other: Self) -> i32 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt().round() as i32
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// A model-space vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Rotates the point about the vertical (Y) axis, in the horizontal XZ plane.
    ///
    /// `x' = x·cos θ − z·sin θ`, `y' = y`, `z' = x·sin θ + z·cos θ`.
    /// Returns a new point; `self` is left untouched.
    pub fn rotate_vertical(&self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.z * sin,
            y: self.y,
            z: self.x * sin + self.z * cos,
        }
    }
}

// Indices into a vertex list. Validity is checked by `WireframeModel::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Same edge with endpoints ordered so `a <= b`; used for deduplication.
    pub fn normalized(&self) -> Self {
        if self.a <= self.b {
            *self
        } else {
            Self {
                a: self.b,
                b: self.a,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn rotate_vertical_zero_is_identity() {
        let p = Point3D::new(3.0, -4.0, 5.0);
        let r = p.rotate_vertical(0.0);
        assert_relative_eq!(r.x, 3.0);
        assert_relative_eq!(r.y, -4.0);
        assert_relative_eq!(r.z, 5.0);
    }

    #[test]
    fn rotate_vertical_quarter_turn() {
        // x' = x cos - z sin = -z at 90 degrees
        let p = Point3D::new(1.0, 2.0, 3.0);
        let r = p.rotate_vertical(FRAC_PI_2);
        assert_relative_eq!(r.x, -3.0, epsilon = 1e-5);
        assert_relative_eq!(r.y, 2.0);
        assert_relative_eq!(r.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn rotate_vertical_preserves_source() {
        let p = Point3D::new(20.0, 5.0, -10.0);
        let _ = p.rotate_vertical(1.2);
        assert_eq!(p, Point3D::new(20.0, 5.0, -10.0));
    }

    #[test]
    fn rounded_distance_matches_pythagoras() {
        let a = Point2D::new(10, 10);
        assert_eq!(a.rounded_distance(Point2D::new(13, 14)), 5);
        // sqrt(2) = 1.414 -> 1
        assert_eq!(a.rounded_distance(Point2D::new(11, 11)), 1);
        // sqrt(8) = 2.83 -> 3
        assert_eq!(a.rounded_distance(Point2D::new(12, 12)), 3);
        assert_eq!(a.rounded_distance(a), 0);
    }

    #[test]
    fn edge_normalized_orders_endpoints() {
        assert_eq!(Edge::new(4, 1).normalized(), Edge::new(1, 4));
        assert_eq!(Edge::new(1, 4).normalized(), Edge::new(1, 4));
    }
}
