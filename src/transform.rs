//! Per-object animation state.
//!
//! An [`AnimationState`] holds the rotation angle and the screen-space anchor
//! of one animated wireframe. The driver advances it once per tick; the
//! projection stage only reads it.

use std::f32::consts::TAU;

use crate::geometry::Point2D;

/// Rectangle the anchor bounces inside. Reaching or passing an edge flips
/// the velocity component for that axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BounceArea {
    pub min: Point2D,
    pub max: Point2D,
}

impl BounceArea {
    pub fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// The area `margin` pixels inside a `width` by `height` surface.
    pub fn inset(width: u32, height: u32, margin: i32) -> Self {
        Self {
            min: Point2D::new(margin, margin),
            max: Point2D::new(width as i32 - margin, height as i32 - margin),
        }
    }
}

/// Angle, anchor and velocity of one animated object.
///
/// Mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// state.set_anchor(Point2D::new(200, 200)).set_velocity(Point2D::new(1, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    angle: f32,
    spin: f32, // radians added per tick
    anchor: Point2D,
    velocity: Point2D,
    bounds: Option<BounceArea>,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            spin: 0.0,
            anchor: Point2D::ORIGIN,
            velocity: Point2D::ORIGIN,
            bounds: None,
        }
    }
}

impl AnimationState {
    /// A stationary object at `anchor`.
    pub fn new(anchor: Point2D) -> Self {
        Self {
            anchor,
            ..Self::default()
        }
    }

    // ============ Rotation ============

    /// Current angle in radians, always within `[0, 2π)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) -> &mut Self {
        self.angle = angle.rem_euclid(TAU);
        self
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn set_spin(&mut self, spin: f32) -> &mut Self {
        self.spin = spin;
        self
    }

    // ============ Position ============

    pub fn anchor(&self) -> Point2D {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Point2D) -> &mut Self {
        self.anchor = anchor;
        self
    }

    pub fn velocity(&self) -> Point2D {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Point2D) -> &mut Self {
        self.velocity = velocity;
        self
    }

    pub fn bounds(&self) -> Option<BounceArea> {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: BounceArea) -> &mut Self {
        self.bounds = Some(bounds);
        self
    }

    // ============ Tick ============

    /// Advance one tick: spin, move by the velocity, then bounce off the
    /// bounds if the anchor has reached them.
    ///
    /// The angle is wrapped into `[0, 2π)`. Rotation is periodic, so this
    /// changes nothing on screen but keeps the float from growing without
    /// limit over long runs.
    pub fn advance(&mut self) {
        self.angle = (self.angle + self.spin).rem_euclid(TAU);
        self.anchor = self.anchor + self.velocity;

        if let Some(area) = self.bounds {
            if self.anchor.x <= area.min.x || self.anchor.x >= area.max.x {
                self.velocity.x = -self.velocity.x;
            }
            if self.anchor.y <= area.min.y || self.anchor.y >= area.max.y {
                self.velocity.y = -self.velocity.y;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default() {
        let s = AnimationState::default();
        assert_eq!(s.angle(), 0.0);
        assert_eq!(s.anchor(), Point2D::ORIGIN);
        assert_eq!(s.bounds(), None);
    }

    #[test]
    fn test_fluent_api() {
        let mut s = AnimationState::new(Point2D::new(200, 200));
        s.set_velocity(Point2D::new(1, -1)).set_spin(0.015);

        s.advance();
        assert_eq!(s.anchor(), Point2D::new(201, 199));
        assert_relative_eq!(s.angle(), 0.015);
    }

    #[test]
    fn stationary_object_only_spins() {
        let mut s = AnimationState::new(Point2D::new(400, 300));
        s.set_spin(-0.0075);
        s.advance();
        assert_eq!(s.anchor(), Point2D::new(400, 300));
        assert_relative_eq!(s.angle(), TAU - 0.0075, epsilon = 1e-5);
    }

    #[test]
    fn bounces_at_the_margin() {
        let mut s = AnimationState::new(Point2D::new(558, 41));
        s.set_velocity(Point2D::new(1, -1))
            .set_bounds(BounceArea::inset(600, 600, 40));

        s.advance(); // (559, 40): y hits the top margin
        assert_eq!(s.velocity(), Point2D::new(1, 1));
        s.advance(); // (560, 41): x hits the right margin
        assert_eq!(s.anchor(), Point2D::new(560, 41));
        assert_eq!(s.velocity(), Point2D::new(-1, 1));
        s.advance();
        assert_eq!(s.anchor(), Point2D::new(559, 42));
    }

    #[test]
    fn angle_stays_wrapped() {
        let mut s = AnimationState::default();
        s.set_spin(1.0);
        for _ in 0..10_000 {
            s.advance();
        }
        assert!(s.angle() >= 0.0 && s.angle() < TAU);
    }

    #[test]
    fn set_angle_wraps() {
        let mut s = AnimationState::default();
        s.set_angle(TAU + 0.5);
        assert_relative_eq!(s.angle(), 0.5, epsilon = 1e-5);
    }
}
