//! Rotation and orthographic projection of model vertices.
//!
//! Each vertex is rotated about the vertical axis by the object's angle,
//! its depth is dropped (no perspective divide) and the result is offset by
//! the object's screen anchor and truncated to integer pixels:
//!
//! ```text
//! x' = x·cos θ − z·sin θ
//! y' = y
//! screen = (trunc(x' + anchor.x), trunc(y' + anchor.y))
//! ```

use crate::geometry::{Point2D, Point3D};
use crate::model::WireframeModel;
use crate::transform::AnimationState;

/// One frame's projection parameters for one object.
///
/// Sine and cosine are computed once on construction and reused for every
/// vertex.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    sin: f32,
    cos: f32,
    anchor: Point2D,
}

impl Projection {
    pub fn new(angle: f32, anchor: Point2D) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { sin, cos, anchor }
    }

    pub fn from_state(state: &AnimationState) -> Self {
        Self::new(state.angle(), state.anchor())
    }

    pub fn anchor(&self) -> Point2D {
        self.anchor
    }

    /// Project a single vertex to screen space.
    #[inline]
    pub fn project(&self, vertex: Point3D) -> Point2D {
        let x = vertex.x * self.cos - vertex.z * self.sin;
        let y = vertex.y;
        // `as` truncates toward zero.
        Point2D::new(
            (x + self.anchor.x as f32) as i32,
            (y + self.anchor.y as f32) as i32,
        )
    }

    /// Like [`project`](Projection::project), but `None` when the screen
    /// position does not fit in `i32` and the cast would saturate.
    pub fn project_checked(&self, vertex: Point3D) -> Option<Point2D> {
        let x = vertex.x * self.cos - vertex.z * self.sin + self.anchor.x as f32;
        let y = vertex.y + self.anchor.y as f32;
        let fits = |v: f32| (MIN_SCREEN..MAX_SCREEN).contains(&v);
        (fits(x) && fits(y)).then(|| Point2D::new(x as i32, y as i32))
    }

    /// Project every vertex of `model`, in vertex order. Vertices that land
    /// outside the representable screen range are `None`.
    pub fn project_model(&self, model: &WireframeModel) -> Vec<Option<Point2D>> {
        model
            .vertices()
            .iter()
            .map(|&v| self.project_checked(v))
            .collect()
    }
}

// Half-open: 2^31 is not an i32. NaN fails both bounds.
const MIN_SCREEN: f32 = i32::MIN as f32;
const MAX_SCREEN: f32 = -(i32::MIN as f32);
