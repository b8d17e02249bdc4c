//! User-committed primitives and the two-click gesture that creates them.
//!
//! The first click of a gesture fixes a start point (a line's first endpoint
//! or a circle's center); the second click commits the primitive to the
//! [`PrimitiveStore`]. The store is append-only and is replayed in full every
//! frame.

use tracing::info;

use crate::error::RasterError;
use crate::geometry::Point2D;

/// How two-click gestures are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawMode {
    #[default]
    Line,
    Circle,
}

impl DrawMode {
    pub fn hotkey(self) -> char {
        match self {
            DrawMode::Line => 'L',
            DrawMode::Circle => 'C',
        }
    }
}

impl std::fmt::Display for DrawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawMode::Line => write!(f, "Line"),
            DrawMode::Circle => write!(f, "Circle"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Line {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn between(start: Point2D, end: Point2D) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    pub fn start(&self) -> Point2D {
        Point2D::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point2D {
        Point2D::new(self.x2, self.y2)
    }
}

/// A circle outline. The radius is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    cx: i32,
    cy: i32,
    radius: i32,
}

impl Circle {
    pub fn new(cx: i32, cy: i32, radius: i32) -> Result<Self, RasterError> {
        if radius < 0 {
            return Err(RasterError::InvalidRadius(radius));
        }
        Ok(Self { cx, cy, radius })
    }

    /// Circle centred on `center` passing (to the nearest pixel) through `rim`.
    pub fn through(center: Point2D, rim: Point2D) -> Self {
        Self {
            cx: center.x,
            cy: center.y,
            radius: center.rounded_distance(rim),
        }
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.cx, self.cy)
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Line(Line),
    Circle(Circle),
}

/// Append-only record of committed primitives.
#[derive(Debug, Default, Clone)]
pub struct PrimitiveStore {
    lines: Vec<Line>,
    circles: Vec<Circle>,
}

impl PrimitiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: Primitive) {
        match primitive {
            Primitive::Line(line) => self.lines.push(line),
            Primitive::Circle(circle) => self.circles.push(circle),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.lines.len() + self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.circles.is_empty()
    }
}

/// State of the two-click gesture.
#[derive(Debug, Default, Clone)]
pub struct Gesture {
    mode: DrawMode,
    pending: Option<Point2D>,
}

impl Gesture {
    pub fn new(mode: DrawMode) -> Self {
        Self {
            mode,
            pending: None,
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Switch modes. A pending start point survives the switch and is
    /// interpreted under the new mode on the next click.
    pub fn set_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
    }

    pub fn pending(&self) -> Option<Point2D> {
        self.pending
    }

    /// Feed one pointer click; returns the primitive it completes, if any.
    pub fn click(&mut self, at: Point2D) -> Option<Primitive> {
        let Some(start) = self.pending.take() else {
            info!(mode = %self.mode, x = at.x, y = at.y, "gesture start");
            self.pending = Some(at);
            return None;
        };

        let primitive = match self.mode {
            DrawMode::Line => Primitive::Line(Line::between(start, at)),
            DrawMode::Circle => Primitive::Circle(Circle::through(start, at)),
        };
        match &primitive {
            Primitive::Line(line) => info!(?line, "line committed"),
            Primitive::Circle(circle) => {
                info!(?circle, radius = circle.radius(), "circle committed")
            }
        }
        Some(primitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_clicks_make_a_line() {
        let mut gesture = Gesture::default();
        assert_eq!(gesture.click(Point2D::new(10, 10)), None);
        assert_eq!(gesture.pending(), Some(Point2D::new(10, 10)));
        assert_eq!(
            gesture.click(Point2D::new(50, 30)),
            Some(Primitive::Line(Line::new(10, 10, 50, 30)))
        );
        assert_eq!(gesture.pending(), None);
    }

    #[test]
    fn circle_radius_is_rounded_distance() {
        let mut gesture = Gesture::new(DrawMode::Circle);
        gesture.click(Point2D::new(100, 100));
        let committed = gesture.click(Point2D::new(103, 104)).unwrap();
        assert_eq!(committed, Primitive::Circle(Circle::new(100, 100, 5).unwrap()));
    }

    #[test]
    fn same_point_twice_gives_radius_zero() {
        let mut gesture = Gesture::new(DrawMode::Circle);
        gesture.click(Point2D::new(7, 7));
        let Some(Primitive::Circle(circle)) = gesture.click(Point2D::new(7, 7)) else {
            panic!("expected a circle");
        };
        assert_eq!(circle.radius(), 0);
    }

    #[test]
    fn pending_point_survives_mode_switch() {
        let mut gesture = Gesture::new(DrawMode::Line);
        gesture.click(Point2D::new(0, 0));
        gesture.set_mode(DrawMode::Circle);
        assert!(matches!(
            gesture.click(Point2D::new(3, 4)),
            Some(Primitive::Circle(c)) if c.radius() == 5
        ));
    }

    #[test]
    fn negative_radius_rejected() {
        assert_eq!(Circle::new(0, 0, -1), Err(RasterError::InvalidRadius(-1)));
    }

    #[test]
    fn store_appends_in_order() {
        let mut store = PrimitiveStore::new();
        assert!(store.is_empty());
        store.push(Primitive::Line(Line::new(0, 0, 1, 1)));
        store.push(Primitive::Circle(Circle::new(5, 5, 2).unwrap()));
        store.push(Primitive::Line(Line::new(2, 2, 3, 3)));

        assert_eq!(store.len(), 3);
        assert_eq!(store.lines(), &[Line::new(0, 0, 1, 1), Line::new(2, 2, 3, 3)]);
        assert_eq!(store.circles().len(), 1);
    }
}
