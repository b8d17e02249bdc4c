//! Frame composition.
//!
//! [`Renderer`] draws the committed primitives and the projected wireframes
//! into any [`Surface`], using the active line algorithm for every line and
//! edge. Circles always use the midpoint rasterizer.

use super::brush::Brush;
use super::circle::draw_circle;
use super::line::{LineAlgorithm, LineRasterizer};
use crate::colors;
use crate::error::RasterError;
use crate::model::{Stroke, WireframeModel};
use crate::projection::Projection;
use crate::scene::PrimitiveStore;
use crate::surface::Surface;

pub struct Renderer {
    algorithm: LineAlgorithm,
    color: u32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(LineAlgorithm::default())
    }
}

impl Renderer {
    pub fn new(algorithm: LineAlgorithm) -> Self {
        Self {
            algorithm,
            color: colors::FOREGROUND,
        }
    }

    pub fn algorithm(&self) -> LineAlgorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: LineAlgorithm) {
        self.algorithm = algorithm;
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn set_color(&mut self, color: u32) {
        self.color = color;
    }

    /// Replay every committed line and circle.
    pub fn draw_primitives(
        &self,
        surface: &mut dyn Surface,
        store: &PrimitiveStore,
    ) -> Result<(), RasterError> {
        let lines = self.algorithm.rasterizer();
        for line in store.lines() {
            lines.draw_line(surface, line.start(), line.end(), self.color);
        }
        for circle in store.circles() {
            draw_circle(surface, circle.center(), circle.radius(), self.color)?;
        }
        Ok(())
    }

    /// Project `model` once and draw each of its edges.
    pub fn draw_wireframe(
        &self,
        surface: &mut dyn Surface,
        model: &WireframeModel,
        projection: &Projection,
    ) {
        let points = projection.project_model(model);
        let lines = self.algorithm.rasterizer();

        for edge in model.edges() {
            // An endpoint past the i32 range would saturate into a line
            // billions of pixels long.
            let (Some(from), Some(to)) = (points[edge.a], points[edge.b]) else {
                continue;
            };
            match model.stroke() {
                Stroke::Hairline => lines.draw_line(surface, from, to, self.color),
                Stroke::Tapered { .. } => {
                    let mut brush = Brush::new(surface, model.thickness_at(edge.a));
                    lines.draw_line(&mut brush, from, to, self.color);
                }
            }
        }
    }
}
