//! Start-up parameters for the live engine.

use std::path::PathBuf;

use crate::geometry::Point2D;
use crate::model::Stroke;
use crate::render::line::LineAlgorithm;

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_FPS: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    /// Frames per second the live loop aims for.
    pub fps: u32,
    pub algorithm: LineAlgorithm,

    /// Half the cube's edge length.
    pub cube_half: f32,
    pub cube_anchor: Point2D,
    pub cube_velocity: Point2D,
    /// Radians per tick.
    pub cube_spin: f32,
    /// Distance from each surface edge at which the cube bounces.
    pub bounce_margin: i32,

    pub spine_anchor: Point2D,
    /// Spine spin as a multiple of the cube's spin.
    pub spine_spin_ratio: f32,
    pub spine_stroke: Stroke,

    /// Optional OBJ model drawn in place of the spine.
    pub model_path: Option<PathBuf>,
    pub model_scale: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps: DEFAULT_FPS,
            algorithm: LineAlgorithm::default(),
            cube_half: 20.0,
            cube_anchor: Point2D::new(200, 200),
            cube_velocity: Point2D::new(1, 1),
            cube_spin: 0.015,
            bounce_margin: 40,
            spine_anchor: Point2D::new(400, 300),
            spine_spin_ratio: -0.5,
            spine_stroke: Stroke::Hairline,
            model_path: None,
            model_scale: 50.0,
        }
    }
}

impl EngineConfig {
    pub fn spine_spin(&self) -> f32 {
        self.cube_spin * self.spine_spin_ratio
    }
}
