//! Interactive 2D line and circle rasterization with animated wireframes.
//!
//! Every drawing routine writes through the small [`Surface`] trait, so the
//! same code serves the live SDL2 window, an in-memory [`FrameBuffer`] and a
//! decoded image file.
//!
//! # Quick Start
//!
//! ```ignore
//! use pixmanip::prelude::*;
//!
//! let config = EngineConfig::default();
//! let mut window = Window::new("pixmanip", config.width, config.height)?;
//! let mut engine = Engine::new(&config)?;
//! engine.run_interactive(&mut window, &mut FrameLimiter::new(config.fps))?;
//! ```

// Public API - exposed to library consumers
pub mod batch;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod model;
pub mod projection;
pub mod render;
pub mod scene;
pub mod surface;
pub mod timing;
pub mod transform;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::EngineConfig;
pub use engine::{AnimatedObject, Engine};
pub use error::{BatchError, EngineError, LoadError, RasterError, SurfaceError};
pub use geometry::{Edge, Point2D, Point3D};
pub use model::{Stroke, WireframeModel};
pub use projection::Projection;
pub use render::{FrameBuffer, ImageSurface, LineAlgorithm};
pub use surface::Surface;
pub use transform::AnimationState;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use pixmanip::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::config::EngineConfig;
    pub use crate::engine::Engine;

    // Geometry & models
    pub use crate::geometry::{Point2D, Point3D};
    pub use crate::model::{Stroke, WireframeModel};
    pub use crate::scene::{Circle, DrawMode, Line};

    // Rendering
    pub use crate::render::{draw_circle, draw_line, FrameBuffer, LineAlgorithm};
    pub use crate::surface::Surface;

    // Window & Input
    pub use crate::input::{InputEvent, InputSource};
    pub use crate::timing::{FrameLimiter, FramePacer};
    pub use crate::window::Window;
}
