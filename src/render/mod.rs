//! Rasterization primitives and the surfaces they draw into.

pub mod brush;
pub mod circle;
pub mod framebuffer;
pub mod image_surface;
pub mod line;
pub mod renderer;

pub use brush::Brush;
pub use circle::draw_circle;
pub use framebuffer::FrameBuffer;
pub use image_surface::ImageSurface;
pub use line::{draw_line, BresenhamLine, BruteForceLine, DdaLine, LineAlgorithm, LineRasterizer};
pub use renderer::Renderer;
