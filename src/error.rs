//! Error types for the rasterization core and its collaborators.

use std::path::PathBuf;

/// Invalid geometry or buffer layout handed to the core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    #[error("circle radius must be non-negative, got {0}")]
    InvalidRadius(i32),

    #[error("edge {edge} references vertices ({a}, {b}) but the model has {vertex_count}")]
    EdgeOutOfRange {
        edge: usize,
        a: usize,
        b: usize,
        vertex_count: usize,
    },

    #[error("edge {edge} connects vertex {vertex} to itself")]
    DegenerateEdge { edge: usize, vertex: usize },

    #[error("unsupported channel count {0}, expected 3 or 4")]
    InvalidChannels(u8),

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Failure reported by a live surface. SDL2 reports its errors as strings.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("display error: {0}")]
    Display(String),
}

impl From<String> for SurfaceError {
    fn from(message: String) -> Self {
        SurfaceError::Display(message)
    }
}

/// Failure loading a wireframe model from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read OBJ file {path:?}: {source}")]
    Obj {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("OBJ file {0:?} contains no edges")]
    Empty(PathBuf),

    #[error(transparent)]
    Geometry(#[from] RasterError),
}

/// Failure in the image-file line tool.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("could not load image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("could not save image to {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Failure while driving frames.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
