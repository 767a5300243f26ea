use thiserror::Error;

use crate::mesh::Topology;

/// Top-level error type for mesh shape generation.
#[derive(Debug, Error)]
pub enum MeshShapeError {
    /// A stroke was requested with a topology that cannot carry a ribbon.
    #[error("unsupported stroke topology {0:?}: expected TriangleStrip or Triangles")]
    UnsupportedTopology(Topology),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to shape parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to filling a boundary.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`MeshShapeError`].
pub type Result<T> = std::result::Result<T, MeshShapeError>;
