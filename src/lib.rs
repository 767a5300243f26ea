//! Outline, stroke and face meshes for planar shapes placed in 3D space.
//!
//! Build a [`Shape`] from one of the records in [`shape`], orient it with an
//! anchor and rotation, then ask for its [`outline`](Shape::outline),
//! [`stroke_outline`](Shape::stroke_outline) or [`face`](Shape::face).

pub mod error;
pub mod geometry;
pub mod math;
pub mod mesh;
pub mod shape;
pub mod tessellation;

pub use error::{MeshShapeError, Result};
pub use mesh::{Mesh, Topology};
pub use shape::{Shape, ShapeKind};
