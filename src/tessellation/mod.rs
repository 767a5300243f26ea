mod cdt;
mod stroke_style;
mod tessellate_stroke;

pub use cdt::CdtTessellator;
pub use stroke_style::StrokeStyle;
pub use tessellate_stroke::{BoundaryKind, TessellateStroke};

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::Mesh;

/// One drawing command of a boundary path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new sub-path at the point.
    MoveTo(Point3),
    /// Adds a straight edge from the current point.
    LineTo(Point3),
    /// Connects the current point back to the sub-path start.
    Close,
}

/// Builds the commands tracing a single closed boundary through `points`.
#[must_use]
pub fn closed_path(points: &[Point3]) -> Vec<PathCommand> {
    let mut commands = Vec::with_capacity(points.len() + 1);
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        commands.push(PathCommand::MoveTo(*first));
        commands.extend(iter.map(|p| PathCommand::LineTo(*p)));
        commands.push(PathCommand::Close);
    }
    commands
}

/// Fills closed boundaries with triangles.
///
/// Implementations return a mesh with [`Topology::Triangles`](crate::mesh::Topology)
/// and may leave the normals empty; callers attach their own.
pub trait PathTessellator {
    /// Triangulates the region enclosed by `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be filled.
    fn tessellate(&self, path: &[PathCommand]) -> Result<Mesh>;
}
