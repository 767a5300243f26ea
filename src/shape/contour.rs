use crate::error::Result;
use crate::geometry::Polyline;
use crate::math::{newell_normal, Point3};
use crate::mesh::Mesh;
use crate::tessellation::{closed_path, PathTessellator};

use super::Profile;

/// A free-form boundary taken verbatim from a [`Polyline`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour {
    polyline: Polyline,
}

impl Contour {
    /// Wraps a polyline; its points and closure flag are used as-is.
    #[must_use]
    pub fn new(polyline: Polyline) -> Self {
        Self { polyline }
    }

    /// Returns the source polyline.
    #[must_use]
    pub fn polyline(&self) -> &Polyline {
        &self.polyline
    }

    /// Returns the source polyline for reconfiguration.
    pub fn polyline_mut(&mut self) -> &mut Polyline {
        &mut self.polyline
    }
}

impl Profile for Contour {
    fn vertices(&self) -> Vec<Point3> {
        self.polyline.points().to_vec()
    }

    fn is_closed(&self) -> bool {
        self.polyline.is_closed()
    }
}

/// Fills the world-space boundary with `tessellator`.
///
/// Boundaries with fewer than 3 points, or enclosing no area, give an empty
/// mesh.
pub(super) fn fill(boundary: &[Point3], tessellator: &dyn PathTessellator) -> Result<Mesh> {
    if boundary.len() < 3 {
        tracing::trace!(points = boundary.len(), "contour too short to fill");
        return Ok(Mesh::default());
    }
    if newell_normal(boundary).is_none() {
        tracing::trace!(points = boundary.len(), "contour encloses no area");
        return Ok(Mesh::default());
    }
    tessellator.tessellate(&closed_path(boundary))
}
