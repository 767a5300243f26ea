use crate::math::Point3;
use crate::tessellation::BoundaryKind;

use super::{Contour, Profile};

/// An open contour with one extra neighbour point before and after it.
///
/// The `lead` and `trail` points are only there so that the ends of the
/// contour can be mitered against the primitives adjoining it. They are
/// emitted as the first and last outline vertices but receive no stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyLine {
    contour: Contour,
    lead: Point3,
    trail: Point3,
}

impl AdjacencyLine {
    /// Creates an adjacency line around `contour`.
    #[must_use]
    pub fn new(contour: Contour, lead: Point3, trail: Point3) -> Self {
        Self {
            contour,
            lead,
            trail,
        }
    }

    /// Returns the wrapped contour.
    #[must_use]
    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    /// Returns the wrapped contour for reconfiguration.
    pub fn contour_mut(&mut self) -> &mut Contour {
        &mut self.contour
    }

    /// Sets the neighbour before the first contour point.
    pub fn set_lead(&mut self, lead: Point3) {
        self.lead = lead;
    }

    /// Sets the neighbour after the last contour point.
    pub fn set_trail(&mut self, trail: Point3) {
        self.trail = trail;
    }

    /// Returns the `(lead, trail)` neighbours.
    #[must_use]
    pub fn neighbours(&self) -> (Point3, Point3) {
        (self.lead, self.trail)
    }
}

impl Profile for AdjacencyLine {
    fn vertices(&self) -> Vec<Point3> {
        let points = self.contour.polyline().points();
        let mut vertices = Vec::with_capacity(points.len() + 2);
        vertices.push(self.lead);
        vertices.extend_from_slice(points);
        vertices.push(self.trail);
        vertices
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn boundary_kind(&self) -> BoundaryKind {
        BoundaryKind::Adjacency
    }
}
