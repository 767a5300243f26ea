use std::f64::consts::FRAC_PI_2;
use std::ops::Range;

use nalgebra::Unit;

use crate::math::{intersect_3d, sign, Point3, UnitQuaternion, Vector3, TOLERANCE};
use crate::mesh::{Mesh, Topology};

use super::stroke_style::StrokeStyle;

/// How the ends of a boundary are treated while stroking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// The last point connects back to the first; every point is a corner.
    Closed,
    /// Every point is a corner; the missing neighbour at each end is mirrored
    /// through the endpoint, giving square ends.
    Open,
    /// The first and last points are neighbours only and get no offsets.
    Adjacency,
}

/// Miter geometry at one boundary point.
struct Corner {
    prev: Point3,
    at: Point3,
    next: Point3,
    /// Rotates an edge direction onto its offset direction.
    quarter_turn: UnitQuaternion,
    /// Flips offsets so that positive widths always point inward.
    side: f64,
}

impl Corner {
    fn new(prev: Point3, at: Point3, next: Point3, normal: &Vector3) -> Self {
        let incoming = at - prev;
        let outgoing = next - at;
        let axis = outgoing.cross(&incoming);
        let scale = incoming.norm() * outgoing.norm();
        let axis = if scale > 0.0 && axis.norm() > TOLERANCE * scale {
            Unit::new_normalize(axis)
        } else {
            // Colinear or coincident: the plane normal is the only usable axis.
            Unit::new_normalize(*normal)
        };
        Self {
            prev,
            at,
            next,
            quarter_turn: UnitQuaternion::from_axis_angle(&axis, FRAC_PI_2),
            side: sign(normal.dot(&axis)),
        }
    }

    fn offset_direction(&self, edge: &Vector3) -> Vector3 {
        (self.quarter_turn * edge)
            .try_normalize(TOLERANCE)
            .unwrap_or_else(Vector3::zeros)
    }

    /// Mitered point at signed half-width `width` from the corner.
    fn offset(&self, width: f64) -> Point3 {
        let incoming = self.at - self.prev;
        let outgoing = self.next - self.at;
        let d_in = self.offset_direction(&incoming) * (self.side * width);
        let d_out = self.offset_direction(&outgoing) * (self.side * width);

        intersect_3d(
            &(self.prev + d_in),
            &(self.at + d_in),
            &(self.at + d_out),
            &(self.next + d_out),
        )
        .unwrap_or_else(|| {
            tracing::trace!(at = ?self.at, "parallel offset edges, using unmitered offset");
            if incoming.norm_squared() > 0.0 {
                self.at + d_in
            } else {
                self.at + d_out
            }
        })
    }
}

/// Generates a mitered ribbon along a planar boundary.
///
/// Each corner yields an `(inner, outer)` vertex pair: the inner vertex is
/// offset by `inner_width` toward the interior, the outer one by
/// `outer_width` away from it. "Interior" is the side on the left when the
/// boundary is walked counter-clockwise as seen from the tip of `normal`
/// looking back, i.e. counter-clockwise in the shape's own frame.
#[derive(Debug)]
pub struct TessellateStroke {
    points: Vec<Point3>,
    normal: Vector3,
    style: StrokeStyle,
    kind: BoundaryKind,
}

impl TessellateStroke {
    /// Creates a new stroke operation over `points` lying in the plane with
    /// unit normal `normal`.
    #[must_use]
    pub fn new(points: Vec<Point3>, normal: Vector3, style: StrokeStyle, kind: BoundaryKind) -> Self {
        Self {
            points,
            normal,
            style,
            kind,
        }
    }

    /// Executes the stroke, producing the ribbon mesh.
    ///
    /// Boundaries with fewer than 2 points (or an adjacency boundary with no
    /// point between its neighbours) produce an empty mesh with no topology.
    #[must_use]
    pub fn execute(&self) -> Mesh {
        let n = self.points.len();
        let corners = self.corner_range();
        if n < 2 || corners.is_empty() {
            tracing::trace!(points = n, "boundary too short to stroke");
            return Mesh::default();
        }

        let count = corners.len();
        let mut mesh = Mesh::with_topology(self.style.topology());
        mesh.vertices.reserve(count * 2);

        for i in corners {
            let (prev, at, next) = self.neighbours(i);
            let corner = Corner::new(prev, at, next, &self.normal);
            mesh.vertices.push(corner.offset(self.style.inner_width()));
            mesh.vertices.push(corner.offset(-self.style.outer_width()));
        }

        mesh.set_uniform_normal(self.normal);
        mesh.indices = self.indices(count);

        tracing::debug!(
            corners = count,
            indices = mesh.indices.len(),
            kind = ?self.kind,
            "stroked boundary"
        );
        mesh
    }

    fn corner_range(&self) -> Range<usize> {
        let n = self.points.len();
        match self.kind {
            BoundaryKind::Closed | BoundaryKind::Open => 0..n,
            BoundaryKind::Adjacency => 1..n.saturating_sub(1).max(1),
        }
    }

    fn neighbours(&self, i: usize) -> (Point3, Point3, Point3) {
        let n = self.points.len();
        let at = self.points[i];
        match self.kind {
            BoundaryKind::Closed => (self.points[(i + n - 1) % n], at, self.points[(i + 1) % n]),
            BoundaryKind::Adjacency => (self.points[i - 1], at, self.points[i + 1]),
            BoundaryKind::Open => {
                let prev = if i > 0 {
                    self.points[i - 1]
                } else {
                    at + (at - self.points[1])
                };
                let next = if i + 1 < n {
                    self.points[i + 1]
                } else {
                    at + (at - self.points[n - 2])
                };
                (prev, at, next)
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn indices(&self, count: usize) -> Vec<u32> {
        let closed = self.kind == BoundaryKind::Closed;
        let count = count as u32;
        match self.style.topology() {
            Topology::Triangles => {
                let mut indices = Vec::with_capacity(count as usize * 6);
                for i in 0..count - 1 {
                    let b = i * 2;
                    indices.extend_from_slice(&[b, b + 1, b + 2, b + 2, b + 1, b + 3]);
                }
                if closed {
                    let b = (count - 1) * 2;
                    indices.extend_from_slice(&[b, b + 1, 0, 0, b + 1, 1]);
                }
                indices
            }
            // StrokeStyle only admits the two triangle topologies.
            _ => {
                let mut indices: Vec<u32> = (0..count * 2).collect();
                if closed {
                    indices.extend_from_slice(&[0, 1]);
                }
                indices
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const DOWN: Vector3 = Vector3::new(0.0, 0.0, -1.0);

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn style(inner: f64, outer: f64, topology: Topology) -> StrokeStyle {
        StrokeStyle::new(inner, outer)
            .unwrap()
            .with_topology(topology)
            .unwrap()
    }

    /// 4×2 rectangle wound the way rectangle shapes emit it.
    fn rect() -> Vec<Point3> {
        vec![p(0.0, 0.0, 0.0), p(0.0, 2.0, 0.0), p(4.0, 2.0, 0.0), p(4.0, 0.0, 0.0)]
    }

    #[test]
    fn closed_rectangle_strip() {
        let mesh = TessellateStroke::new(
            rect(),
            DOWN,
            style(0.5, 0.25, Topology::TriangleStrip),
            BoundaryKind::Closed,
        )
        .execute();

        assert_eq!(mesh.topology, Some(Topology::TriangleStrip));
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.normals.len(), 8);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5, 6, 7, 0, 1]);

        let expected = [
            (p(0.5, 0.5, 0.0), p(-0.25, -0.25, 0.0)),
            (p(0.5, 1.5, 0.0), p(-0.25, 2.25, 0.0)),
            (p(3.5, 1.5, 0.0), p(4.25, 2.25, 0.0)),
            (p(3.5, 0.5, 0.0), p(4.25, -0.25, 0.0)),
        ];
        for (i, (inner, outer)) in expected.iter().enumerate() {
            assert_relative_eq!(mesh.vertices[2 * i], *inner, epsilon = 1e-9);
            assert_relative_eq!(mesh.vertices[2 * i + 1], *outer, epsilon = 1e-9);
        }
    }

    #[test]
    fn opposite_winding_still_offsets_inward() {
        let mut points = rect();
        points.reverse();
        let mesh = TessellateStroke::new(
            points,
            Vector3::new(0.0, 0.0, 1.0),
            style(0.5, 0.0, Topology::TriangleStrip),
            BoundaryKind::Closed,
        )
        .execute();

        assert_relative_eq!(mesh.vertices[0], p(3.5, 0.5, 0.0), epsilon = 1e-9);
        assert_relative_eq!(mesh.vertices[1], p(4.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn closed_rectangle_triangles() {
        let mesh = TessellateStroke::new(
            rect(),
            DOWN,
            style(0.5, 0.5, Topology::Triangles),
            BoundaryKind::Closed,
        )
        .execute();

        assert_eq!(mesh.topology, Some(Topology::Triangles));
        assert_eq!(mesh.indices.len(), 24);
        assert_eq!(&mesh.indices[..6], &[0, 1, 2, 2, 1, 3]);
        assert_eq!(&mesh.indices[18..], &[6, 7, 0, 0, 7, 1]);
    }

    #[test]
    fn concave_corner_offsets_inward() {
        // L-shape with a reflex corner at (2, 2).
        let points = vec![
            p(0.0, 0.0, 0.0),
            p(0.0, 4.0, 0.0),
            p(2.0, 4.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(4.0, 2.0, 0.0),
            p(4.0, 0.0, 0.0),
        ];
        let mesh = TessellateStroke::new(
            points,
            DOWN,
            style(0.5, 0.5, Topology::TriangleStrip),
            BoundaryKind::Closed,
        )
        .execute();

        assert_relative_eq!(mesh.vertices[6], p(1.5, 1.5, 0.0), epsilon = 1e-9);
        assert_relative_eq!(mesh.vertices[7], p(2.5, 2.5, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn colinear_corner_uses_single_offset() {
        let points = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)];
        let mesh = TessellateStroke::new(
            points,
            DOWN,
            style(1.0, 1.0, Topology::TriangleStrip),
            BoundaryKind::Open,
        )
        .execute();

        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices.len(), 6);
        assert!(mesh.vertices.iter().all(|v| v.iter().all(|c| c.is_finite())));
        // Offset (1, 0, 0) rotated a quarter turn about -Z is (0, -1, 0).
        assert_relative_eq!(mesh.vertices[2], p(1.0, -1.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(mesh.vertices[3], p(1.0, 1.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn open_segment_has_square_ends() {
        let points = vec![p(0.0, 0.0, 0.0), p(3.0, 0.0, 0.0)];
        let mesh = TessellateStroke::new(
            points,
            DOWN,
            style(0.5, 0.5, Topology::TriangleStrip),
            BoundaryKind::Open,
        )
        .execute();

        assert_eq!(mesh.indices, vec![0, 1, 2, 3]);
        assert_relative_eq!(mesh.vertices[0], p(0.0, -0.5, 0.0), epsilon = 1e-9);
        assert_relative_eq!(mesh.vertices[1], p(0.0, 0.5, 0.0), epsilon = 1e-9);
        assert_relative_eq!(mesh.vertices[2], p(3.0, -0.5, 0.0), epsilon = 1e-9);
        assert_relative_eq!(mesh.vertices[3], p(3.0, 0.5, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn open_triangles_skip_wrap() {
        let points = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)];
        let mesh = TessellateStroke::new(
            points,
            DOWN,
            style(0.1, 0.1, Topology::Triangles),
            BoundaryKind::Open,
        )
        .execute();

        assert_eq!(mesh.indices, vec![0, 1, 2, 2, 1, 3, 2, 3, 4, 4, 3, 5]);
    }

    #[test]
    fn adjacency_excludes_neighbour_points() {
        // The lead point bends the first real corner into a miter.
        let points = vec![
            p(0.0, -1.0, 0.0),
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(4.0, 1.0, 0.0),
        ];
        let mesh = TessellateStroke::new(
            points,
            DOWN,
            style(0.5, 0.5, Topology::TriangleStrip),
            BoundaryKind::Adjacency,
        )
        .execute();

        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);

        // Corner (0, 0) turns from +Y to +X, so both offsets are mitered.
        let miter = mesh.vertices[0] - p(0.0, 0.0, 0.0);
        assert_relative_eq!(miter.norm(), 0.5 * std::f64::consts::SQRT_2, epsilon = 1e-9);
    }

    #[test]
    fn adjacency_without_interior_points_is_empty() {
        let points = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)];
        let mesh = TessellateStroke::new(
            points,
            DOWN,
            style(0.5, 0.5, Topology::TriangleStrip),
            BoundaryKind::Adjacency,
        )
        .execute();
        assert_eq!(mesh, Mesh::default());
    }

    #[test]
    fn too_few_points_is_empty() {
        let mesh = TessellateStroke::new(
            vec![p(1.0, 1.0, 0.0)],
            DOWN,
            style(0.5, 0.5, Topology::Triangles),
            BoundaryKind::Closed,
        )
        .execute();
        assert!(mesh.is_empty());
        assert!(mesh.topology.is_none());
    }

    #[test]
    fn coincident_points_stay_finite() {
        let points = vec![
            p(0.0, 0.0, 0.0),
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
        ];
        let mesh = TessellateStroke::new(
            points,
            DOWN,
            style(0.2, 0.2, Topology::TriangleStrip),
            BoundaryKind::Closed,
        )
        .execute();
        assert_eq!(mesh.vertices.len(), 8);
        assert!(mesh.vertices.iter().all(|v| v.iter().all(|c| c.is_finite())));
    }
}
