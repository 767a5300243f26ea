//! Oriented planar shapes and the mesh queries shared by all of them.
//!
//! A [`Shape`] pairs placement (anchor and rotation) with one of the
//! parameter records in [`ShapeKind`]. Each record only knows how to list its
//! raw boundary through [`Profile`]; transforming, stroking and filling that
//! boundary is done once here.

mod adjacency_line;
mod arc;
mod circle;
mod contour;
mod grid;
mod line;
mod plate;
mod rectangle;

pub use adjacency_line::AdjacencyLine;
pub use arc::Arc;
pub use circle::Circle;
pub use contour::Contour;
pub use grid::Grid;
pub use line::Line;
pub use plate::Plate;
pub use rectangle::{RectMode, Rectangle};

use nalgebra::Unit;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, UnitQuaternion, Vector3, TOLERANCE};
use crate::mesh::{Mesh, Topology};
use crate::tessellation::{BoundaryKind, CdtTessellator, PathTessellator, StrokeStyle, TessellateStroke};

/// Axis a shape faces before rotation.
pub const CANONICAL_NORMAL: Vector3 = Vector3::new(0.0, 0.0, -1.0);

/// Raw boundary of a shape, in the shape's own frame.
pub trait Profile {
    /// Returns the ordered boundary points, before rotation about the anchor.
    fn vertices(&self) -> Vec<Point3>;

    /// Returns whether the boundary wraps around from the last point to the first.
    fn is_closed(&self) -> bool;

    /// Returns how the stroker treats the ends of the boundary.
    fn boundary_kind(&self) -> BoundaryKind {
        if self.is_closed() {
            BoundaryKind::Closed
        } else {
            BoundaryKind::Open
        }
    }

    /// Returns the line topology of the plain outline.
    fn outline_topology(&self) -> Topology {
        match self.boundary_kind() {
            BoundaryKind::Closed => Topology::LineLoop,
            BoundaryKind::Open => Topology::LineStrip,
            BoundaryKind::Adjacency => Topology::LineStripAdjacency,
        }
    }
}

/// The parameter record of a [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Rectangle(Rectangle),
    Grid(Grid),
    Arc(Arc),
    Circle(Circle),
    Line(Line),
    Contour(Contour),
    AdjacencyLine(AdjacencyLine),
}

impl ShapeKind {
    fn profile(&self) -> &dyn Profile {
        match self {
            Self::Rectangle(s) => s,
            Self::Grid(s) => s,
            Self::Arc(s) => s,
            Self::Circle(s) => s,
            Self::Line(s) => s,
            Self::Contour(s) => s,
            Self::AdjacencyLine(s) => s,
        }
    }
}

macro_rules! impl_from_kind {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for ShapeKind {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_kind!(Rectangle, Grid, Arc, Circle, Line, Contour, AdjacencyLine);

/// A planar shape placed in 3D space.
///
/// Rotation is always applied about `anchor`:
/// `world = anchor + rotation * (local - anchor)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    anchor: Point3,
    rotation: UnitQuaternion,
    kind: ShapeKind,
}

impl Shape {
    /// Creates a shape with identity rotation anchored at the origin.
    #[must_use]
    pub fn new(kind: impl Into<ShapeKind>) -> Self {
        Self {
            anchor: Point3::origin(),
            rotation: UnitQuaternion::identity(),
            kind: kind.into(),
        }
    }

    /// Returns the shape parameters.
    #[must_use]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Returns the shape parameters for reconfiguration.
    pub fn kind_mut(&mut self) -> &mut ShapeKind {
        &mut self.kind
    }

    /// Returns the point the rotation is applied about.
    #[must_use]
    pub fn anchor(&self) -> &Point3 {
        &self.anchor
    }

    /// Sets the point the rotation is applied about.
    pub fn set_anchor(&mut self, anchor: Point3) {
        self.anchor = anchor;
    }

    /// Builder form of [`set_anchor`](Self::set_anchor).
    #[must_use]
    pub fn with_anchor(mut self, anchor: Point3) -> Self {
        self.anchor = anchor;
        self
    }

    /// Returns the orientation.
    #[must_use]
    pub fn rotation(&self) -> &UnitQuaternion {
        &self.rotation
    }

    /// Sets the orientation to `degrees` about `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `axis` has no direction.
    pub fn set_rotation(&mut self, degrees: f64, axis: &Vector3) -> Result<()> {
        let axis = Unit::try_new(*axis, TOLERANCE).ok_or(GeometryError::ZeroVector)?;
        self.rotation = UnitQuaternion::from_axis_angle(&axis, degrees.to_radians());
        Ok(())
    }

    /// Builder form of [`set_rotation`](Self::set_rotation).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `axis` has no direction.
    pub fn with_rotation(mut self, degrees: f64, axis: &Vector3) -> Result<Self> {
        self.set_rotation(degrees, axis)?;
        Ok(self)
    }

    /// Sets the orientation directly.
    pub fn set_orientation(&mut self, rotation: UnitQuaternion) {
        self.rotation = rotation;
    }

    /// Returns whether the boundary is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.kind.profile().is_closed()
    }

    /// Front-facing normal: the canonical `(0, 0, -1)` axis rotated.
    #[must_use]
    pub fn normal(&self) -> Vector3 {
        self.rotation * CANONICAL_NORMAL
    }

    /// Supporting plane of the boundary.
    ///
    /// The offset is taken from the first boundary vertex, or zero for a
    /// shape with no vertices.
    #[must_use]
    pub fn plate(&self) -> Plate {
        let normal = self.normal();
        match self.vertices().first() {
            Some(first) => Plate::through(normal, first),
            None => Plate::new(normal, 0.0),
        }
    }

    /// Maps a point from the shape's frame into world space.
    #[must_use]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        self.anchor + self.rotation * (point - self.anchor)
    }

    /// Boundary vertices in world space.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point3> {
        self.kind
            .profile()
            .vertices()
            .iter()
            .map(|p| self.transform_point(p))
            .collect()
    }

    /// Plain boundary as a line mesh.
    ///
    /// The topology is a line loop for closed shapes, a line strip for open
    /// ones and a line strip with adjacency for [`AdjacencyLine`].
    #[must_use]
    pub fn outline(&self) -> Mesh {
        let mut mesh = Mesh::with_topology(self.kind.profile().outline_topology());
        mesh.vertices = self.vertices();
        mesh.set_uniform_normal(self.normal());
        mesh
    }

    /// Stroked boundary ribbon.
    ///
    /// # Errors
    ///
    /// Returns [`MeshShapeError::UnsupportedTopology`](crate::MeshShapeError::UnsupportedTopology)
    /// if `topology` is neither [`Topology::TriangleStrip`] nor
    /// [`Topology::Triangles`], or an error for NaN or infinite widths.
    pub fn stroke_outline(&self, inner_width: f64, outer_width: f64, topology: Topology) -> Result<Mesh> {
        let style = StrokeStyle::new(inner_width, outer_width)?.with_topology(topology)?;
        Ok(self.stroke(&style))
    }

    /// Stroked boundary ribbon for a validated style.
    ///
    /// Grids stroke their perimeter and every cell; other shapes stroke their
    /// boundary once.
    #[must_use]
    pub fn stroke(&self, style: &StrokeStyle) -> Mesh {
        match &self.kind {
            ShapeKind::Grid(grid) => grid.stroke(self, style),
            kind => {
                let profile = kind.profile();
                TessellateStroke::new(self.vertices(), self.normal(), *style, profile.boundary_kind())
                    .execute()
            }
        }
    }

    /// Filled surface, using [`CdtTessellator`] for free-form contours.
    ///
    /// # Errors
    ///
    /// Returns an error if a contour cannot be tessellated.
    pub fn face(&self) -> Result<Mesh> {
        self.face_with(&CdtTessellator::new())
    }

    /// Filled surface, using `tessellator` for free-form contours.
    ///
    /// Grids, lines and adjacency lines have no face and return an empty mesh.
    ///
    /// # Errors
    ///
    /// Returns an error if a contour cannot be tessellated.
    pub fn face_with(&self, tessellator: &dyn PathTessellator) -> Result<Mesh> {
        let normal = self.normal();
        let mut mesh = match &self.kind {
            ShapeKind::Rectangle(_) => rectangle::quad_face(self.outline()),
            ShapeKind::Arc(arc) => arc.fan_face(self.outline()),
            ShapeKind::Circle(circle) => {
                circle.disk_face(self.outline(), self.transform_point(circle.center()))
            }
            ShapeKind::Contour(_) => contour::fill(&self.vertices(), tessellator)?,
            ShapeKind::Grid(_) | ShapeKind::Line(_) | ShapeKind::AdjacencyLine(_) => {
                return Ok(Mesh::default());
            }
        };
        if mesh.topology == Some(Topology::Triangles) {
            orient_triangles(&mut mesh, &normal);
        }
        mesh.set_uniform_normal(normal);
        Ok(mesh)
    }
}

/// Flips triangles whose winding disagrees with `normal`.
fn orient_triangles(mesh: &mut Mesh, normal: &Vector3) {
    for tri in mesh.indices.chunks_exact_mut(3) {
        let a = mesh.vertices[tri[0] as usize];
        let b = mesh.vertices[tri[1] as usize];
        let c = mesh.vertices[tri[2] as usize];
        if (b - a).cross(&(c - a)).dot(normal) < 0.0 {
            tri.swap(1, 2);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::error::MeshShapeError;
    use crate::geometry::Polyline;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn rect(w: f64, h: f64) -> Shape {
        Shape::new(Rectangle::new(p(0.0, 0.0, 0.0), w, h))
    }

    fn all_closed_shapes() -> Vec<Shape> {
        vec![
            Shape::new(Rectangle::new(p(1.0, 2.0, 3.0), 4.0, 2.0)),
            Shape::new(Grid::new(Rectangle::new(p(-1.0, 0.0, 0.5), 3.0, 3.0), 2, 1)),
            Shape::new(Circle::new(p(0.0, 1.0, 0.0), 2.0, 16).unwrap()),
            Shape::new(
                Arc::new(p(0.0, 0.0, 2.0), 1.0, 8)
                    .unwrap()
                    .with_angles(0.0, 90.0)
                    .with_closed(true),
            ),
            Shape::new(Contour::new(Polyline::new(
                vec![p(0.0, 0.0, 1.0), p(2.0, 0.0, 1.0), p(1.0, 3.0, 1.0)],
                true,
            ))),
        ]
    }

    #[test]
    fn default_normal_faces_negative_z() {
        assert_relative_eq!(rect(1.0, 1.0).normal(), CANONICAL_NORMAL);
    }

    #[test]
    fn normal_follows_rotation() {
        let axes = [
            Vector3::x(),
            Vector3::y(),
            Vector3::new(1.0, 1.0, 0.0).normalize(),
            Vector3::new(0.3, -0.4, 0.866).normalize(),
        ];
        for axis in &axes {
            for degrees in [0.0, 30.0, 90.0, 135.0, 270.0] {
                let mut shape = rect(1.0, 1.0);
                shape.set_rotation(degrees, axis).unwrap();
                let expected = nalgebra::Rotation3::from_axis_angle(
                    &Unit::new_normalize(*axis),
                    f64::to_radians(degrees),
                ) * CANONICAL_NORMAL;
                assert_relative_eq!(shape.normal(), expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn zero_rotation_axis_is_rejected() {
        let mut shape = rect(1.0, 1.0);
        let err = shape.set_rotation(45.0, &Vector3::zeros()).unwrap_err();
        assert!(matches!(err, MeshShapeError::Geometry(GeometryError::ZeroVector)));
        assert_eq!(shape.rotation(), &UnitQuaternion::identity());
    }

    #[test]
    fn rotation_is_about_anchor() {
        let shape = rect(1.0, 1.0)
            .with_anchor(p(1.0, 0.0, 0.0))
            .with_rotation(180.0, &Vector3::z())
            .unwrap();
        let vertices = shape.vertices();
        assert_relative_eq!(vertices[0], p(2.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(vertices[2], p(1.0, -1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn plate_contains_every_vertex() {
        for mut shape in all_closed_shapes() {
            shape.set_anchor(p(0.5, -2.0, 1.0));
            shape.set_rotation(37.0, &Vector3::new(1.0, 2.0, -0.5)).unwrap();
            let plate = shape.plate();
            assert_relative_eq!(*plate.normal(), shape.normal());
            for v in shape.vertices() {
                assert_abs_diff_eq!(plate.distance(&v), 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn plate_of_empty_shape_has_zero_offset() {
        let shape = Shape::new(Contour::new(Polyline::default()));
        assert_abs_diff_eq!(shape.plate().offset(), 0.0);
    }

    #[test]
    fn outline_is_idempotent() {
        for shape in all_closed_shapes() {
            assert_eq!(shape.outline(), shape.outline());
        }
    }

    #[test]
    fn outline_topology_per_kind() {
        assert_eq!(rect(1.0, 1.0).outline().topology, Some(Topology::LineLoop));
        let line = Shape::new(Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
        assert_eq!(line.outline().topology, Some(Topology::LineStrip));
        let adjacency = Shape::new(AdjacencyLine::new(
            Contour::new(Polyline::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)], true)),
            p(-1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
        ));
        assert_eq!(adjacency.outline().topology, Some(Topology::LineStripAdjacency));
    }

    #[test]
    fn outline_normals_match_shape_normal() {
        let shape = rect(2.0, 1.0).with_rotation(60.0, &Vector3::x()).unwrap();
        let mesh = shape.outline();
        assert_eq!(mesh.normals.len(), 4);
        for n in &mesh.normals {
            assert_relative_eq!(*n, shape.normal());
        }
    }

    #[test]
    fn stroke_outline_rejects_line_topologies() {
        let shape = rect(1.0, 1.0);
        for topology in [Topology::LineLoop, Topology::LineStrip, Topology::LineStripAdjacency] {
            let err = shape.stroke_outline(0.1, 0.1, topology).unwrap_err();
            assert!(matches!(err, MeshShapeError::UnsupportedTopology(_)));
        }
    }

    #[test]
    fn strip_index_counts_follow_closure() {
        let closed = rect(2.0, 2.0)
            .stroke_outline(0.1, 0.1, Topology::TriangleStrip)
            .unwrap();
        assert_eq!(closed.indices.len(), 2 * 4 + 2);
        assert_eq!(&closed.indices[8..], &[0, 1]);

        let open = Shape::new(Contour::new(Polyline::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)],
            false,
        )));
        let mesh = open.stroke_outline(0.1, 0.1, Topology::TriangleStrip).unwrap();
        assert_eq!(mesh.indices.len(), 2 * 3);

        let adjacency = Shape::new(AdjacencyLine::new(
            Contour::new(Polyline::new(
                vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)],
                false,
            )),
            p(-1.0, 0.0, 0.0),
            p(1.0, 2.0, 0.0),
        ));
        let mesh = adjacency.stroke_outline(0.1, 0.1, Topology::TriangleStrip).unwrap();
        assert_eq!(mesh.indices.len(), 2 * (5 - 2));
    }

    #[test]
    fn rotated_stroke_matches_rotated_offsets() {
        let plain = rect(4.0, 2.0).stroke_outline(0.5, 0.5, Topology::Triangles).unwrap();
        let rotated_shape = rect(4.0, 2.0).with_rotation(90.0, &Vector3::y()).unwrap();
        let rotated = rotated_shape.stroke_outline(0.5, 0.5, Topology::Triangles).unwrap();
        assert_eq!(plain.indices, rotated.indices);
        for (a, b) in plain.vertices.iter().zip(&rotated.vertices) {
            assert_relative_eq!(rotated_shape.rotation() * a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn faces_point_along_normal() {
        for mut shape in all_closed_shapes() {
            shape.set_rotation(25.0, &Vector3::new(0.0, 1.0, 1.0)).unwrap();
            let face = shape.face().unwrap();
            if face.is_empty() {
                continue;
            }
            let normal = shape.normal();
            assert_eq!(face.normals.len(), face.vertices.len());
            if face.topology == Some(Topology::Triangles) {
                for tri in face.indices.chunks_exact(3) {
                    let a = face.vertices[tri[0] as usize];
                    let b = face.vertices[tri[1] as usize];
                    let c = face.vertices[tri[2] as usize];
                    assert!((b - a).cross(&(c - a)).dot(&normal) > 0.0);
                }
            }
        }
    }

    #[test]
    fn shapes_without_faces_return_empty() {
        let line = Shape::new(Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));
        assert_eq!(line.face().unwrap(), Mesh::default());
        let grid = Shape::new(Grid::new(Rectangle::new(p(0.0, 0.0, 0.0), 1.0, 1.0), 1, 1));
        assert_eq!(grid.face().unwrap(), Mesh::default());
    }

    #[test]
    fn shapes_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Shape>();
    }
}
