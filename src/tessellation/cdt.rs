use std::collections::HashMap;

use spade::handles::{FixedFaceHandle, FixedVertexHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::math::{newell_normal, Point3, Vector3};
use crate::mesh::{Mesh, Topology};

use super::{PathCommand, PathTessellator};

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Fills paths with a constrained Delaunay triangulation.
///
/// All sub-paths are projected onto the plane of the first one and inserted
/// as constraint loops. Triangles are kept by the even-odd rule, so nested
/// sub-paths become holes. Output triangles wind counter-clockwise around
/// the first sub-path's Newell normal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdtTessellator;

impl CdtTessellator {
    /// Creates a new tessellator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PathTessellator for CdtTessellator {
    #[allow(clippy::cast_possible_truncation)]
    fn tessellate(&self, path: &[PathCommand]) -> Result<Mesh> {
        let loops = split_loops(path);
        let Some(outer) = loops.first() else {
            return Err(TessellationError::InvalidPath("path has no sub-paths".into()).into());
        };
        let normal = newell_normal(outer).ok_or_else(|| {
            TessellationError::InvalidPath("outer boundary encloses no area".into())
        })?;
        let (origin, u_dir, v_dir) = plane_basis(&outer[0], &normal);

        let project = |p: &Point3| -> SpadePoint2<f64> {
            let d = p - origin;
            SpadePoint2::new(d.dot(&u_dir), d.dot(&v_dir))
        };

        let mut cdt = Cdt::new();
        let mut positions: HashMap<usize, Point3> = HashMap::new();
        for points in &loops {
            insert_constraint_loop(&mut cdt, points, &project, &mut positions)?;
        }

        let interior = classify_interior_faces(&cdt);

        let mut mesh = Mesh::with_topology(Topology::Triangles);
        let mut vertex_map: HashMap<usize, u32> = HashMap::new();

        for face in cdt.inner_faces() {
            if !interior[face.fix().index()] {
                continue;
            }
            for vh in face.vertices() {
                let idx = vh.fix().index();
                let mesh_idx = if let Some(&existing) = vertex_map.get(&idx) {
                    existing
                } else {
                    let pos = vh.position();
                    let p3 = positions
                        .get(&idx)
                        .copied()
                        .unwrap_or_else(|| origin + u_dir * pos.x + v_dir * pos.y);
                    let new_idx = mesh.vertices.len() as u32;
                    mesh.vertices.push(p3);
                    vertex_map.insert(idx, new_idx);
                    new_idx
                };
                mesh.indices.push(mesh_idx);
            }
        }

        tracing::debug!(
            loops = loops.len(),
            triangles = mesh.indices.len() / 3,
            "tessellated path"
        );
        Ok(mesh)
    }
}

/// Splits path commands into point loops, one per `MoveTo`.
fn split_loops(path: &[PathCommand]) -> Vec<Vec<Point3>> {
    let mut loops: Vec<Vec<Point3>> = Vec::new();
    let mut current: Vec<Point3> = Vec::new();
    for command in path {
        match *command {
            PathCommand::MoveTo(p) => {
                if !current.is_empty() {
                    loops.push(std::mem::take(&mut current));
                }
                current.push(p);
            }
            PathCommand::LineTo(p) => current.push(p),
            PathCommand::Close => {
                if !current.is_empty() {
                    loops.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        loops.push(current);
    }
    loops
}

/// Orthonormal frame `(origin, u, v)` with `u × v = normal`.
fn plane_basis(origin: &Point3, normal: &Vector3) -> (Point3, Vector3, Vector3) {
    let reference = if normal.x.abs() < 0.9 {
        Vector3::new(1.0, 0.0, 0.0)
    } else {
        Vector3::new(0.0, 1.0, 0.0)
    };
    let v_dir = normal.cross(&reference).normalize();
    let u_dir = v_dir.cross(normal);
    (*origin, u_dir, v_dir)
}

/// Inserts a closed polygon as constraint edges into the CDT.
fn insert_constraint_loop(
    cdt: &mut Cdt,
    points: &[Point3],
    project: &impl Fn(&Point3) -> SpadePoint2<f64>,
    positions: &mut HashMap<usize, Point3>,
) -> Result<()> {
    if points.len() < 3 {
        return Err(
            TessellationError::InvalidPath("constraint loop needs at least 3 points".into())
                .into(),
        );
    }

    let mut handles: Vec<FixedVertexHandle> = Vec::with_capacity(points.len());
    for p in points {
        let h = cdt
            .insert(project(p))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        positions.entry(h.index()).or_insert(*p);
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed("boundary intersects itself".into()).into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(())
}

/// Even-odd interior flags indexed by face index.
///
/// Faces are flooded from the convex hull; crossing a constraint edge flips
/// the parity.
fn classify_interior_faces(cdt: &Cdt) -> Vec<bool> {
    let mut depth: Vec<Option<u32>> = vec![None; cdt.num_all_faces()];
    let mut stack: Vec<(FixedFaceHandle<InnerTag>, u32)> = Vec::new();

    let outer = cdt.outer_face().fix();
    for edge in cdt.directed_edges().filter(|e| e.face().fix() == outer) {
        if let Some(face) = edge.rev().face().as_inner() {
            let d = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            stack.push((face.fix(), d));
        }
    }

    while let Some((fix, d)) = stack.pop() {
        if depth[fix.index()].is_some() {
            continue;
        }
        depth[fix.index()] = Some(d);
        for edge in cdt.face(fix).adjacent_edges() {
            if let Some(next) = edge.rev().face().as_inner() {
                let crossed = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
                if depth[next.fix().index()].is_none() {
                    stack.push((next.fix(), d + crossed));
                }
            }
        }
    }

    depth.iter().map(|d| d.is_some_and(|d| d % 2 == 1)).collect()
}
