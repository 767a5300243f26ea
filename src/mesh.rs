use crate::math::{Point3, Vector3};

/// Primitive topology a renderer should use for a [`Mesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Closed line loop through all vertices.
    LineLoop,
    /// Open line strip.
    LineStrip,
    /// Line strip whose first and last vertices only inform adjacency.
    LineStripAdjacency,
    /// Triangle strip.
    TriangleStrip,
    /// Independent triangles, three indices each.
    Triangles,
}

/// Render-ready vertex/index buffers with per-vertex normals.
///
/// `topology` is `None` for a mesh that carries bare vertices, such as the
/// result of stroking a boundary with fewer than 2 points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals, one per vertex once set.
    pub normals: Vec<Vector3>,
    /// Indices into `vertices`, interpreted according to `topology`.
    pub indices: Vec<u32>,
    /// Primitive topology.
    pub topology: Option<Topology>,
}

impl Mesh {
    /// Creates an empty mesh with the given topology.
    #[must_use]
    pub fn with_topology(topology: Topology) -> Self {
        Self {
            topology: Some(topology),
            ..Self::default()
        }
    }

    /// Creates a mesh from vertices with no indices and no topology.
    #[must_use]
    pub fn from_vertices(vertices: Vec<Point3>) -> Self {
        Self {
            vertices,
            ..Self::default()
        }
    }

    /// Returns `true` if the mesh has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of primitives the index buffer describes under its topology.
    ///
    /// Meshes without indices count their vertices directly.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        let n = if self.indices.is_empty() {
            self.vertices.len()
        } else {
            self.indices.len()
        };
        match self.topology {
            None => 0,
            Some(Topology::LineLoop) => {
                if n < 2 {
                    0
                } else {
                    n
                }
            }
            Some(Topology::LineStrip) => n.saturating_sub(1),
            Some(Topology::LineStripAdjacency) => n.saturating_sub(3),
            Some(Topology::TriangleStrip) => n.saturating_sub(2),
            Some(Topology::Triangles) => n / 3,
        }
    }

    /// Replaces all normals with `normal`, one per vertex.
    pub fn set_uniform_normal(&mut self, normal: Vector3) {
        self.normals.clear();
        self.normals.resize(self.vertices.len(), normal);
    }

    /// Removes all vertices, normals and indices. The topology is kept.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.indices.clear();
    }

    /// Appends another mesh's buffers, offsetting its indices.
    ///
    /// Two triangle strips are joined with a pair of degenerate indices so
    /// that no triangle bridges them. An empty `self` adopts the topology of
    /// `other`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn append(&mut self, other: &Mesh) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() && self.indices.is_empty() {
            if self.topology.is_none() {
                self.topology = other.topology;
            }
            self.vertices.extend_from_slice(&other.vertices);
            self.normals.extend_from_slice(&other.normals);
            self.indices.extend_from_slice(&other.indices);
            return;
        }

        let base = self.vertices.len() as u32;
        let stitch = self.topology == Some(Topology::TriangleStrip)
            && other.topology == Some(Topology::TriangleStrip);

        if stitch {
            if let (Some(&last), Some(&first)) = (self.indices.last(), other.indices.first()) {
                self.indices.push(last);
                self.indices.push(first + base);
            }
        }

        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }
}
