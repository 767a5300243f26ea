use crate::error::{GeometryError, MeshShapeError, Result};
use crate::mesh::Topology;

/// Widths and output topology for stroking a shape boundary.
///
/// `inner_width` is the offset toward the shape interior, `outer_width` the
/// offset away from it. Either may be zero; a negative width offsets to the
/// opposite side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    inner_width: f64,
    outer_width: f64,
    topology: Topology,
}

impl StrokeStyle {
    /// Creates a stroke style emitting a triangle strip.
    ///
    /// # Errors
    ///
    /// Returns an error if either width is NaN or infinite.
    pub fn new(inner_width: f64, outer_width: f64) -> Result<Self> {
        check_width("inner_width", inner_width)?;
        check_width("outer_width", outer_width)?;
        Ok(Self {
            inner_width,
            outer_width,
            topology: Topology::TriangleStrip,
        })
    }

    /// Switches the output topology.
    ///
    /// # Errors
    ///
    /// Returns [`MeshShapeError::UnsupportedTopology`] for anything other than
    /// [`Topology::TriangleStrip`] or [`Topology::Triangles`].
    pub fn with_topology(mut self, topology: Topology) -> Result<Self> {
        match topology {
            Topology::TriangleStrip | Topology::Triangles => {
                self.topology = topology;
                Ok(self)
            }
            other => {
                tracing::warn!(topology = ?other, "rejected stroke topology");
                Err(MeshShapeError::UnsupportedTopology(other))
            }
        }
    }

    /// Same topology with different widths.
    ///
    /// Callers derive the widths from an already validated style.
    pub(crate) fn with_widths(&self, inner_width: f64, outer_width: f64) -> Self {
        Self {
            inner_width,
            outer_width,
            topology: self.topology,
        }
    }

    /// Returns the offset toward the interior.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }

    /// Returns the offset away from the interior.
    #[must_use]
    pub fn outer_width(&self) -> f64 {
        self.outer_width
    }

    /// Returns the output topology.
    #[must_use]
    pub fn topology(&self) -> Topology {
        self.topology
    }
}

fn check_width(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: f64::MIN,
            max: f64::MAX,
        }
        .into())
    }
}
