use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};
use crate::mesh::{Mesh, Topology};

use super::Profile;

/// A circular arc sampled at a fixed resolution.
///
/// Angles are in degrees and increase counter-clockwise about the shape
/// normal, so the point at angle `t` is `center + radius * (cos t, -sin t, 0)`
/// in the shape's frame. A closed arc adds the center as a last vertex,
/// closing the boundary as a pie slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point3,
    radius: f64,
    resolution: usize,
    start_degrees: f64,
    end_degrees: f64,
    closed: bool,
}

impl Arc {
    /// Creates an open arc spanning the full circle.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is negative or not finite.
    pub fn new(center: Point3, radius: f64, resolution: usize) -> Result<Self> {
        check_radius(radius)?;
        Ok(Self {
            center,
            radius,
            resolution,
            start_degrees: 0.0,
            end_degrees: 360.0,
            closed: false,
        })
    }

    /// Builder form of [`set_angles`](Self::set_angles).
    #[must_use]
    pub fn with_angles(mut self, start_degrees: f64, end_degrees: f64) -> Self {
        self.set_angles(start_degrees, end_degrees);
        self
    }

    /// Sets the swept angle range.
    pub fn set_angles(&mut self, start_degrees: f64, end_degrees: f64) {
        self.start_degrees = start_degrees;
        self.end_degrees = end_degrees;
    }

    /// Builder form of [`set_closed`](Self::set_closed).
    #[must_use]
    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Sets whether the arc closes through its center.
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    /// Sets the number of segments along the arc.
    pub fn set_resolution(&mut self, resolution: usize) {
        self.resolution = resolution;
    }

    /// Sets the radius.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is negative or not finite.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        check_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// Sets the center.
    pub fn set_center(&mut self, center: Point3) {
        self.center = center;
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the number of segments along the arc.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Returns the `(start, end)` angles in degrees.
    #[must_use]
    pub fn angles(&self) -> (f64, f64) {
        (self.start_degrees, self.end_degrees)
    }

    /// Fills the arc as a triangle fan.
    ///
    /// Closed arcs fan around their center (the last outline vertex); open
    /// arcs fan around the first sample, filling the chord segment.
    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn fan_face(&self, outline: Mesh) -> Mesh {
        let n = outline.vertices.len() as u32;
        if n < 3 {
            return Mesh::default();
        }
        let mut mesh = outline;
        mesh.topology = Some(Topology::Triangles);
        mesh.indices = if self.closed {
            let hub = n - 1;
            (0..n - 2).flat_map(|i| [hub, i, i + 1]).collect()
        } else {
            (1..n - 1).flat_map(|i| [0, i, i + 1]).collect()
        };
        mesh
    }
}

impl Profile for Arc {
    fn vertices(&self) -> Vec<Point3> {
        let sweep = self.end_degrees - self.start_degrees;
        let mut vertices = sample_arc(
            &self.center,
            self.radius,
            self.start_degrees,
            sweep,
            self.resolution,
            self.resolution + 1,
        );
        if self.closed {
            vertices.push(self.center);
        }
        vertices
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Samples `count` points at `start + sweep * i / steps` degrees.
///
/// With zero `steps` every sample sits at `start`.
#[allow(clippy::cast_precision_loss)]
pub(super) fn sample_arc(
    center: &Point3,
    radius: f64,
    start_degrees: f64,
    sweep_degrees: f64,
    steps: usize,
    count: usize,
) -> Vec<Point3> {
    (0..count)
        .map(|i| {
            let fraction = if steps == 0 {
                0.0
            } else {
                i as f64 / steps as f64
            };
            let t = (start_degrees + sweep_degrees * fraction).to_radians();
            center + Vector3::new(t.cos(), -t.sin(), 0.0) * radius
        })
        .collect()
}

pub(super) fn check_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter: "radius",
            value: radius,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into())
    }
}
