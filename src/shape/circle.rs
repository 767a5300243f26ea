use crate::error::Result;
use crate::math::Point3;
use crate::mesh::{Mesh, Topology};

use super::arc::{check_radius, sample_arc};
use super::Profile;

/// A full circle: an always-closed arc over 360° without a center vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point3,
    radius: f64,
    resolution: usize,
}

impl Circle {
    /// Creates a circle sampled at `resolution` points.
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
        })
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

    /// Sets the number of samples.
    pub fn set_resolution(&mut self, resolution: usize) {
        self.resolution = resolution;
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

    /// Returns the number of samples.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Fills the circle as a fan around `center`, appended as the last vertex.
    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn disk_face(&self, outline: Mesh, center: Point3) -> Mesh {
        let n = outline.vertices.len() as u32;
        if n < 3 {
            return Mesh::default();
        }
        let mut mesh = outline;
        mesh.topology = Some(Topology::Triangles);
        mesh.vertices.push(center);
        mesh.indices = (0..n).flat_map(|i| [n, i, (i + 1) % n]).collect();
        mesh
    }
}

impl Profile for Circle {
    fn vertices(&self) -> Vec<Point3> {
        sample_arc(
            &self.center,
            self.radius,
            0.0,
            360.0,
            self.resolution,
            self.resolution,
        )
    }

    fn is_closed(&self) -> bool {
        true
    }
}
