use crate::math::{Point3, Vector3, Vector4};

/// Plane equation `normal · p + offset = 0` supporting a planar shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plate {
    normal: Vector3,
    offset: f64,
}

impl Plate {
    /// Creates a plate from its normal and offset.
    #[must_use]
    pub fn new(normal: Vector3, offset: f64) -> Self {
        Self { normal, offset }
    }

    /// Creates the plate with `normal` passing through `point`.
    #[must_use]
    pub fn through(normal: Vector3, point: &Point3) -> Self {
        Self::new(normal, -normal.dot(&point.coords))
    }

    /// Returns the plane normal.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the plane offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Signed distance from the plane, scaled by the normal's length.
    #[must_use]
    pub fn distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) + self.offset
    }

    /// Returns the plane as `(nx, ny, nz, offset)`.
    #[must_use]
    pub fn to_vector4(&self) -> Vector4 {
        Vector4::new(self.normal.x, self.normal.y, self.normal.z, self.offset)
    }
}
