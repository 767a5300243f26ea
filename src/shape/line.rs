use crate::math::Point3;

use super::Profile;

/// A single open segment from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: Point3,
    b: Point3,
}

impl Line {
    /// Creates a segment between two endpoints.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }

    /// Moves both endpoints.
    pub fn set_endpoints(&mut self, a: Point3, b: Point3) {
        self.a = a;
        self.b = b;
    }

    /// Returns the `(a, b)` endpoints.
    #[must_use]
    pub fn endpoints(&self) -> (Point3, Point3) {
        (self.a, self.b)
    }
}

impl Profile for Line {
    fn vertices(&self) -> Vec<Point3> {
        vec![self.a, self.b]
    }

    fn is_closed(&self) -> bool {
        false
    }
}
