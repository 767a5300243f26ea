use crate::math::Point3;

/// An ordered list of points, optionally connected back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point3>,
    closed: bool,
}

impl Polyline {
    /// Creates a polyline from its points and closure flag.
    #[must_use]
    pub fn new(points: Vec<Point3>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Returns the ordered points.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns whether the last point connects back to the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Sets the closure flag.
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    /// Appends a point.
    pub fn push(&mut self, point: Point3) {
        self.points.push(point);
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
