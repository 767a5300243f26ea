use crate::math::Point3;

/// Axis-aligned rectangle storage: a position plus width and height.
///
/// How `position` relates to the corners is decided by the shape that reads
/// it (see [`RectMode`](crate::shape::RectMode)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRectangle {
    pub position: Point3,
    pub width: f64,
    pub height: f64,
}

impl AxisRectangle {
    /// Creates a rectangle at `position` with the given size.
    #[must_use]
    pub fn new(position: Point3, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }
}

impl Default for AxisRectangle {
    fn default() -> Self {
        Self::new(Point3::origin(), 0.0, 0.0)
    }
}
