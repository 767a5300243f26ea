use crate::geometry::AxisRectangle;
use crate::math::{Point3, Vector3};
use crate::mesh::{Mesh, Topology};

use super::Profile;

/// How a rectangle's stored position relates to its corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RectMode {
    /// The position is the minimum corner.
    #[default]
    Corner,
    /// The position is the centroid.
    Center,
}

/// An axis-aligned rectangle in the shape's local XY plane.
///
/// Vertices start at the minimum corner and run `+height`, `+width +height`,
/// `+width`, which is counter-clockwise about the shape normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    rect: AxisRectangle,
    mode: RectMode,
}

impl Rectangle {
    /// Creates a corner-mode rectangle.
    #[must_use]
    pub fn new(position: Point3, width: f64, height: f64) -> Self {
        Self::from_rect(AxisRectangle::new(position, width, height))
    }

    /// Creates a corner-mode rectangle from stored rectangle parameters.
    #[must_use]
    pub fn from_rect(rect: AxisRectangle) -> Self {
        Self {
            rect,
            mode: RectMode::Corner,
        }
    }

    /// Builder form of [`set_mode`](Self::set_mode).
    #[must_use]
    pub fn with_mode(mut self, mode: RectMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets how the position is interpreted.
    pub fn set_mode(&mut self, mode: RectMode) {
        self.mode = mode;
    }

    /// Returns how the position is interpreted.
    #[must_use]
    pub fn mode(&self) -> RectMode {
        self.mode
    }

    /// Returns the stored rectangle parameters.
    #[must_use]
    pub fn rect(&self) -> &AxisRectangle {
        &self.rect
    }

    /// Returns the stored rectangle parameters for reconfiguration.
    pub fn rect_mut(&mut self) -> &mut AxisRectangle {
        &mut self.rect
    }

    /// Width along local X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rect.width
    }

    /// Height along local Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.height
    }

    /// The corner with the smallest local coordinates.
    #[must_use]
    pub fn min_corner(&self) -> Point3 {
        match self.mode {
            RectMode::Corner => self.rect.position,
            RectMode::Center => {
                self.rect.position - Vector3::new(self.rect.width / 2.0, self.rect.height / 2.0, 0.0)
            }
        }
    }
}

impl Profile for Rectangle {
    fn vertices(&self) -> Vec<Point3> {
        let o = self.min_corner();
        let (w, h) = (self.rect.width, self.rect.height);
        vec![
            o,
            o + Vector3::new(0.0, h, 0.0),
            o + Vector3::new(w, h, 0.0),
            o + Vector3::new(w, 0.0, 0.0),
        ]
    }

    fn is_closed(&self) -> bool {
        true
    }
}

/// Fills a four-vertex outline as a two-triangle strip.
pub(super) fn quad_face(outline: Mesh) -> Mesh {
    let mut mesh = outline;
    mesh.topology = Some(Topology::TriangleStrip);
    mesh.indices = vec![0, 1, 3, 2];
    mesh
}
