use crate::math::{Point3, Vector3};
use crate::mesh::Mesh;
use crate::tessellation::{StrokeStyle, TessellateStroke};

use super::{Profile, RectMode, Rectangle, Shape};

/// A rectangle subdivided into evenly spaced cells.
///
/// `columns` extra divisions run across the width and `rows` across the
/// height, giving `(columns + 1) × (rows + 1)` cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    rectangle: Rectangle,
    columns: usize,
    rows: usize,
}

impl Grid {
    /// Creates a grid over `rectangle` with the given division counts.
    #[must_use]
    pub fn new(rectangle: Rectangle, columns: usize, rows: usize) -> Self {
        Self {
            rectangle,
            columns,
            rows,
        }
    }

    /// Returns the outer rectangle.
    #[must_use]
    pub fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    /// Returns the outer rectangle for reconfiguration.
    pub fn rectangle_mut(&mut self) -> &mut Rectangle {
        &mut self.rectangle
    }

    /// Returns the `(columns, rows)` division counts.
    #[must_use]
    pub fn divisions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    /// Sets the division counts.
    pub fn set_divisions(&mut self, columns: usize, rows: usize) {
        self.columns = columns;
        self.rows = rows;
    }

    #[allow(clippy::cast_precision_loss)]
    fn cell_size(&self) -> (f64, f64) {
        (
            self.rectangle.width() / (self.columns + 1) as f64,
            self.rectangle.height() / (self.rows + 1) as f64,
        )
    }

    /// Corner-mode rectangles for every cell, row by row.
    #[allow(clippy::cast_precision_loss)]
    fn cells(&self) -> impl Iterator<Item = Rectangle> + '_ {
        let origin = self.rectangle.min_corner();
        let (cw, ch) = self.cell_size();
        (0..=self.rows).flat_map(move |j| {
            (0..=self.columns).map(move |i| {
                let position = origin + Vector3::new(cw * i as f64, ch * j as f64, 0.0);
                Rectangle::new(position, cw, ch).with_mode(RectMode::Corner)
            })
        })
    }

    /// Strokes the perimeter outward only, then every cell centred on its
    /// borders with half the inner width on each side.
    pub(super) fn stroke(&self, shape: &Shape, style: &StrokeStyle) -> Mesh {
        let normal = shape.normal();
        let mut mesh = stroke_rectangle(shape, self.rectangle, normal, 0.0, style.outer_width(), style);

        let half = style.inner_width() / 2.0;
        for cell in self.cells() {
            mesh.append(&stroke_rectangle(shape, cell, normal, half, half, style));
        }

        tracing::debug!(
            columns = self.columns,
            rows = self.rows,
            vertices = mesh.vertices.len(),
            "stroked grid"
        );
        mesh
    }
}

fn stroke_rectangle(
    shape: &Shape,
    rectangle: Rectangle,
    normal: Vector3,
    inner: f64,
    outer: f64,
    style: &StrokeStyle,
) -> Mesh {
    let cell = Shape {
        anchor: shape.anchor,
        rotation: shape.rotation,
        kind: rectangle.into(),
    };
    TessellateStroke::new(
        cell.vertices(),
        normal,
        style.with_widths(inner, outer),
        rectangle.boundary_kind(),
    )
    .execute()
}

impl Profile for Grid {
    #[allow(clippy::cast_precision_loss)]
    fn vertices(&self) -> Vec<Point3> {
        let origin = self.rectangle.min_corner();
        let (cw, ch) = self.cell_size();
        let mut vertices = Vec::with_capacity((self.columns + 2) * (self.rows + 2));
        for j in 0..self.rows + 2 {
            for i in 0..self.columns + 2 {
                vertices.push(origin + Vector3::new(cw * i as f64, ch * j as f64, 0.0));
            }
        }
        vertices
    }

    fn is_closed(&self) -> bool {
        true
    }
}
