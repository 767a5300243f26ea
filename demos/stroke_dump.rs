//! Prints outline, stroke and face statistics for one shape of each kind.
//!
//! ```text
//! cargo run --example stroke_dump
//! RUST_LOG=meshshape=trace cargo run --example stroke_dump
//! ```

use meshshape::geometry::Polyline;
use meshshape::math::{Point3, Vector3};
use meshshape::shape::{AdjacencyLine, Arc, Circle, Contour, Grid, Line, RectMode, Rectangle};
use meshshape::{Mesh, Shape, Topology};

fn main() -> meshshape::Result<()> {
    // Default: WARN for everything, INFO for meshshape.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("meshshape=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let zigzag = Polyline::new(
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(3.0, 1.0, 0.0),
            Point3::new(3.0, -1.0, 0.0),
        ],
        false,
    );

    let shapes = [
        (
            "rectangle",
            Shape::new(Rectangle::new(Point3::origin(), 4.0, 2.0).with_mode(RectMode::Center))
                .with_rotation(30.0, &Vector3::x())?,
        ),
        (
            "grid",
            Shape::new(Grid::new(Rectangle::new(Point3::origin(), 3.0, 3.0), 2, 2)),
        ),
        (
            "arc",
            Shape::new(Arc::new(Point3::origin(), 2.0, 12)?.with_angles(0.0, 120.0).with_closed(true)),
        ),
        ("circle", Shape::new(Circle::new(Point3::origin(), 1.5, 24)?)),
        (
            "line",
            Shape::new(Line::new(Point3::origin(), Point3::new(2.0, 3.0, 0.0))),
        ),
        ("contour", Shape::new(Contour::new(zigzag.clone()))),
        (
            "adjacency",
            Shape::new(AdjacencyLine::new(
                Contour::new(zigzag),
                Point3::new(-1.0, 1.0, 0.0),
                Point3::new(3.0, -2.0, 0.0),
            )),
        ),
    ];

    for (name, shape) in &shapes {
        let outline = shape.outline();
        let strip = shape.stroke_outline(0.1, 0.05, Topology::TriangleStrip)?;
        let triangles = shape.stroke_outline(0.1, 0.05, Topology::Triangles)?;
        let face = shape.face()?;
        println!("{name}:");
        report("outline", &outline);
        report("stroke strip", &strip);
        report("stroke triangles", &triangles);
        report("face", &face);
    }

    Ok(())
}

fn report(label: &str, mesh: &Mesh) {
    println!(
        "  {label:<16} topology={:<22} vertices={:<4} indices={:<4} primitives={}",
        format!("{:?}", mesh.topology),
        mesh.vertices.len(),
        mesh.indices.len(),
        mesh.primitive_count()
    );
}
