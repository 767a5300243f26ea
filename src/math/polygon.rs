use super::{Point3, Vector3, TOLERANCE};

/// Returns `1.0` for non-negative values and `-1.0` otherwise.
///
/// Unlike [`f64::signum`], zero maps to `1.0` so that a vanishing orientation
/// test keeps the default side.
#[must_use]
pub fn sign(x: f64) -> f64 {
    if x >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Unit normal of a (roughly planar) closed polygon by Newell's method.
///
/// The normal follows the right-hand rule over the vertex order. Returns
/// `None` for fewer than 3 points or a polygon with no enclosed area.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Option<Vector3> {
    let n = points.len();
    if n < 3 {
        return None;
    }

    let mut normal = Vector3::zeros();
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }

    normal.try_normalize(TOLERANCE)
}
