use super::{Point2, Point3, TOLERANCE};

/// Intersection of the infinite 2D lines through `p0 → p1` and `q0 → q1`.
///
/// Uses the ratio of the signed areas spanned by `p0` and `p1` against the
/// second line. Returns `None` when the lines are parallel or either one is
/// degenerate.
#[must_use]
pub fn intersect_2d(p0: &Point2, p1: &Point2, q0: &Point2, q1: &Point2) -> Option<Point2> {
    let dp = p1 - p0;
    let dq = q1 - q0;

    let area0 = cross_2d(dq.x, dq.y, p0.x - q0.x, p0.y - q0.y);
    let area1 = cross_2d(dq.x, dq.y, p1.x - q0.x, p1.y - q0.y);
    let denom = area0 - area1;

    let scale = dp.norm() * dq.norm();
    if denom.abs() <= TOLERANCE * scale || scale == 0.0 {
        return None;
    }

    let t = area0 / denom;
    Some(p0 + dp * t)
}

/// Intersection of the infinite 3D lines through `p0 → p1` and `q0 → q1`.
///
/// Same construction as [`intersect_2d`], with the signed areas measured along
/// the common normal `(q1 - q0) × (p1 - p0)` instead of the Z axis. For
/// coplanar lines this is the exact crossing point; for skew lines it is the
/// point on the first line closest to the second.
///
/// Returns `None` when the weights cannot be normalised: parallel lines, or a
/// zero-length direction on either side.
#[must_use]
pub fn intersect_3d(p0: &Point3, p1: &Point3, q0: &Point3, q1: &Point3) -> Option<Point3> {
    let dp = p1 - p0;
    let dq = q1 - q0;
    let axis = dq.cross(&dp);

    let area0 = dq.cross(&(p0 - q0)).dot(&axis);
    let area1 = dq.cross(&(p1 - q0)).dot(&axis);
    let denom = area0 - area1;

    // denom == -|axis|², so this compares the sine of the angle between the lines.
    let scale = dp.norm() * dq.norm();
    if denom.abs() <= (TOLERANCE * scale).powi(2) || scale == 0.0 {
        return None;
    }

    let t = area0 / denom;
    Some(p0 + dp * t)
}

#[inline]
fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}
