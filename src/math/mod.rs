pub mod intersect;
pub mod polygon;

pub use intersect::{intersect_2d, intersect_3d};
pub use polygon::{newell_normal, sign};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4D vector type, used for plane equations.
pub type Vector4 = nalgebra::Vector4<f64>;

/// Unit quaternion used for shape orientation.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
