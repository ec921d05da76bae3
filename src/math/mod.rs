pub mod bounds;
pub mod clip;

pub use bounds::Bounds;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Default on-boundary tolerance for containment queries.
pub const DEFAULT_EPSILON: f64 = 1e-10;
