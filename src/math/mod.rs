pub mod catmull_rom;
pub mod intersect_2d;
pub mod segment_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Angular tolerance (radians) for the parallel-line test.
///
/// Two directions are parallel when the angle between them, taken modulo π,
/// falls below this threshold.
pub const PARALLEL_EPSILON: f64 = f64::EPSILON;

/// Coordinate-distance tolerance for point-equality tests, such as deciding
/// whether a polyline is closed. Distinct from [`PARALLEL_EPSILON`], which
/// compares angles.
pub const POINT_EPSILON: f64 = 1e-10;
