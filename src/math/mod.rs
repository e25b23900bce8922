pub mod angle;

pub use angle::{deg_to_rad, normalize_angle};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D rotation about the origin.
pub type Rotation2 = nalgebra::Rotation2<f64>;
