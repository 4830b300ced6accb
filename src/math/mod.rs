pub mod matrix2;
pub mod vector2;

pub use matrix2::{pow, Matrix2};
pub use vector2::{
    angle, antiparallel, collinear, cross, dot, opposite, orthogonal, parallel, Vector2,
};

/// nalgebra 2D point type.
pub type NaPoint2 = nalgebra::Point2<f64>;

/// nalgebra 2D vector type.
pub type NaVector2 = nalgebra::Vector2<f64>;

/// nalgebra 2x2 matrix type.
pub type NaMatrix2 = nalgebra::Matrix2<f64>;

/// Global tolerance for every fuzzy comparison in the crate.
pub const EPS: f64 = 1e-10;

/// Angle period reference for antiparallel detection.
pub const PI: f64 = std::f64::consts::PI;
