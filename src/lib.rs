pub mod error;
pub mod math;

pub use error::{Geom2dError, Result};
pub use math::{
    angle, antiparallel, collinear, cross, dot, opposite, orthogonal, parallel, pow, Matrix2,
    Vector2, EPS, PI,
};
