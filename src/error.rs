use thiserror::Error;

/// Error type for the fallible forms of `geom2d` operations.
///
/// The panicking forms (`Matrix2::inverse`, indexing) are built on top of
/// the fallible ones and report the same message.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Geom2dError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("matrix is not invertible (determinant = {determinant})")]
    Singular { determinant: f64 },

    #[error("matrix index ({row}, {col}) is out of range")]
    IndexOutOfRange { row: usize, col: usize },
}

/// Convenience type alias for results using [`Geom2dError`].
pub type Result<T> = std::result::Result<T, Geom2dError>;
