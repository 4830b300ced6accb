use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::{NaMatrix2, Vector2, EPS};
use crate::error::{Geom2dError, Result};

/// A 2x2 matrix stored as two column vectors.
///
/// Element `(row, col)` maps to `(0,0) = col0.x`, `(0,1) = col1.x`,
/// `(1,0) = col0.y`, `(1,1) = col1.y`. Equality and every classification
/// predicate are tolerance-based, using [`EPS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Matrix2 {
    col0: Vector2,
    col1: Vector2,
}

impl Matrix2 {
    /// Creates a matrix from its entries in row-major order, `[[d1, d2], [d3, d4]]`.
    #[must_use]
    pub const fn new(d1: f64, d2: f64, d3: f64, d4: f64) -> Self {
        Self {
            col0: Vector2::new(d1, d3),
            col1: Vector2::new(d2, d4),
        }
    }

    #[must_use]
    pub const fn from_columns(col0: Vector2, col1: Vector2) -> Self {
        Self { col0, col1 }
    }

    /// Returns `k * I`.
    #[must_use]
    pub const fn from_scalar(k: f64) -> Self {
        Self::new(k, 0.0, 0.0, k)
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::from_scalar(0.0)
    }

    #[must_use]
    pub const fn identity() -> Self {
        Self::from_scalar(1.0)
    }

    /// Counter-clockwise rotation by `a` radians.
    #[must_use]
    pub fn rotation(a: f64) -> Self {
        let (s, c) = a.sin_cos();
        Self::new(c, -s, s, c)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.col0.is_zero() && self.col1.is_zero()
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        (self.col0.x - 1.0).abs() < EPS
            && self.col0.y.abs() < EPS
            && self.col1.x.abs() < EPS
            && (self.col1.y - 1.0).abs() < EPS
    }

    fn slot(&self, row: usize, col: usize) -> Result<&f64> {
        match (row, col) {
            (0, 0) => Ok(&self.col0.x),
            (0, 1) => Ok(&self.col1.x),
            (1, 0) => Ok(&self.col0.y),
            (1, 1) => Ok(&self.col1.y),
            _ => Err(Geom2dError::IndexOutOfRange { row, col }),
        }
    }

    fn slot_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        match (row, col) {
            (0, 0) => Ok(&mut self.col0.x),
            (0, 1) => Ok(&mut self.col1.x),
            (1, 0) => Ok(&mut self.col0.y),
            (1, 1) => Ok(&mut self.col1.y),
            _ => Err(Geom2dError::IndexOutOfRange { row, col }),
        }
    }

    /// Returns element `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Geom2dError::IndexOutOfRange`] unless both indices are 0 or 1.
    pub fn try_get(&self, row: usize, col: usize) -> Result<f64> {
        self.slot(row, col).copied()
    }

    /// First column.
    #[must_use]
    pub fn first(&self) -> &Vector2 {
        &self.col0
    }

    pub fn first_mut(&mut self) -> &mut Vector2 {
        &mut self.col0
    }

    /// Second column.
    #[must_use]
    pub fn second(&self) -> &Vector2 {
        &self.col1
    }

    pub fn second_mut(&mut self) -> &mut Vector2 {
        &mut self.col1
    }

    /// Classical adjugate: `[[a, b], [c, d]]` becomes `[[d, -b], [-c, a]]`.
    #[must_use]
    pub fn adjoint(&self) -> Self {
        Self::new(self.col1.y, -self.col1.x, -self.col0.y, self.col0.x)
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::new(self.col0.x, self.col0.y, self.col1.x, self.col1.y)
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.col0.x * self.col1.y - self.col1.x * self.col0.y
    }

    /// Sum of the diagonal entries.
    #[must_use]
    pub fn trace(&self) -> f64 {
        self.col0.x + self.col1.y
    }

    /// 2 if invertible, 0 if zero, 1 otherwise.
    #[must_use]
    pub fn rank(&self) -> usize {
        if self.is_invertible() {
            2
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() > EPS
    }

    /// Returns the inverse matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Geom2dError::Singular`] if `|determinant| <= EPS`.
    pub fn try_inverse(&self) -> Result<Self> {
        let determinant = self.determinant();
        if determinant.abs() <= EPS {
            tracing::debug!(determinant, "matrix is not invertible");
            return Err(Geom2dError::Singular { determinant });
        }
        Ok(self.adjoint() / determinant)
    }

    /// Returns the inverse matrix.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not invertible. Check
    /// [`is_invertible`](Self::is_invertible) first or use
    /// [`try_inverse`](Self::try_inverse).
    #[must_use]
    #[track_caller]
    pub fn inverse(&self) -> Self {
        match self.try_inverse() {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    /// Raises the matrix to an integer power by repeated squaring.
    ///
    /// A negative exponent raises the inverse to `|n|`; `n = 0` gives the identity.
    ///
    /// # Errors
    ///
    /// Returns [`Geom2dError::Singular`] if `n < 0` and the matrix is not invertible.
    pub fn try_pow(&self, n: i64) -> Result<Self> {
        let base = if n < 0 { self.try_inverse()? } else { *self };
        Ok(binary_pow(base, n.unsigned_abs()))
    }

    /// Raises the matrix to an integer power by repeated squaring.
    ///
    /// # Panics
    ///
    /// Panics if `n < 0` and the matrix is not invertible.
    #[must_use]
    #[track_caller]
    pub fn pow(&self, n: i64) -> Self {
        match self.try_pow(n) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    /// `A * Aᵗ == Aᵗ * A`.
    #[must_use]
    pub fn is_normal(&self) -> bool {
        let t = self.transpose();
        *self * t == t * *self
    }

    /// `A * Aᵗ == I`.
    #[must_use]
    pub fn is_orthogonal(&self) -> bool {
        self.is_normal() && (*self * self.transpose()).is_identity()
    }

    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        self.col0.y.abs() < EPS && self.col1.x.abs() < EPS
    }

    #[must_use]
    pub fn is_antidiagonal(&self) -> bool {
        self.col0.x.abs() < EPS && self.col1.y.abs() < EPS
    }

    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (self.col0.y - self.col1.x).abs() < EPS
    }

    /// Returns `true` if the two diagonal entries are equal.
    ///
    /// For a 2x2 matrix this is exactly symmetry about the anti-diagonal.
    #[must_use]
    pub fn is_persymmetric(&self) -> bool {
        (self.col0.x - self.col1.y).abs() < EPS
    }

    #[must_use]
    pub fn is_bisymmetric(&self) -> bool {
        self.is_symmetric() && self.is_persymmetric()
    }

    #[must_use]
    pub fn is_skew_symmetric(&self) -> bool {
        self.transpose() == -*self
    }

    /// `A * A == I`.
    #[must_use]
    pub fn is_involutory(&self) -> bool {
        (*self * *self).is_identity()
    }

    /// `A * A == A`.
    #[must_use]
    pub fn is_idempotent(&self) -> bool {
        *self * *self == *self
    }

    /// Returns `true` if any entry is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.col0.is_nan() || self.col1.is_nan()
    }

    /// Orders by first column, then second, using the tolerant vector order.
    ///
    /// NaN entries follow [`Vector2::fuzzy_cmp`]: the order stays total, and
    /// `partial_cmp` returns `None`.
    #[must_use]
    pub fn fuzzy_cmp(&self, other: &Self) -> Ordering {
        self.col0
            .fuzzy_cmp(&other.col0)
            .then_with(|| self.col1.fuzzy_cmp(&other.col1))
    }
}

fn binary_pow(mut base: Matrix2, mut n: u64) -> Matrix2 {
    let exponent = n;
    let mut squarings = 0_u32;
    let mut acc = Matrix2::identity();
    while n > 0 {
        if n & 1 == 1 {
            acc *= base;
        }
        n >>= 1;
        if n > 0 {
            base *= base;
            squarings += 1;
        }
    }
    tracing::trace!(exponent, squarings, "binary exponentiation");
    acc
}

/// Free-function form of [`Matrix2::pow`].
///
/// # Panics
///
/// Panics if `n < 0` and `m` is not invertible.
#[must_use]
#[track_caller]
pub fn pow(m: &Matrix2, n: i64) -> Matrix2 {
    m.pow(n)
}

impl From<f64> for Matrix2 {
    fn from(k: f64) -> Self {
        Self::from_scalar(k)
    }
}

impl Index<(usize, usize)> for Matrix2 {
    type Output = f64;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        match self.slot(row, col) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<(usize, usize)> for Matrix2 {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        match self.slot_mut(row, col) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Add for Matrix2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_columns(self.col0 + rhs.col0, self.col1 + rhs.col1)
    }
}

impl AddAssign for Matrix2 {
    fn add_assign(&mut self, rhs: Self) {
        self.col0 += rhs.col0;
        self.col1 += rhs.col1;
    }
}

impl Sub for Matrix2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_columns(self.col0 - rhs.col0, self.col1 - rhs.col1)
    }
}

impl SubAssign for Matrix2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.col0 -= rhs.col0;
        self.col1 -= rhs.col1;
    }
}

impl Mul for Matrix2 {
    type Output = Self;

    #[rustfmt::skip]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.col0, self.col1);
        let (c, d) = (rhs.col0, rhs.col1);
        Self::new(
            a.x * c.x + b.x * c.y, a.x * d.x + b.x * d.y,
            a.y * c.x + b.y * c.y, a.y * d.x + b.y * d.y,
        )
    }
}

impl MulAssign for Matrix2 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Matrix2 {
    type Output = Self;

    /// Multiplies by the inverse of `rhs`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is not invertible.
    #[track_caller]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for Matrix2 {
    #[track_caller]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Mul<f64> for Matrix2 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::from_columns(self.col0 * k, self.col1 * k)
    }
}

impl Mul<Matrix2> for f64 {
    type Output = Matrix2;

    fn mul(self, m: Matrix2) -> Matrix2 {
        m * self
    }
}

impl MulAssign<f64> for Matrix2 {
    fn mul_assign(&mut self, k: f64) {
        self.col0 *= k;
        self.col1 *= k;
    }
}

impl Div<f64> for Matrix2 {
    type Output = Self;

    fn div(self, k: f64) -> Self {
        Self::from_columns(self.col0 / k, self.col1 / k)
    }
}

impl DivAssign<f64> for Matrix2 {
    fn div_assign(&mut self, k: f64) {
        self.col0 /= k;
        self.col1 /= k;
    }
}

impl Neg for Matrix2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_columns(-self.col0, -self.col1)
    }
}

impl Mul<Vector2> for Matrix2 {
    type Output = Vector2;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn mul(self, v: Vector2) -> Vector2 {
        self.col0 * v.x + self.col1 * v.y
    }
}

impl PartialEq for Matrix2 {
    fn eq(&self, other: &Self) -> bool {
        (*self - *other).is_zero()
    }
}

impl PartialOrd for Matrix2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(self.fuzzy_cmp(other))
    }
}

impl From<NaMatrix2> for Matrix2 {
    fn from(m: NaMatrix2) -> Self {
        Self::new(m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)])
    }
}

impl From<Matrix2> for NaMatrix2 {
    fn from(m: Matrix2) -> Self {
        NaMatrix2::new(m.col0.x, m.col1.x, m.col0.y, m.col1.y)
    }
}
