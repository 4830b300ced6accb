use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Matrix2, NaPoint2, NaVector2, EPS, PI};
use crate::error::{Geom2dError, Result};

/// A 2D vector with tolerance-based equality.
///
/// Two vectors are equal when their difference [`is_zero`](Self::is_zero),
/// so `==` is not transitive and the type has no `Eq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The additive identity `(0, 0)`.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Returns `true` if both components are within [`EPS`] of zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.x.abs() < EPS && self.y.abs() < EPS
    }

    /// Returns the vector rotated by +90°, `(-y, x)`.
    #[must_use]
    pub fn normal(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Polar angle in `(-π, π]`.
    #[must_use]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns the vector scaled to unit length.
    ///
    /// A zero vector is not guarded: its components come back as NaN.
    /// Use [`try_unit`](Self::try_unit) to have it reported instead.
    #[must_use]
    pub fn unit(self) -> Self {
        let n = self.norm();
        Self::new(self.x / n, self.y / n)
    }

    /// Returns the vector scaled to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`Geom2dError::ZeroVector`] if the vector is zero.
    pub fn try_unit(self) -> Result<Self> {
        if self.is_zero() {
            tracing::debug!(x = self.x, y = self.y, "cannot normalize a zero vector");
            return Err(Geom2dError::ZeroVector);
        }
        Ok(self.unit())
    }

    #[must_use]
    pub fn is_unit(self) -> bool {
        (self.norm() - 1.0).abs() < EPS
    }

    /// Builds a vector from a radius and an angle in radians.
    #[must_use]
    pub fn from_polar(r: f64, a: f64) -> Self {
        let (s, c) = a.sin_cos();
        Self::new(r * c, r * s)
    }

    /// Converts cartesian coordinates to `(radius, angle)`.
    #[must_use]
    pub fn polar_from_xy(x: f64, y: f64) -> (f64, f64) {
        Self::new(x, y).to_polar()
    }

    /// Returns `(radius, angle)`.
    #[must_use]
    pub fn to_polar(self) -> (f64, f64) {
        (self.norm(), self.angle())
    }

    #[must_use]
    pub fn first(self) -> f64 {
        self.x
    }

    pub fn first_mut(&mut self) -> &mut f64 {
        &mut self.x
    }

    #[must_use]
    pub fn second(self) -> f64 {
        self.y
    }

    pub fn second_mut(&mut self) -> &mut f64 {
        &mut self.y
    }

    #[must_use]
    pub fn dot(self, v: Self) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// Z component of the 3D cross product.
    #[must_use]
    pub fn cross(self, v: Self) -> f64 {
        self.x * v.y - self.y * v.x
    }

    /// Signed angle from `self` to `v`, in `(-π, π]`.
    #[must_use]
    pub fn angle_to(self, v: Self) -> f64 {
        self.cross(v).atan2(self.dot(v))
    }

    /// Returns `true` if `self + v` is zero.
    #[must_use]
    pub fn is_opposite(self, v: Self) -> bool {
        (self.x + v.x).abs() < EPS && (self.y + v.y).abs() < EPS
    }

    /// Returns `true` if both vectors point the same way.
    ///
    /// A zero vector is parallel to everything.
    #[must_use]
    pub fn is_parallel(self, v: Self) -> bool {
        self.is_zero() || v.is_zero() || self.angle_to(v).abs() < EPS
    }

    #[must_use]
    pub fn is_antiparallel(self, v: Self) -> bool {
        (PI - self.angle_to(v).abs()).abs() < EPS
    }

    #[must_use]
    pub fn is_collinear(self, v: Self) -> bool {
        self.is_parallel(v) || self.is_antiparallel(v)
    }

    #[must_use]
    pub fn is_orthogonal(self, v: Self) -> bool {
        self.is_collinear(v.normal())
    }

    /// Left-multiplies the vector by `m`.
    #[must_use]
    pub fn transform(self, m: &Matrix2) -> Self {
        *m * self
    }

    /// Rotates counter-clockwise by `a` radians.
    #[must_use]
    pub fn rotate_ccw(self, a: f64) -> Self {
        let (s, c) = a.sin_cos();
        Self::new(c * self.x - s * self.y, s * self.x + c * self.y)
    }

    /// Rotates clockwise by `a` radians.
    #[must_use]
    pub fn rotate_cw(self, a: f64) -> Self {
        let (s, c) = a.sin_cos();
        Self::new(c * self.x + s * self.y, -s * self.x + c * self.y)
    }

    /// Returns `true` if either component is NaN.
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Lexicographic `(x, y)` order where components within [`EPS`] tie.
    ///
    /// Without NaN components this returns `Equal` exactly when
    /// `self == other`. NaN components are placed by [`f64::total_cmp`], so
    /// the order stays total for sorting, and `partial_cmp` returns `None`.
    #[must_use]
    pub fn fuzzy_cmp(&self, other: &Self) -> Ordering {
        if (self.x - other.x).abs() < EPS {
            if (self.y - other.y).abs() < EPS {
                Ordering::Equal
            } else {
                self.y.total_cmp(&other.y)
            }
        } else {
            self.x.total_cmp(&other.x)
        }
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, k: f64) {
        *self = *self * k;
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k)
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, k: f64) {
        *self = *self / k;
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        (*self - *other).is_zero()
    }
}

impl PartialOrd for Vector2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(self.fuzzy_cmp(other))
    }
}

impl From<NaVector2> for Vector2 {
    fn from(v: NaVector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for NaVector2 {
    fn from(v: Vector2) -> Self {
        NaVector2::new(v.x, v.y)
    }
}

impl From<NaPoint2> for Vector2 {
    fn from(p: NaPoint2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2> for NaPoint2 {
    fn from(v: Vector2) -> Self {
        NaPoint2::new(v.x, v.y)
    }
}

/// Free-function form of [`Vector2::dot`].
#[must_use]
pub fn dot(u: Vector2, v: Vector2) -> f64 {
    u.dot(v)
}

/// Free-function form of [`Vector2::cross`].
#[must_use]
pub fn cross(u: Vector2, v: Vector2) -> f64 {
    u.cross(v)
}

/// Free-function form of [`Vector2::angle_to`].
#[must_use]
pub fn angle(u: Vector2, v: Vector2) -> f64 {
    u.angle_to(v)
}

#[must_use]
pub fn opposite(u: Vector2, v: Vector2) -> bool {
    u.is_opposite(v)
}

#[must_use]
pub fn parallel(u: Vector2, v: Vector2) -> bool {
    u.is_parallel(v)
}

#[must_use]
pub fn antiparallel(u: Vector2, v: Vector2) -> bool {
    u.is_antiparallel(v)
}

#[must_use]
pub fn collinear(u: Vector2, v: Vector2) -> bool {
    u.is_collinear(v)
}

#[must_use]
pub fn orthogonal(u: Vector2, v: Vector2) -> bool {
    u.is_orthogonal(v)
}
