//! Planar vectors and extents.
//!
//! - `Vector2D`: immutable point/vector value; every operation returns a new value.
//! - `Size2D`: width/height extent, convertible to a vector.
//!
//! Degenerate inputs follow IEEE-754: normalizing a zero vector yields NaN
//! components instead of failing. Guard with `has_magnitude` or use `try_unit`.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::{Matrix2, Vector2};

use crate::radian::Radian;

/// 2D point or vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

pub type Velocity = Vector2D;
pub type Acceleration = Vector2D;

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D::new(0.0, 0.0);
    pub const UNIT_X: Vector2D = Vector2D::new(1.0, 0.0);
    pub const UNIT_Y: Vector2D = Vector2D::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn from_x(x: f64) -> Self {
        Self { x, y: 0.0 }
    }
    #[inline]
    pub const fn from_y(y: f64) -> Self {
        Self { x: 0.0, y }
    }
    #[inline]
    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }
    #[inline]
    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    #[inline]
    pub fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }
    #[inline]
    pub fn subtract(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }
    #[inline]
    pub fn scale(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }
    #[inline]
    pub fn divide(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x / scalar, self.y / scalar)
    }
    #[inline]
    pub fn dot(self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }
    /// z-component of the 3D cross product; positive when `other` is counter-clockwise of `self`.
    #[inline]
    pub fn cross(self, other: Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
    #[inline]
    pub fn distance(self, to: Vector2D) -> f64 {
        (to - self).length()
    }

    /// Same direction, length 1. NaN components for a zero vector.
    #[inline]
    pub fn unit(self) -> Vector2D {
        self.divide(self.length())
    }

    /// `unit`, or None when the vector has no magnitude.
    #[inline]
    pub fn try_unit(self) -> Option<Vector2D> {
        self.has_magnitude().then(|| self.unit())
    }

    /// Unit vector pointing from `self` toward `point`.
    #[inline]
    pub fn unit_to(self, point: Vector2D) -> Vector2D {
        (point - self).unit()
    }

    /// Rotated 90° counter-clockwise, then normalized.
    #[inline]
    pub fn orthogonal_unit(self) -> Vector2D {
        Vector2D::new(-self.y, self.x).unit()
    }

    /// Apply the rotation matrix `[cos −sin; sin cos]`.
    pub fn rotated(self, by: Radian) -> Vector2D {
        let (s, c) = by.value().sin_cos();
        let m = Matrix2::new(c, -s, s, c);
        (m * Vector2::from(self)).into()
    }

    /// Direction of the vector measured from the x-axis, `atan2(y, x)`.
    #[inline]
    pub fn heading(self) -> Radian {
        Radian::new(self.y.atan2(self.x))
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// False when a component is NaN or both are zero.
    #[inline]
    pub fn has_magnitude(self) -> bool {
        !self.is_nan() && self != Vector2D::ZERO
    }
}

impl From<Vector2<f64>> for Vector2D {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vector2<f64> {
    #[inline]
    fn from(v: Vector2D) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn add(self, rhs: Vector2D) -> Self::Output {
        Vector2D::add(self, rhs)
    }
}
impl Sub for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn sub(self, rhs: Vector2D) -> Self::Output {
        self.subtract(rhs)
    }
}
impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}
/// `v * w` is the dot product.
impl Mul for Vector2D {
    type Output = f64;
    #[inline]
    fn mul(self, rhs: Vector2D) -> Self::Output {
        self.dot(rhs)
    }
}
impl Div<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}
impl Neg for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2D::new(-self.x, -self.y)
    }
}
impl AddAssign for Vector2D {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2D) {
        *self = *self + rhs;
    }
}
impl SubAssign for Vector2D {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2D) {
        *self = *self - rhs;
    }
}
impl MulAssign<f64> for Vector2D {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}
impl DivAssign<f64> for Vector2D {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

/// Width/height extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size2D {
    pub width: f64,
    pub height: f64,
}

impl Size2D {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
    /// Half extent in both dimensions.
    #[inline]
    pub fn center(self) -> Size2D {
        Size2D::new(self.width / 2.0, self.height / 2.0)
    }
    #[inline]
    pub fn to_vector(self) -> Vector2D {
        self.into()
    }
}

impl From<Size2D> for Vector2D {
    #[inline]
    fn from(size: Size2D) -> Self {
        Vector2D::new(size.width, size.height)
    }
}

impl From<Vector2D> for Size2D {
    #[inline]
    fn from(v: Vector2D) -> Self {
        Size2D::new(v.x, v.y)
    }
}
