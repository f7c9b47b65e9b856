//! Raw scalar angles.
//!
//! `Radian` never canonicalizes on its own: arithmetic keeps the full,
//! unbounded value so cumulative turning survives (see `rotation`). Folding
//! into a canonical range is explicit, via `truncated` or `shortest_angle`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::cfg::ZERO_EPS;

/// π as a plain scalar.
pub const PI: f64 = std::f64::consts::PI;
/// One full turn, 2π.
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Sign of a raw angle. Zero counts as `Plus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Give `radian` this sign's orientation: `Plus` keeps it, `Minus` negates it.
    #[inline]
    pub fn apply(self, radian: Radian) -> Radian {
        match self {
            Sign::Plus => radian,
            Sign::Minus => -radian,
        }
    }
}

/// Angle in radians, stored raw.
///
/// Invariants:
/// - Comparisons (`==`, `<`, `>`) are exact float comparisons on the raw value.
/// - Only `is_zero` is tolerant (`ZERO_EPS`).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radian(f64);

impl Radian {
    pub const ZERO: Radian = Radian(0.0);
    pub const PI: Radian = Radian(PI);
    pub const TWO_PI: Radian = Radian(TWO_PI);

    #[inline]
    pub const fn new(radian: f64) -> Self {
        Self(radian)
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn sign(self) -> Sign {
        if self.0 >= 0.0 {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }

    /// True for exactly zero or a raw magnitude below `ZERO_EPS`.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.is_zero_eps(ZERO_EPS)
    }

    #[inline]
    pub fn not_zero(self) -> bool {
        !self.is_zero()
    }

    /// `is_zero` with a caller-chosen tolerance.
    #[inline]
    pub fn is_zero_eps(self, eps: f64) -> bool {
        self.0 == 0.0 || (self.0 < 0.0 && self.0 > -eps) || (self.0 > 0.0 && self.0 < eps)
    }

    /// Raw value modulo 2π; keeps the sign of `self`, so the result is in (−2π, 2π).
    #[inline]
    pub fn truncated(self) -> Radian {
        self.truncating_remainder(TWO_PI)
    }

    /// Float remainder with the sign of the dividend.
    #[inline]
    pub fn truncating_remainder(self, divisor: f64) -> Radian {
        Radian(self.0 % divisor)
    }

    /// Signed displacement of least magnitude taking `from` onto `to`, in (−π, π].
    pub fn shortest_angle(from: Radian, to: Radian) -> Radian {
        let mut angle = (to.0 - from.0) % TWO_PI;
        if angle > PI {
            angle -= TWO_PI;
        } else if angle <= -PI {
            angle += TWO_PI;
        }
        Radian(angle)
    }

    /// Method form of `shortest_angle` starting at `self`.
    #[inline]
    pub fn shortest_angle_to(self, to: Radian) -> Radian {
        Self::shortest_angle(self, to)
    }

    #[inline]
    pub fn abs(self) -> Radian {
        Radian(self.0.abs())
    }

    #[inline]
    pub fn min(self, other: Radian) -> Radian {
        Radian(self.0.min(other.0))
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl fmt::Display for Radian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} radian", self.0)
    }
}

impl From<f64> for Radian {
    #[inline]
    fn from(radian: f64) -> Self {
        Radian(radian)
    }
}

impl From<Radian> for f64 {
    #[inline]
    fn from(radian: Radian) -> Self {
        radian.0
    }
}

impl Add for Radian {
    type Output = Radian;
    #[inline]
    fn add(self, rhs: Radian) -> Self::Output {
        Radian(self.0 + rhs.0)
    }
}

impl Sub for Radian {
    type Output = Radian;
    #[inline]
    fn sub(self, rhs: Radian) -> Self::Output {
        Radian(self.0 - rhs.0)
    }
}

impl Neg for Radian {
    type Output = Radian;
    #[inline]
    fn neg(self) -> Self::Output {
        Radian(-self.0)
    }
}

impl Mul<f64> for Radian {
    type Output = Radian;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Radian(self.0 * rhs)
    }
}

impl Mul for Radian {
    type Output = Radian;
    #[inline]
    fn mul(self, rhs: Radian) -> Self::Output {
        Radian(self.0 * rhs.0)
    }
}

impl AddAssign for Radian {
    #[inline]
    fn add_assign(&mut self, rhs: Radian) {
        *self = *self + rhs;
    }
}

impl SubAssign for Radian {
    #[inline]
    fn sub_assign(&mut self, rhs: Radian) {
        *self = *self - rhs;
    }
}
