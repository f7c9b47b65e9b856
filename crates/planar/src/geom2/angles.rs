//! Angles between vectors and orientation classification.

use crate::radian::{Radian, TWO_PI};
use crate::vector::Vector2D;

/// How a vector is turned relative to a reference vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationOrientation {
    Equal,
    Clockwise,
    CounterClockwise,
    Opposite,
}

impl RotationOrientation {
    /// Signed form of `radian` for this orientation: clockwise positive,
    /// counter-clockwise negative. `Equal`/`Opposite` leave it unchanged.
    pub fn apply(self, radian: Radian) -> Radian {
        match self {
            RotationOrientation::Clockwise => radian.abs(),
            RotationOrientation::CounterClockwise => -radian.abs(),
            RotationOrientation::Equal | RotationOrientation::Opposite => radian,
        }
    }
}

/// Orientation of `of` relative to `relative_to`, from `angle_cc(relative_to, of)`.
///
/// Exact comparisons: `Equal` only for an angle of exactly 0 and `Opposite`
/// only for exactly π. `atan2` may report an anti-parallel pair as −π, which
/// lands in `Clockwise`; multiples of π are not special-cased.
pub fn orientation(of: Vector2D, relative_to: Vector2D) -> RotationOrientation {
    let angle = angle_cc(relative_to, of);
    if angle == Radian::ZERO {
        RotationOrientation::Equal
    } else if angle == Radian::PI {
        RotationOrientation::Opposite
    } else if angle > Radian::ZERO {
        RotationOrientation::CounterClockwise
    } else {
        RotationOrientation::Clockwise
    }
}

/// Unsigned angle in [0, π], `acos(a·b / (|a||b|))`. NaN if either vector lacks magnitude.
#[inline]
pub fn angle_between(a: Vector2D, b: Vector2D) -> Radian {
    Radian::new((a.dot(b) / (a.length() * b.length())).acos())
}

/// Signed angle from `a` to `b`, counter-clockwise positive, in [−π, π].
#[inline]
pub fn angle_cc(a: Vector2D, b: Vector2D) -> Radian {
    Radian::new(a.cross(b).atan2(a.dot(b)))
}

/// `angle_cc` remapped into [0, 2π).
#[inline]
pub fn angle_c(a: Vector2D, b: Vector2D) -> Radian {
    let angle = angle_cc(a, b);
    if angle < Radian::ZERO {
        angle + Radian::new(TWO_PI)
    } else {
        angle
    }
}
