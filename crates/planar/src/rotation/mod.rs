//! Signed cumulative rotation.
//!
//! Purpose
//! - Track how far, net, something has turned and in which direction, across
//!   a sequence of angle samples. Clockwise and counter-clockwise turning
//!   cancel when combined.
//! - Stay unbounded while accumulating (several full turns are kept) and fold
//!   back to the shortest equivalent turn only on request (`truncated`).
//!
//! Conventions
//! - A positive raw delta is clockwise. `clockwise_radian` is the signed view
//!   with clockwise positive.
//! - Payload magnitudes are non-negative once normalized (`positive_radian`).

use std::ops::{Add, AddAssign};

use crate::log::{debug, trace};
use crate::radian::{Radian, PI, TWO_PI};

/// Direction-tagged cumulative rotation.
///
/// Invariants:
/// - After `positive_radian`, the payload of `Clockwise`/`CounterClockwise` is ≥ 0.
/// - `None` is the identity of `+`.
#[derive(Clone, Copy, Debug, Default)]
pub enum Rotation {
    #[default]
    None,
    Clockwise(Radian),
    CounterClockwise(Radian),
}

impl Rotation {
    /// Classify a raw delta: near-zero → `None`, positive → `Clockwise`,
    /// negative → `CounterClockwise` with the magnitude.
    pub fn from_delta(delta: Radian) -> Self {
        if delta.is_zero() {
            Rotation::None
        } else if delta > Radian::ZERO {
            Rotation::Clockwise(delta)
        } else {
            Rotation::CounterClockwise(-delta)
        }
    }

    /// Rotation from sample `previous` to sample `now`, using the raw
    /// (unfolded) difference `now − previous`.
    #[inline]
    pub fn between(previous: Radian, now: Radian) -> Self {
        Self::from_delta(now - previous)
    }

    /// Net rotation over a sequence of angle samples: the sum of `between`
    /// over each consecutive pair. Fewer than two samples give `None`.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Radian>,
    {
        let mut iter = samples.into_iter();
        let Some(mut previous) = iter.next() else {
            return Rotation::None;
        };
        let mut total = Rotation::None;
        for now in iter {
            total = total.accumulate(previous, now);
            trace!(
                previous = previous.value(),
                now = now.value(),
                total = total.clockwise_radian().value(),
                "rotation sample"
            );
            previous = now;
        }
        total
    }

    /// `self` plus the rotation from `previous` to `now`.
    #[inline]
    pub fn accumulate(self, previous: Radian, now: Radian) -> Self {
        self + Self::between(previous, now)
    }

    /// Move a negative payload to the opposite direction with its magnitude.
    pub fn positive_radian(self) -> Self {
        match self {
            Rotation::Clockwise(m) if m < Radian::ZERO => Rotation::CounterClockwise(-m),
            Rotation::CounterClockwise(m) if m < Radian::ZERO => Rotation::Clockwise(-m),
            other => other,
        }
    }

    /// Shortest single-direction turn equivalent to `self`, magnitude in [0, π].
    ///
    /// Whole turns are dropped; a remainder beyond half a turn is reported as
    /// the complementary arc in the opposite direction.
    pub fn truncated(self) -> Self {
        let (magnitude, clockwise) = match self.positive_radian() {
            Rotation::None => return Rotation::None,
            Rotation::Clockwise(m) => (m, true),
            Rotation::CounterClockwise(m) => (m, false),
        };
        let reduced = magnitude.truncated();
        if reduced.is_zero() {
            return Rotation::None;
        }
        if reduced.value() > PI {
            let inverted = Radian::new(TWO_PI) - reduced;
            debug!(
                reduced = reduced.value(),
                inverted = inverted.value(),
                "rotation truncated past half a turn, flipping direction"
            );
            if clockwise {
                Rotation::CounterClockwise(inverted)
            } else {
                Rotation::Clockwise(inverted)
            }
        } else if clockwise {
            Rotation::Clockwise(reduced)
        } else {
            Rotation::CounterClockwise(reduced)
        }
    }

    /// Signed view, clockwise positive.
    #[inline]
    pub fn clockwise_radian(self) -> Radian {
        match self {
            Rotation::None => Radian::ZERO,
            Rotation::Clockwise(m) => m,
            Rotation::CounterClockwise(m) => -m,
        }
    }

    /// Signed view, counter-clockwise positive.
    #[inline]
    pub fn counter_clockwise_radian(self) -> Radian {
        -self.clockwise_radian()
    }

    /// Fractional number of clockwise turns.
    #[inline]
    pub fn clockwise_rotations(self) -> f64 {
        self.clockwise_radian().value() / TWO_PI
    }

    #[inline]
    pub fn counter_clockwise_rotations(self) -> f64 {
        self.counter_clockwise_radian().value() / TWO_PI
    }

    /// Whole clockwise turns, truncated toward zero.
    #[inline]
    pub fn full_clockwise_rotations(self) -> i64 {
        self.clockwise_rotations().trunc() as i64
    }

    #[inline]
    pub fn full_counter_clockwise_rotations(self) -> i64 {
        self.counter_clockwise_rotations().trunc() as i64
    }

    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, Rotation::None)
    }
}

/// Equal iff the signed clockwise views are equal (exact float comparison).
impl PartialEq for Rotation {
    fn eq(&self, other: &Self) -> bool {
        self.clockwise_radian() == other.clockwise_radian()
    }
}

impl Add for Rotation {
    type Output = Rotation;

    /// Opposite directions cancel; on an exact tie the clockwise side wins
    /// with a zero magnitude.
    fn add(self, rhs: Rotation) -> Self::Output {
        use Rotation::{Clockwise as Cw, CounterClockwise as Ccw, None};
        match (self.positive_radian(), rhs.positive_radian()) {
            (None, None) => None,
            (None, r) | (r, None) => r,
            (Cw(a), Cw(b)) => Cw(a + b),
            (Ccw(a), Ccw(b)) => Ccw(a + b),
            (Cw(cw), Ccw(ccw)) | (Ccw(ccw), Cw(cw)) => {
                if ccw > cw {
                    Ccw(ccw - cw)
                } else {
                    Cw(cw - ccw)
                }
            }
        }
    }
}

impl AddAssign for Rotation {
    #[inline]
    fn add_assign(&mut self, rhs: Rotation) {
        *self = *self + rhs;
    }
}

impl From<Radian> for Rotation {
    #[inline]
    fn from(delta: Radian) -> Self {
        Self::from_delta(delta)
    }
}
