//! Property tests over random vectors, angles and rotations.

use planar::prelude::*;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

fn coord() -> impl Strategy<Value = f64> {
    -1e3..1e3f64
}

fn vector() -> impl Strategy<Value = Vector2D> {
    (coord(), coord()).prop_map(|(x, y)| Vector2D::new(x, y))
}

fn rotation() -> impl Strategy<Value = Rotation> {
    prop_oneof![
        Just(Rotation::None),
        (0.0..50.0f64).prop_map(|m| Rotation::Clockwise(Radian::new(m))),
        (0.0..50.0f64).prop_map(|m| Rotation::CounterClockwise(Radian::new(m))),
    ]
}

proptest! {
    #[test]
    fn unit_has_length_one(v in vector()) {
        prop_assume!(v.length() > 1e-6);
        prop_assert!((v.unit().length() - 1.0).abs() < EPS);
    }

    #[test]
    fn add_then_subtract_is_identity(v in vector(), w in vector()) {
        prop_assert!((v + w - w - v).length() < 1e-9);
    }

    #[test]
    fn rotated_preserves_length(v in vector(), theta in -20.0..20.0f64) {
        let r = v.rotated(Radian::new(theta));
        prop_assert!((r.length() - v.length()).abs() < 1e-9 * (1.0 + v.length()));
    }

    #[test]
    fn truncated_is_a_fixed_point(a in -1e4..1e4f64) {
        let t = Radian::new(a).truncated();
        prop_assert!(t.value() > -TWO_PI && t.value() < TWO_PI);
        prop_assert_eq!(t.truncated(), t);
    }

    #[test]
    fn shortest_angle_is_bounded_and_equivalent(from in -1e3..1e3f64, to in -1e3..1e3f64) {
        let s = Radian::shortest_angle(Radian::new(from), Radian::new(to)).value();
        prop_assert!(s > -PI && s <= PI);
        // from + s lands on `to` modulo whole turns
        let k = ((to - from - s) / TWO_PI).round();
        prop_assert!((to - from - s - k * TWO_PI).abs() < 1e-9);
    }

    #[test]
    fn rotation_addition_commutes(a in rotation(), b in rotation()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn rotation_addition_matches_signed_sum(a in rotation(), b in rotation()) {
        let sum = (a + b).clockwise_radian().value();
        let expected = a.clockwise_radian().value() + b.clockwise_radian().value();
        prop_assert!((sum - expected).abs() < EPS);
    }

    #[test]
    fn none_is_identity(a in rotation()) {
        prop_assert_eq!(a + Rotation::None, a);
        prop_assert_eq!(Rotation::None + a, a);
    }

    #[test]
    fn truncated_rotation_is_at_most_half_a_turn(a in rotation()) {
        let t = a.truncated();
        let m = t.clockwise_radian().value().abs();
        prop_assert!(m <= PI + EPS);
        // same net heading change modulo whole turns; a sub-epsilon remainder truncates to None
        let diff = a.clockwise_radian().value() - t.clockwise_radian().value();
        let k = (diff / TWO_PI).round();
        prop_assert!((diff - k * TWO_PI).abs() < planar::ZERO_EPS + 1e-9);
    }

    #[test]
    fn samples_sum_to_endpoint_difference(samples in prop::collection::vec(-100.0..100.0f64, 2..20)) {
        let r = Rotation::from_samples(samples.iter().copied().map(Radian::new));
        let first = samples[0];
        let last = samples[samples.len() - 1];
        // each dropped sub-epsilon step contributes at most ZERO_EPS
        let slack = planar::ZERO_EPS * samples.len() as f64 + 1e-9;
        prop_assert!((r.clockwise_radian().value() - (last - first)).abs() < slack);
    }

    #[test]
    fn change_of_basis_round_trips(
        local in vector(),
        origin in vector(),
        theta in 0.0..6.28f64,
        len in 0.5..20.0f64,
    ) {
        let on_axis = origin + Vector2D::UNIT_X.rotated(Radian::new(theta)) * len;
        let ambient = change_of_basis(local, origin, on_axis);
        prop_assert!((to_local_basis(ambient, origin, on_axis) - local).length() < 1e-8);
    }
}

#[test]
fn shortest_angle_prefers_the_clockwise_quarter() {
    let s = Radian::shortest_angle(Radian::ZERO, Radian::new(3.0 * std::f64::consts::FRAC_PI_2));
    assert!((s.value() + std::f64::consts::FRAC_PI_2).abs() < EPS);
}

#[test]
fn three_full_turns_truncate_to_nothing() {
    let r = Rotation::between(Radian::ZERO, Radian::new(3.0 * TWO_PI)).truncated();
    assert!(r.is_none() || r.clockwise_radian().is_zero());
}

#[test]
fn unit_y_is_counter_clockwise_of_unit_x() {
    assert_eq!(
        orientation(Vector2D::UNIT_Y, Vector2D::UNIT_X),
        RotationOrientation::CounterClockwise
    );
}
