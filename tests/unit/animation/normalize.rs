use super::*;
use crate::foundation::core::Vec2;

#[test]
fn constant_becomes_single_waypoint_at_zero() {
    let n = normalize(&Channel::Constant(Vec2::new(1.0, 2.0)), ValueKind::Vector).unwrap();
    assert_eq!(
        n.channel(),
        &Channel::Animated(vec![Waypoint::new(0, Vec2::new(1.0, 2.0))])
    );
    assert_eq!(n.kind(), ValueKind::Vector);
    for f in [-10, 0, 5, 500] {
        assert_eq!(n.sample(FrameIndex(f)), Vec2::new(1.0, 2.0));
    }
}

#[test]
fn animated_curve_is_preserved() {
    let c = Channel::Animated(vec![Waypoint::new(2, 0.0), Waypoint::new(6, 8.0)]);
    let n = normalize(&c, ValueKind::Real).unwrap();
    assert_eq!(n.channel(), &c);
    assert_eq!(n.sample(FrameIndex(4)), 4.0);
}

#[test]
fn normalizing_twice_is_idempotent() {
    for c in [
        Channel::Constant(3.0),
        Channel::Animated(vec![Waypoint::new(5, 1.0)]),
        Channel::Animated(vec![
            Waypoint::new(0, 0.0).with_interpolation(crate::animation::ease::Interpolation::Ease),
            Waypoint::new(12, 90.0),
        ]),
    ] {
        let once = normalize(&c, ValueKind::Angle).unwrap();
        let twice = normalize(once.channel(), ValueKind::Angle).unwrap();
        assert_eq!(once, twice);
        for f in -2..15 {
            assert_eq!(once.sample(FrameIndex(f)), twice.sample(FrameIndex(f)));
        }
    }
}

#[test]
fn source_channel_is_not_mutated() {
    let c = Channel::Constant(true);
    let before = c.clone();
    let _ = normalize(&c, ValueKind::Bool).unwrap();
    assert_eq!(c, before);
}

#[test]
fn invalid_channel_fails() {
    let c = Channel::Animated(vec![Waypoint::new(3, 0.0), Waypoint::new(1, 1.0)]);
    assert!(normalize(&c, ValueKind::Real).is_err());
}
