use super::*;
use crate::foundation::core::Vec2;

fn ramp() -> Channel<Vec2> {
    Channel::Animated(vec![
        Waypoint::new(0, Vec2::new(0.0, 0.0)),
        Waypoint::new(10, Vec2::new(10.0, 0.0)),
    ])
}

#[test]
fn linear_interpolates_between_waypoints() {
    let path = BakedPath::bake(&ramp(), ValueKind::Vector).unwrap();
    assert_eq!(path.sample(FrameIndex(0)), Vec2::new(0.0, 0.0));
    assert_eq!(path.sample(FrameIndex(4)), Vec2::new(4.0, 0.0));
    assert_eq!(path.sample(FrameIndex(10)), Vec2::new(10.0, 0.0));
}

#[test]
fn holds_outside_waypoint_range() {
    let path = BakedPath::bake(&ramp(), ValueKind::Vector).unwrap();
    assert_eq!(path.sample(FrameIndex(-5)), Vec2::new(0.0, 0.0));
    assert_eq!(path.sample(FrameIndex(11)), Vec2::new(10.0, 0.0));
}

#[test]
fn constant_channel_samples_everywhere() {
    let path = BakedPath::bake(&Channel::Constant(7.5), ValueKind::Real).unwrap();
    for f in [-100, 0, 1, 1000] {
        assert_eq!(path.sample(FrameIndex(f)), 7.5);
    }
}

#[test]
fn constant_interpolation_steps_at_next_waypoint() {
    let c = Channel::Animated(vec![
        Waypoint::new(0, 1.0).with_interpolation(Interpolation::Constant),
        Waypoint::new(4, 5.0),
    ]);
    let path = BakedPath::bake(&c, ValueKind::Real).unwrap();
    assert_eq!(path.sample(FrameIndex(3)), 1.0);
    assert_eq!(path.sample(FrameIndex(4)), 5.0);
}

#[test]
fn bool_channels_are_stepped_regardless_of_interpolation() {
    let c = Channel::Animated(vec![Waypoint::new(0, false), Waypoint::new(10, true)]);
    let path = BakedPath::bake(&c, ValueKind::Bool).unwrap();
    assert!(!path.sample(FrameIndex(9)));
    assert!(path.sample(FrameIndex(10)));
}

#[test]
fn bake_rejects_kind_mismatch_and_invalid_channels() {
    assert!(matches!(
        BakedPath::bake(&Channel::Constant(1.0), ValueKind::Bool),
        Err(ExportError::Animation(_))
    ));
    let empty: Channel<f64> = Channel::Animated(Vec::new());
    assert!(BakedPath::bake(&empty, ValueKind::Angle).is_err());
}
