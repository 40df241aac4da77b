use super::*;
use crate::{ExportError, FrameIndex, Waypoint};

#[test]
fn normalize_keeps_point_values() {
    let point = ControlPoint::fixed(
        Vec2::new(1.0, 2.0),
        TangentHandle::constant(3.0, 0.0),
        TangentHandle::constant(6.0, 90.0),
    );
    let n = point.normalize().unwrap();
    assert_eq!(n.position.sample(FrameIndex(42)), Vec2::new(1.0, 2.0));
    assert_eq!(n.tangent1.radius.sample(FrameIndex(0)), 3.0);
    assert_eq!(n.tangent2.angle.sample(FrameIndex(0)), 90.0);
    assert!(n.split_radius.sample(FrameIndex(0)));
    assert_eq!(n.tangent1.angle.kind(), ValueKind::Angle);
}

#[test]
fn normalize_names_the_failing_role() {
    let mut point = ControlPoint::fixed(
        Vec2::ZERO,
        TangentHandle::constant(1.0, 0.0),
        TangentHandle::constant(1.0, 0.0),
    );
    point.tangent2.radius = Channel::Animated(vec![Waypoint::new(4, 1.0), Waypoint::new(1, 2.0)]);

    let err = point.normalize().unwrap_err();
    assert!(matches!(err, ExportError::Animation(_)));
    assert!(err.to_string().contains("t2: radius:"), "{err}");
}

#[test]
fn vertex_count_matches_variant() {
    let spline = Shape::Spline(Spline {
        points: vec![
            ControlPoint::fixed(
                Vec2::ZERO,
                TangentHandle::constant(0.0, 0.0),
                TangentHandle::constant(0.0, 0.0),
            );
            3
        ],
        closed: true,
    });
    assert_eq!(spline.vertex_count(), 3);

    let list = Shape::DynamicList(PointList {
        points: vec![Channel::Constant(Vec2::ZERO); 2],
        closed: false,
    });
    assert_eq!(list.vertex_count(), 2);
}

#[test]
fn shape_validate_matches_export_errors() {
    let list = Shape::DynamicList(PointList {
        points: vec![
            Channel::Constant(Vec2::ZERO),
            Channel::Animated(vec![
                Waypoint::new(5, Vec2::ZERO),
                Waypoint::new(5, Vec2::new(1.0, 0.0)),
            ]),
        ],
        closed: false,
    });
    let err = list.validate().unwrap_err();
    assert!(matches!(err, ExportError::Animation(_)));
    assert!(err.to_string().contains("entry 1"), "{err}");

    let spline = Shape::Spline(Spline {
        points: vec![ControlPoint::fixed(
            Vec2::ZERO,
            TangentHandle::constant(1.0, 0.0),
            TangentHandle::constant(1.0, 0.0),
        )],
        closed: false,
    });
    assert!(spline.validate().is_ok());
}
