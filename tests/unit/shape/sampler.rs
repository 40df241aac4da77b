use super::*;
use crate::{Channel, ControlPoint, TangentHandle, ValueKind, Waypoint, normalize};

fn assert_close(a: Vec2, b: Vec2) {
    assert!((a - b).hypot() < 1e-9, "expected {b:?}, got {a:?}");
}

fn segments(records: &[ShapeKeyframe]) -> Vec<&ShapeSegment> {
    records.iter().filter_map(ShapeKeyframe::segment).collect()
}

#[test]
fn emits_one_segment_per_frame_and_a_sentinel() {
    let points: Vec<NormalizedPoint> = Vec::new();
    let window = Window::from_frames([FrameIndex(2), FrameIndex(6)]);
    let records = sample_shape(&points, false, window, EndTangentFrame::NextFrame);

    assert_eq!(records.len(), 6);
    let times: Vec<i64> = records.iter().map(|r| r.time().0).collect();
    assert_eq!(times, vec![2, 3, 4, 5, 6, 7]);
    assert_eq!(records.last(), Some(&ShapeKeyframe::End { time: FrameIndex(7) }));
    for seg in segments(&records) {
        assert!(seg.start.vertices.is_empty());
        assert!(seg.end.vertices.is_empty());
        assert_eq!(seg.easing_in, Easing::MIDPOINT);
        assert_eq!(seg.easing_out, Easing::MIDPOINT);
    }
}

#[test]
fn lottie_convention_applies_to_spline_tangents() {
    let p = ControlPoint::fixed(
        Vec2::new(5.0, 5.0),
        TangentHandle::constant(3.0, 0.0),
        TangentHandle::constant(3.0, 0.0),
    )
    .normalize()
    .unwrap();
    let records = sample_shape(&[p], true, Window::STILL, EndTangentFrame::NextFrame);
    let seg = segments(&records)[0];

    let v = seg.start.vertices[0];
    assert_eq!(v.vertex, Vec2::new(5.0, 5.0));
    assert_close(v.tangent_in, Vec2::new(-1.0, 0.0));
    assert_close(v.tangent_out, Vec2::new(1.0, 0.0));
    assert!(seg.start.closed);
    assert!(seg.end.closed);
}

#[test]
fn vertical_tangents_are_flipped() {
    let p = ControlPoint::fixed(
        Vec2::ZERO,
        TangentHandle::constant(3.0, 90.0),
        TangentHandle::constant(3.0, 90.0),
    )
    .normalize()
    .unwrap();
    let v = p.vertex_at(FrameIndex(0), FrameIndex(0));
    assert_close(v.tangent_in, Vec2::new(0.0, 1.0));
    assert_close(v.tangent_out, Vec2::new(0.0, -1.0));
}

fn growing_tangent_point() -> NormalizedPoint {
    let mut p = ControlPoint::fixed(
        Vec2::ZERO,
        TangentHandle {
            radius: Channel::Animated(vec![Waypoint::new(0, 0.0), Waypoint::new(3, 9.0)]),
            angle: Channel::Constant(0.0),
        },
        TangentHandle::constant(0.0, 0.0),
    );
    p.split_radius = Channel::Constant(false);
    p.position = Channel::Animated(vec![
        Waypoint::new(0, Vec2::ZERO),
        Waypoint::new(3, Vec2::new(3.0, 0.0)),
    ]);
    p.normalize().unwrap()
}

#[test]
fn end_tangents_track_next_frame() {
    let p = growing_tangent_point();
    let window = Window::from_frames([FrameIndex(0), FrameIndex(3)]);
    let records = sample_shape(&[p], false, window, EndTangentFrame::NextFrame);
    let seg = segments(&records)[1];

    assert_eq!(seg.time, FrameIndex(1));
    assert_close(seg.start.vertices[0].vertex, Vec2::new(1.0, 0.0));
    assert_close(seg.end.vertices[0].vertex, Vec2::new(2.0, 0.0));
    // radius 3 at frame 1, 6 at frame 2; tangent2 inherits it.
    assert_close(seg.start.vertices[0].tangent_in, Vec2::new(-1.0, 0.0));
    assert_close(seg.end.vertices[0].tangent_in, Vec2::new(-2.0, 0.0));
    assert_close(seg.end.vertices[0].tangent_out, Vec2::new(2.0, 0.0));
}

#[test]
fn same_frame_end_tangents_reproduce_legacy_output() {
    let p = growing_tangent_point();
    let window = Window::from_frames([FrameIndex(0), FrameIndex(3)]);
    let records = sample_shape(&[p], false, window, EndTangentFrame::SameFrame);
    let seg = segments(&records)[1];

    assert_close(seg.end.vertices[0].vertex, Vec2::new(2.0, 0.0));
    assert_eq!(
        seg.end.vertices[0].tangent_in,
        seg.start.vertices[0].tangent_in
    );
    assert_eq!(
        seg.end.vertices[0].tangent_out,
        seg.start.vertices[0].tangent_out
    );
}

#[test]
fn point_list_vertices_have_zero_tangents() {
    let entry = normalize(
        &Channel::Animated(vec![
            Waypoint::new(0, Vec2::ZERO),
            Waypoint::new(2, Vec2::new(0.0, 4.0)),
        ]),
        ValueKind::Vector,
    )
    .unwrap();
    let window = Window::from_frames([FrameIndex(0), FrameIndex(2)]);
    let records = sample_shape(&[entry], false, window, EndTangentFrame::NextFrame);

    for seg in segments(&records) {
        for v in seg.start.vertices.iter().chain(&seg.end.vertices) {
            assert_eq!(v.tangent_in, Vec2::ZERO);
            assert_eq!(v.tangent_out, Vec2::ZERO);
        }
    }
    let last = segments(&records)[2];
    assert_eq!(last.start.vertices[0].vertex, Vec2::new(0.0, 4.0));
    assert_eq!(last.end.vertices[0].vertex, Vec2::new(0.0, 4.0));
}
