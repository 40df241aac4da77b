use crate::{
    animation::normalize::Normalized,
    config::EndTangentFrame,
    foundation::core::{FrameIndex, Vec2},
    foundation::math::to_lottie_tangents,
    shape::model::NormalizedPoint,
    shape::tangent::resolve_tangents,
    shape::window::Window,
};

/// Bezier easing handle of a keyframe.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Easing {
    /// Time component.
    pub x: f64,
    /// Value component.
    pub y: f64,
}

impl Easing {
    /// Handle used for every exported keyframe: segments span one frame,
    /// so no easing curve is needed.
    pub const MIDPOINT: Self = Self { x: 0.5, y: 0.5 };
}

/// One vertex with its tangents, in Lottie convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeVertex {
    /// Vertex position.
    pub vertex: Vec2,
    /// In-tangent, relative to `vertex`.
    pub tangent_in: Vec2,
    /// Out-tangent, relative to `vertex`.
    pub tangent_out: Vec2,
}

/// Shape value at one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShapeValue {
    /// Vertices in control point order.
    pub vertices: Vec<ShapeVertex>,
    /// Whether the path is closed.
    pub closed: bool,
}

/// Keyframe interpolating the shape from `time` to `time + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeSegment {
    /// Start frame.
    pub time: FrameIndex,
    /// Shape at `time`.
    pub start: ShapeValue,
    /// Shape at `time + 1`.
    pub end: ShapeValue,
    /// Incoming easing handle.
    pub easing_in: Easing,
    /// Outgoing easing handle.
    pub easing_out: Easing,
}

/// One record of an exported shape keyframe sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKeyframe {
    /// A start/end shape pair.
    Segment(ShapeSegment),
    /// Terminal record carrying only a time.
    End {
        /// One past the last segment's start frame.
        time: FrameIndex,
    },
}

impl ShapeKeyframe {
    /// Time of this record.
    pub fn time(&self) -> FrameIndex {
        match self {
            Self::Segment(segment) => segment.time,
            Self::End { time } => *time,
        }
    }

    /// The segment, unless this is the sentinel.
    pub fn segment(&self) -> Option<&ShapeSegment> {
        match self {
            Self::Segment(segment) => Some(segment),
            Self::End { .. } => None,
        }
    }
}

/// Anything that yields one exported vertex per frame.
pub trait VertexSource {
    /// Vertex with its position sampled at `position_frame` and tangents at
    /// `tangent_frame`, in Lottie convention.
    fn vertex_at(&self, position_frame: FrameIndex, tangent_frame: FrameIndex) -> ShapeVertex;
}

impl VertexSource for NormalizedPoint {
    fn vertex_at(&self, position_frame: FrameIndex, tangent_frame: FrameIndex) -> ShapeVertex {
        let (tangent_in, tangent_out) = resolve_tangents(self, tangent_frame);
        let (tangent_in, tangent_out) = to_lottie_tangents(tangent_in, tangent_out);
        ShapeVertex {
            vertex: self.position.sample(position_frame),
            tangent_in,
            tangent_out,
        }
    }
}

// Point-list entries carry no handles.
impl VertexSource for Normalized<Vec2> {
    fn vertex_at(&self, position_frame: FrameIndex, _tangent_frame: FrameIndex) -> ShapeVertex {
        ShapeVertex {
            vertex: self.sample(position_frame),
            tangent_in: Vec2::ZERO,
            tangent_out: Vec2::ZERO,
        }
    }
}

/// Sample every frame of `window` into start/end keyframes plus the sentinel.
///
/// Vertex `i` of every record comes from `points[i]`. `window` must pass
/// [`Window::validate`].
pub fn sample_shape<V: VertexSource>(
    points: &[V],
    closed: bool,
    window: Window,
    end_tangents: EndTangentFrame,
) -> Vec<ShapeKeyframe> {
    let hint = usize::try_from(window.frame_count().min(1 << 16)).unwrap_or(0);
    let mut records = Vec::with_capacity(hint + 1);

    for frame in window.frames() {
        let mut start = ShapeValue {
            vertices: Vec::with_capacity(points.len()),
            closed,
        };
        let mut end = start.clone();

        for point in points {
            start.vertices.push(point.vertex_at(frame, frame));
            end.vertices
                .push(point.vertex_at(frame.next(), end_tangents.tangent_frame(frame)));
        }

        records.push(ShapeKeyframe::Segment(ShapeSegment {
            time: frame,
            start,
            end,
            easing_in: Easing::MIDPOINT,
            easing_out: Easing::MIDPOINT,
        }));
    }

    records.push(ShapeKeyframe::End { time: window.end() });
    records
}

#[cfg(test)]
#[path = "../../tests/unit/shape/sampler.rs"]
mod tests;
