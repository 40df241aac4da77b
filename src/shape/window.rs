use crate::{
    animation::channel::Channel,
    foundation::core::FrameIndex,
    foundation::error::{ExportError, ExportResult},
    shape::model::{ControlPoint, PointList, Shape, Spline},
};

/// Inclusive frame range a shape must be sampled over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Window {
    /// First sampled frame.
    pub first: FrameIndex,
    /// Last sampled frame (inclusive).
    pub last: FrameIndex,
}

impl Window {
    /// Window of a shape with no truly animated channel.
    pub const STILL: Self = Self {
        first: FrameIndex(0),
        last: FrameIndex(0),
    };

    /// Smallest window covering every frame, or [`Window::STILL`] when there is none.
    pub fn from_frames(frames: impl IntoIterator<Item = FrameIndex>) -> Self {
        frames
            .into_iter()
            .fold(None, |acc: Option<Self>, f| {
                Some(match acc {
                    None => Self { first: f, last: f },
                    Some(w) => Self {
                        first: w.first.min(f),
                        last: w.last.max(f),
                    },
                })
            })
            .unwrap_or(Self::STILL)
    }

    /// Every frame in the window, in order.
    pub fn frames(self) -> impl Iterator<Item = FrameIndex> {
        (self.first.0..=self.last.0).map(FrameIndex)
    }

    /// Number of frames in the window, saturating at `u64::MAX`.
    pub fn frame_count(self) -> u64 {
        self.last.0.abs_diff(self.first.0).saturating_add(1)
    }

    /// Time of the sentinel record closing the keyframe sequence.
    ///
    /// Only meaningful for windows accepted by [`Window::validate`].
    pub fn end(self) -> FrameIndex {
        self.last.next()
    }

    /// Reject windows whose last frame has no successor, since both the end
    /// vertex of the last segment and the sentinel live at `last + 1`.
    pub fn validate(self) -> ExportResult<()> {
        if self.first > self.last {
            return Err(ExportError::validation(format!(
                "window {}..={} is empty",
                self.first.0, self.last.0
            )));
        }
        if self.last.0.checked_add(1).is_none() {
            return Err(ExportError::validation(format!(
                "window ends at frame {}, which has no successor",
                self.last.0
            )));
        }
        Ok(())
    }
}

fn animated_frames<T>(channel: &Channel<T>) -> impl Iterator<Item = FrameIndex> + '_ {
    channel
        .is_animated()
        .then(|| channel.waypoint_frames())
        .into_iter()
        .flatten()
}

// Split flags never widen the window.
fn control_point_frames(point: &ControlPoint) -> impl Iterator<Item = FrameIndex> + '_ {
    animated_frames(&point.position)
        .chain(animated_frames(&point.tangent1.radius))
        .chain(animated_frames(&point.tangent1.angle))
        .chain(animated_frames(&point.tangent2.radius))
        .chain(animated_frames(&point.tangent2.angle))
}

/// Window of a spline, from its original (unnormalized) channels.
pub fn spline_window(spline: &Spline) -> Window {
    Window::from_frames(spline.points.iter().flat_map(control_point_frames))
}

/// Window of a point list, from its original (unnormalized) channels.
pub fn point_list_window(list: &PointList) -> Window {
    Window::from_frames(list.points.iter().flat_map(animated_frames))
}

/// Global first/last animated frame of a shape.
///
/// Must run on the document channels: waypoints inserted by normalization
/// would otherwise pull the window toward frame 0.
pub fn discover_window(shape: &Shape) -> Window {
    match shape {
        Shape::Spline(spline) => spline_window(spline),
        Shape::DynamicList(list) => point_list_window(list),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/window.rs"]
mod tests;
