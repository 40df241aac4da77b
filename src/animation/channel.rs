use std::fmt;

use crate::{
    animation::ease::Interpolation,
    foundation::core::{FrameIndex, Vec2},
    foundation::error::{ExportError, ExportResult},
};

/// Interpolation contract for channel value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for bool {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t >= 1.0 { *b } else { *a }
    }
}

/// Semantic type of a channel, as handed to normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// 2D position.
    Vector,
    /// Plain real number (tangent radius).
    Real,
    /// Angle in degrees (tangent theta).
    Angle,
    /// Boolean flag, always stepped.
    Bool,
}

impl ValueKind {
    /// Whether every segment of this kind holds its start value.
    pub fn is_stepped(self) -> bool {
        matches!(self, Self::Bool)
    }
}

/// Value types that can live in a [`Channel`].
pub trait ChannelValue: Lerp + Clone + PartialEq + fmt::Debug {
    /// Whether values of this type may carry the semantic `kind`.
    fn accepts(kind: ValueKind) -> bool;

    /// Whether the value can be sampled (finite numbers).
    fn is_finite(&self) -> bool;
}

impl ChannelValue for f64 {
    fn accepts(kind: ValueKind) -> bool {
        matches!(kind, ValueKind::Real | ValueKind::Angle)
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl ChannelValue for Vec2 {
    fn accepts(kind: ValueKind) -> bool {
        kind == ValueKind::Vector
    }

    fn is_finite(&self) -> bool {
        Vec2::is_finite(*self)
    }
}

impl ChannelValue for bool {
    fn accepts(kind: ValueKind) -> bool {
        kind == ValueKind::Bool
    }

    fn is_finite(&self) -> bool {
        true
    }
}

/// One `(frame, value)` sample defining part of an animated channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Waypoint<T> {
    /// Frame this waypoint sits on.
    pub frame: FrameIndex,
    /// Value at `frame`.
    pub value: T,
    /// Interpolation toward the next waypoint.
    #[serde(default)]
    pub interpolation: Interpolation,
}

impl<T> Waypoint<T> {
    /// Linear waypoint at `frame`.
    pub fn new(frame: i64, value: T) -> Self {
        Self {
            frame: FrameIndex(frame),
            value,
            interpolation: Interpolation::Linear,
        }
    }

    /// Replace the interpolation toward the next waypoint.
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }
}

/// Animatable parameter track for one attribute of one control point.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel<T> {
    /// Fixed value for the whole timeline.
    Constant(T),
    /// Waypoints sorted by strictly increasing frame.
    Animated(Vec<Waypoint<T>>),
}

/// How animated a channel really is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animation {
    /// No animated marker.
    Constant,
    /// Animated marker with fewer than two waypoints; behaves as a constant.
    Single,
    /// Two or more waypoints.
    Animated,
}

impl<T> Channel<T> {
    /// Classify this channel.
    pub fn animation(&self) -> Animation {
        match self {
            Self::Constant(_) => Animation::Constant,
            Self::Animated(waypoints) if waypoints.len() < 2 => Animation::Single,
            Self::Animated(_) => Animation::Animated,
        }
    }

    /// True when the channel has at least two waypoints.
    pub fn is_animated(&self) -> bool {
        self.animation() == Animation::Animated
    }

    /// Waypoints of an animated channel; empty for constants.
    pub fn waypoints(&self) -> &[Waypoint<T>] {
        match self {
            Self::Constant(_) => &[],
            Self::Animated(waypoints) => waypoints,
        }
    }

    /// Frames of every waypoint, in order.
    pub fn waypoint_frames(&self) -> impl Iterator<Item = FrameIndex> + '_ {
        self.waypoints().iter().map(|w| w.frame)
    }
}

impl<T: ChannelValue> Channel<T> {
    /// Check waypoint ordering and value sanity.
    pub fn validate(&self) -> ExportResult<()> {
        match self {
            Self::Constant(value) => {
                if !value.is_finite() {
                    return Err(ExportError::animation(
                        "constant channel value must be finite",
                    ));
                }
            }
            Self::Animated(waypoints) => {
                if waypoints.is_empty() {
                    return Err(ExportError::animation(
                        "animated channel must have at least one waypoint",
                    ));
                }
                if !waypoints.windows(2).all(|w| w[0].frame < w[1].frame) {
                    return Err(ExportError::animation(
                        "waypoint frames must be strictly increasing",
                    ));
                }
                if let Some(w) = waypoints.iter().find(|w| !w.value.is_finite()) {
                    return Err(ExportError::animation(format!(
                        "waypoint at frame {} has a non-finite value",
                        w.frame.0
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/channel.rs"]
mod tests;
