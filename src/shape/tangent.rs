use crate::{
    foundation::core::{FrameIndex, Vec2},
    foundation::math::polar_to_cartesian,
    shape::model::NormalizedPoint,
};

/// Tangent handle value at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    /// Handle length.
    pub radius: f64,
    /// Handle direction in degrees.
    pub angle: f64,
}

impl Polar {
    /// Cartesian offset of this handle.
    pub fn to_cartesian(self) -> Vec2 {
        polar_to_cartesian(self.radius, self.angle)
    }
}

/// Effective polar values of both handles at `frame`, after split-flag inheritance.
///
/// Inheritance is decided per frame from the sampled split flags, so animated
/// flags can switch it on and off over time.
pub fn resolve_polar(point: &NormalizedPoint, frame: FrameIndex) -> (Polar, Polar) {
    let split_radius = point.split_radius.sample(frame);
    let split_angle = point.split_angle.sample(frame);

    let t1 = Polar {
        radius: point.tangent1.radius.sample(frame),
        angle: point.tangent1.angle.sample(frame),
    };
    let radius = if split_radius {
        point.tangent2.radius.sample(frame)
    } else {
        t1.radius
    };
    let angle = if split_angle {
        point.tangent2.angle.sample(frame)
    } else {
        t1.angle
    };

    (t1, Polar { radius, angle })
}

/// In and out tangents of `point` at `frame` as Cartesian offsets (host convention).
pub fn resolve_tangents(point: &NormalizedPoint, frame: FrameIndex) -> (Vec2, Vec2) {
    let (t1, t2) = resolve_polar(point, frame);
    (t1.to_cartesian(), t2.to_cartesian())
}

#[cfg(test)]
#[path = "../../tests/unit/shape/tangent.rs"]
mod tests;
