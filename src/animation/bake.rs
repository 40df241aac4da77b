use crate::{
    animation::channel::{Channel, ChannelValue, ValueKind, Waypoint},
    animation::ease::Interpolation,
    foundation::core::FrameIndex,
    foundation::error::{ExportError, ExportResult},
};

/// Frame-queryable form of a channel, built once and sampled many times.
///
/// Frames before the first waypoint and after the last one hold the nearest
/// waypoint's value.
#[derive(Clone, Debug, PartialEq)]
pub struct BakedPath<T> {
    keys: Vec<Waypoint<T>>, // non-empty, strictly increasing frames
}

impl<T: ChannelValue> BakedPath<T> {
    /// Bake `channel` as semantic type `kind`.
    pub fn bake(channel: &Channel<T>, kind: ValueKind) -> ExportResult<Self> {
        if !T::accepts(kind) {
            return Err(ExportError::animation(format!(
                "{kind:?} channel cannot hold values of this type"
            )));
        }
        channel.validate()?;

        let mut keys = match channel {
            Channel::Constant(value) => vec![Waypoint::new(0, value.clone())],
            Channel::Animated(waypoints) => waypoints.clone(),
        };
        if kind.is_stepped() {
            for key in &mut keys {
                key.interpolation = Interpolation::Constant;
            }
        }
        Ok(Self { keys })
    }

    /// Sample the path at an integer frame.
    pub fn sample(&self, frame: FrameIndex) -> T {
        let f = frame.0;
        let idx = self.keys.partition_point(|k| k.frame.0 <= f);

        if idx == 0 {
            return self.keys[0].value.clone();
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].value.clone();
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        // Frames are strictly increasing, so the span is at least one frame.
        let span = b.frame.0 as f64 - a.frame.0 as f64;
        let t = (f as f64 - a.frame.0 as f64) / span;
        T::lerp(&a.value, &b.value, a.interpolation.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/bake.rs"]
mod tests;
