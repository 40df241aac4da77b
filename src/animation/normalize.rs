use crate::{
    animation::bake::BakedPath,
    animation::channel::{Channel, ChannelValue, ValueKind, Waypoint},
    foundation::core::FrameIndex,
    foundation::error::ExportResult,
};

/// A channel in animated form together with its baked path.
///
/// Produced by [`normalize`]; the source channel is left untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalized<T> {
    channel: Channel<T>,
    kind: ValueKind,
    path: BakedPath<T>,
}

impl<T: ChannelValue> Normalized<T> {
    /// The animated channel this value was baked from.
    pub fn channel(&self) -> &Channel<T> {
        &self.channel
    }

    /// Semantic type used for baking.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Sample the channel at an integer frame.
    pub fn sample(&self, frame: FrameIndex) -> T {
        self.path.sample(frame)
    }
}

/// Rewrite a constant channel as an animated one with a single waypoint at frame 0.
///
/// Animated channels are returned as-is, so the rewrite is idempotent.
pub fn normalize_to_animated<T: Clone>(channel: &Channel<T>) -> Channel<T> {
    match channel {
        Channel::Constant(value) => Channel::Animated(vec![Waypoint::new(0, value.clone())]),
        Channel::Animated(waypoints) => Channel::Animated(waypoints.clone()),
    }
}

/// Make `channel` uniformly sample-able as semantic type `kind`.
///
/// The result samples to the original constant for unanimated input and to
/// the original curve for animated input, at every frame.
pub fn normalize<T: ChannelValue>(
    channel: &Channel<T>,
    kind: ValueKind,
) -> ExportResult<Normalized<T>> {
    let channel = normalize_to_animated(channel);
    let path = BakedPath::bake(&channel, kind)?;
    tracing::trace!(
        ?kind,
        waypoints = channel.waypoints().len(),
        "normalized channel"
    );
    Ok(Normalized {
        channel,
        kind,
        path,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/normalize.rs"]
mod tests;
