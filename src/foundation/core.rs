use crate::foundation::error::{ExportError, ExportResult};

pub use kurbo::Vec2;

/// Integer frame on the document timeline. Negative frames are allowed.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub i64);

impl FrameIndex {
    /// The frame directly after this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be > 0.
    pub den: u32,
}

impl Fps {
    /// Build a validated frame rate.
    pub fn new(num: u32, den: u32) -> ExportResult<Self> {
        let fps = Self { num, den };
        fps.validate()?;
        Ok(fps)
    }

    /// Check `num > 0` and `den > 0`.
    pub fn validate(self) -> ExportResult<()> {
        if self.den == 0 {
            return Err(ExportError::validation("fps den must be > 0"));
        }
        if self.num == 0 {
            return Err(ExportError::validation("fps num must be > 0"));
        }
        Ok(())
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert a time in seconds to the nearest integer frame.
    pub fn secs_to_frame_round(self, secs: f64) -> ExportResult<FrameIndex> {
        let frame = (secs * self.as_f64()).round();
        if !frame.is_finite() || frame < i64::MIN as f64 || frame >= i64::MAX as f64 {
            return Err(ExportError::validation(format!(
                "time {secs}s does not map to a frame"
            )));
        }
        Ok(FrameIndex(frame as i64))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
