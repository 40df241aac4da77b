use crate::{
    foundation::core::FrameIndex,
    foundation::error::{ExportError, ExportResult},
    shape::window::Window,
};

/// Which frame the end tangents of a keyframe are sampled at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndTangentFrame {
    /// `frame + 1`, the same frame as the end vertex.
    #[default]
    NextFrame,
    /// `frame`, reproducing output of older exporters that reused the
    /// start tangents as end tangents.
    SameFrame,
}

impl EndTangentFrame {
    /// Frame the end tangents of the keyframe starting at `frame` are sampled at.
    pub fn tangent_frame(self, frame: FrameIndex) -> FrameIndex {
        match self {
            Self::NextFrame => frame.next(),
            Self::SameFrame => frame,
        }
    }
}

/// Options for one export call.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// End-tangent sampling frame.
    pub end_tangents: EndTangentFrame,
    /// Maximum number of frames a window may span.
    pub frame_limit: Option<u64>,
}

impl ExportConfig {
    /// Config reproducing the legacy same-frame end tangents.
    pub fn legacy() -> Self {
        Self {
            end_tangents: EndTangentFrame::SameFrame,
            ..Self::default()
        }
    }

    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> ExportResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate static invariants.
    pub fn validate(&self) -> ExportResult<()> {
        if self.frame_limit == Some(0) {
            return Err(ExportError::validation("frame_limit must be > 0 when set"));
        }
        Ok(())
    }

    /// Reject invalid windows and windows spanning more frames than `frame_limit`.
    pub fn check_window(&self, window: Window) -> ExportResult<()> {
        window.validate()?;
        match self.frame_limit {
            Some(limit) if window.frame_count() > limit => {
                Err(ExportError::validation(format!(
                    "window {}..={} spans {} frames, limit is {limit}",
                    window.first.0,
                    window.last.0,
                    window.frame_count()
                )))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
