/// Convenience result type used across the exporter.
pub type ExportResult<T> = Result<T, ExportError>;

/// Top-level error taxonomy used by exporter APIs.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// A control point or waypoint is missing data the exporter requires.
    #[error("malformed shape: {0}")]
    MalformedShape(String),

    /// A channel violates its waypoint invariants.
    #[error("animation error: {0}")]
    Animation(String),

    /// Invalid configuration or document metadata.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ExportError {
    /// Build an [`ExportError::MalformedShape`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedShape(msg.into())
    }

    /// Build an [`ExportError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build an [`ExportError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ExportError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Prefix the message with the location it was raised at (`"t1.radius"`, ...).
    pub fn within(self, location: impl std::fmt::Display) -> Self {
        match self {
            Self::MalformedShape(msg) => Self::MalformedShape(format!("{location}: {msg}")),
            Self::Animation(msg) => Self::Animation(format!("{location}: {msg}")),
            Self::Validation(msg) => Self::Validation(format!("{location}: {msg}")),
            Self::Serde(msg) => Self::Serde(format!("{location}: {msg}")),
            Self::Other(err) => Self::Other(err.context(location.to_string())),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
