/// Result alias used across the crate.
pub type PlotResult<T> = Result<T, PlotError>;

/// Errors raised at the crate boundaries (loading input, validating settings, rendering output).
///
/// The animation core itself never fails: malformed palette numbers produce malformed geometry.
#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    /// Input or settings rejected before any plotting happens.
    #[error("validation error: {0}")]
    Validation(String),

    /// Surface allocation or frame readback failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON could not be parsed into the expected shape.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem access failed.
    #[error("io error: {0}")]
    Io(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlotError {
    /// Build a [`PlotError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlotError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PlotError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`PlotError::Io`].
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
