/// Convenience result type used across sdui.
pub type SduiResult<T> = Result<T, SduiError>;

/// Top-level error taxonomy for the fallible entry points (parsing and configuration).
///
/// The resolution pipeline itself never fails; subtree-local problems surface as
/// [`crate::Diagnostic`]s instead.
#[derive(thiserror::Error, Debug)]
pub enum SduiError {
    /// The specification document does not conform to the node shape.
    #[error("validation error: {0}")]
    Validation(String),

    /// JSON could not be read or written.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Pipeline options could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SduiError {
    /// Build a [`SduiError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SduiError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`SduiError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
