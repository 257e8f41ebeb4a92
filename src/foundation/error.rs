/// Convenience result type used across Twinscope.
pub type TwinscopeResult<T> = Result<T, TwinscopeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TwinscopeError {
    /// Invalid user-provided data (dimensions, options, frame layout).
    #[error("validation error: {0}")]
    Validation(String),

    /// Unrecoverable presentation-backend failure (surface, texture, font).
    #[error("backend error: {0}")]
    Backend(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TwinscopeError {
    /// Build a [`TwinscopeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TwinscopeError::Backend`] value.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Build a [`TwinscopeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
