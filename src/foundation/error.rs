/// Result alias used across the library.
pub type GladeResult<T> = Result<T, GladeError>;

/// Error type for the fallible outer surfaces (config, raster, sinks).
///
/// The character and scene are infallible; errors only arise where the sketch meets files,
/// buffers and external processes.
#[derive(thiserror::Error, Debug)]
pub enum GladeError {
    /// Invalid configuration or out-of-contract arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// Frame sink or encoder failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Config (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GladeError {
    /// Build a [`GladeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GladeError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GladeError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`GladeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
