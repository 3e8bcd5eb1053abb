/// Result alias used throughout the crate.
pub type CardResult<T> = Result<T, CardError>;

/// Error type for deck validation, font loading, rendering and PNG output.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Inconsistent deck parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font bytes could not be read or contain no usable face.
    #[error("font error: {0}")]
    Font(String),

    /// Raster surface or glyph rendering failure.
    #[error("render error: {0}")]
    Render(String),

    /// PNG encoding or write failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Deck JSON could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, usually an I/O error with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`CardError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CardError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`CardError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
