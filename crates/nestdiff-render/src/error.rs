//! Error types for the render crate.

/// Errors that can occur while preparing a rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The options document was not valid TOML or had the wrong shape.
    #[error("invalid render options: {0}")]
    Options(#[from] toml::de::Error),
}

/// Convenience alias for render results.
pub type RenderResult<T> = Result<T, RenderError>;
