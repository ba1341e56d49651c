use thiserror::Error;

/// Errors produced while building inputs from text.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML input: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias for type-level results.
pub type TypeResult<T> = Result<T, TypeError>;
