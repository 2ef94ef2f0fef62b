/// Convenience result type used across Door2D.
pub type Door2dResult<T> = Result<T, Door2dError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Note that most Door2D failure modes are not errors at all: a failed asset
/// fetch or a malformed SVG degrades to a procedural fallback inside the
/// loader, and an unrecognized assignment string is silently skipped by the
/// matcher. The variants here cover the surfaces where a caller must react —
/// invalid configuration input and catalog wire failures.
#[derive(thiserror::Error, Debug)]
pub enum Door2dError {
    /// Invalid caller-provided configuration or geometry input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors talking to the product catalog endpoint.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Transport-level errors fetching an external asset document. Callers
    /// inside the engine recover these into procedural fallbacks.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Door2dError {
    /// Build a [`Door2dError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`Door2dError::Catalog`] value.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`Door2dError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`Door2dError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
