/// Convenience result type used across tracksheet.
pub type TracksheetResult<T> = Result<T, TracksheetError>;

/// Top-level error taxonomy used by the rendering pipeline.
///
/// Every variant is terminal: the pipeline never recovers, skips, or retries.
#[derive(thiserror::Error, Debug)]
pub enum TracksheetError {
    /// Invalid layout configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A required external resource (font face, icon image) is missing or
    /// unreadable.
    #[error("resource error: {0}")]
    Resource(String),

    /// An audio file could not be opened or its tags decoded.
    #[error("metadata error: {0}")]
    Metadata(String),

    /// A compositing or encoding step failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TracksheetError {
    /// Build a [`TracksheetError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TracksheetError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Build a [`TracksheetError::Metadata`] value.
    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }

    /// Build a [`TracksheetError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
