use thiserror::Error;

/// Errors raised while normalizing raw records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No species name entry exists for the requested language
    #[error("No localized name for language '{language}'")]
    NotFound { language: String },
}

impl CoreError {
    pub fn not_found(language: impl Into<String>) -> Self {
        Self::NotFound {
            language: language.into(),
        }
    }
}
