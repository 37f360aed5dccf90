//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Nothing in the selection engine itself can fail; these cover parsing
/// user-supplied identifiers into the closed domain enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown research area: {0}")]
    UnknownCategory(String),

    #[error("Unknown survey template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown business type: {0}")]
    UnknownBusinessType(String),

    #[error("Unknown export variant: {0}")]
    UnknownVariant(String),
}

impl DomainError {
    /// The raw input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            DomainError::UnknownCategory(s)
            | DomainError::UnknownTemplate(s)
            | DomainError::UnknownBusinessType(s)
            | DomainError::UnknownVariant(s) => s,
        }
    }
}
