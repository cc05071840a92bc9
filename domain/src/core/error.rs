//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Research topic cannot be empty")]
    EmptyTopic,

    #[error("num_results must be between 1 and 10 (got {0})")]
    InvalidResultCount(usize),

    #[error("Unknown report style: {0} (expected concise, detailed or academic)")]
    UnknownReportStyle(String),

    #[error("Unknown response contract: {0} (expected free-text or json-object)")]
    UnknownContract(String),
}

impl DomainError {
    /// Whether the error was caused by caller input rather than configuration
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyTopic
                | DomainError::InvalidResultCount(_)
                | DomainError::UnknownReportStyle(_)
        )
    }
}
