//! Topic value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A research topic submitted by the user (Value Object)
///
/// Always non-blank; surrounding whitespace is removed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Try to create a topic, rejecting blank input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            Err(DomainError::EmptyTopic)
        } else {
            Ok(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the topic text
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
