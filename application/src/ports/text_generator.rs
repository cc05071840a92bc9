//! Text generator port
//!
//! Defines the interface for sending one prompt to an LLM and receiving text.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a single generation call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Quota exceeded: {0}")]
    Quota(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Single-shot text generation
///
/// This port defines how the application layer talks to an LLM provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` and return the model's text reply
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
