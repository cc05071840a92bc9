//! Search provider port
//!
//! Defines the interface for web search backends.

use async_trait::async_trait;
use report_domain::SearchHit;
use thiserror::Error;

/// Errors that can occur during a search request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Search API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Could not parse search response: {0}")]
    InvalidResponse(String),
}

/// Web search backend returning ranked hits
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Short name used in logs ("serper", "serpapi")
    fn name(&self) -> &str;

    /// Search for `query`, returning at most `num_results` hits in rank order
    async fn search(&self, query: &str, num_results: usize) -> Result<Vec<SearchHit>, SearchError>;
}
