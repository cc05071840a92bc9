//! Infrastructure layer for research-report
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod search;
pub mod web;

#[cfg(test)]
pub(crate) mod test_server;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileFetchConfig, FileLlmConfig, FileLoggingConfig,
    FileReviewConfig, FileSearchConfig, FileServerConfig,
};
pub use gemini::GeminiTextGenerator;
pub use search::{
    SearchProviderKind, SerpApiSearchProvider, SerperSearchProvider, build_search_provider,
};
pub use web::{HtmlContentFetcher, html_to_text};
