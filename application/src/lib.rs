//! Application layer for research-report
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{RetryPolicy, ReviewConfig};
pub use ports::{
    content_fetcher::ContentFetcher,
    delay::{Delay, TokioDelay},
    progress::{NoProgress, PipelineProgress, Stage},
    search_provider::{SearchError, SearchProvider},
    text_generator::{GenerationError, TextGenerator},
};
pub use use_cases::generate_with_retry::RetryingGenerator;
pub use use_cases::review_report::ReviewReportUseCase;
pub use use_cases::run_research::{
    PipelineError, ResearchReport, RunResearchInput, RunResearchUseCase, StageLog,
};
