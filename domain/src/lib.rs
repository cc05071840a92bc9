//! Domain layer for research-report
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Research
//!
//! A research run turns a topic into a reviewed report:
//!
//! - **Search**: ranked hits from a web search provider
//! - **Fetch**: cleaned page text for each hit, flagged when login-walled
//! - **Analysis**: per-source summaries plus overview and keyword tables
//! - **Writing**: a draft report in the requested [`ReportStyle`]
//!
//! ## Review
//!
//! The final pass sends the draft to a reviewer model and recovers a
//! [`ReviewResult`] from whatever comes back. The result is never worse than
//! the draft: every failure falls back to it with an explanatory note.

pub mod core;
pub mod prompt;
pub mod research;
pub mod review;

// Re-export commonly used types
pub use core::{error::DomainError, topic::Topic};
pub use prompt::PromptTemplate;
pub use research::{
    AnalysisOutput, AnalysisTables, DEFAULT_NUM_RESULTS, FetchedContent, KeywordCount,
    MAX_NUM_RESULTS, OverviewRow, ReportStyle, ResearchSource, SearchHit, SourceSummary,
    validate_num_results,
};
pub use review::{NormalizeStrategy, RawResponse, ResponseContract, ReviewResult};
