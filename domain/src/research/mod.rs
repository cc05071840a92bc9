//! Research domain
//!
//! Entities passed between the pipeline stages (search hits, fetched
//! content, sources, summaries) and the pure table-building helpers used by
//! the analysis stage.

pub mod analysis;
pub mod content;
pub mod entities;

pub use analysis::{AnalysisOutput, AnalysisTables, KeywordCount, OverviewRow};
pub use content::looks_like_login_wall;
pub use entities::{
    DEFAULT_NUM_RESULTS, FetchedContent, MAX_NUM_RESULTS, ReportStyle, ResearchSource, SearchHit,
    SourceSummary, validate_num_results,
};
