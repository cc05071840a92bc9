//! Progress notification port
//!
//! Defines the interface for reporting progress during a research run.

use std::fmt;

/// Stages of the research pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Search,
    Fetch,
    Analysis,
    Writing,
    Review,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Search,
        Stage::Fetch,
        Stage::Analysis,
        Stage::Writing,
        Stage::Review,
    ];

    /// Name of the agent responsible for the stage
    pub fn agent(&self) -> &'static str {
        match self {
            Stage::Search => "Search Agent",
            Stage::Fetch => "Fetch Agent",
            Stage::Analysis => "Analysis Agent",
            Stage::Writing => "Writer Agent",
            Stage::Review => "Reviewer Agent",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Search => "search",
            Stage::Fetch => "fetch",
            Stage::Analysis => "analysis",
            Stage::Writing => "writing",
            Stage::Review => "review",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback for progress updates during a research run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, logs, etc.)
pub trait PipelineProgress: Send + Sync {
    /// Called when a stage starts; `total` is the number of work items when known
    fn on_stage_start(&self, stage: Stage, total: usize);

    /// Called when one work item in a stage finishes
    fn on_item_complete(&self, _stage: Stage, _label: &str, _success: bool) {}

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: Stage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PipelineProgress for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _total: usize) {}
    fn on_stage_complete(&self, _stage: Stage) {}
}
