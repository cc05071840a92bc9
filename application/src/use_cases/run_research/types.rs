//! Types used by the RunResearch use case.

use crate::ports::progress::Stage;
use crate::ports::search_provider::SearchError;
use crate::ports::text_generator::GenerationError;
use report_domain::{
    AnalysisTables, DomainError, ReportStyle, ResearchSource, Topic, validate_num_results,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a research run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    InvalidInput(#[from] DomainError),

    #[error("Research failed: {0}")]
    Search(#[from] SearchError),

    #[error("Analysis failed: {0}")]
    Analysis(GenerationError),

    #[error("Report writing failed: {0}")]
    Writing(GenerationError),

    #[error("Report writing failed: model returned an empty draft")]
    EmptyDraft,
}

impl PipelineError {
    /// Whether the caller supplied bad input (as opposed to an upstream failure)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PipelineError::InvalidInput(e) if e.is_invalid_input())
    }
}

/// Input for the RunResearch use case
#[derive(Debug, Clone)]
pub struct RunResearchInput {
    pub topic: Topic,
    pub num_results: usize,
    pub report_style: ReportStyle,
}

impl RunResearchInput {
    /// Validate the raw request values
    pub fn new(
        topic: impl Into<String>,
        num_results: usize,
        report_style: ReportStyle,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            topic: Topic::try_new(topic)?,
            num_results: validate_num_results(num_results)?,
            report_style,
        })
    }
}

/// What one stage did, for the `agent_logs` section of the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageLog {
    pub stage: String,
    pub agent: String,
    pub status: String,
    pub duration_ms: u64,
    /// Stage-specific counts (results found, draft length, ...)
    #[serde(flatten)]
    pub metrics: BTreeMap<String, usize>,
}

impl StageLog {
    pub fn completed(stage: Stage, elapsed: Duration) -> Self {
        Self {
            stage: stage.as_str().to_string(),
            agent: stage.agent().to_string(),
            status: "completed".to_string(),
            duration_ms: elapsed.as_millis() as u64,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, name: &str, value: usize) -> Self {
        self.metrics.insert(name.to_string(), value);
        self
    }
}

/// Everything produced by one research run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchReport {
    pub research_results: Vec<ResearchSource>,
    pub analysis_summary: String,
    pub analysis_tables: AnalysisTables,
    pub draft_report: String,
    pub final_report: String,
    pub review_notes: String,
    /// Wall-clock seconds for the whole run
    pub processing_time: f64,
    pub agent_logs: Vec<StageLog>,
}
