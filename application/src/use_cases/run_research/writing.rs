//! Writing stage of the RunResearch use case.

use super::RunResearchUseCase;
use super::types::PipelineError;
use crate::ports::progress::{PipelineProgress, Stage};
use chrono::NaiveDate;
use report_domain::review::polish::DATE_FORMAT;
use report_domain::{AnalysisOutput, PromptTemplate, ReportStyle};
use serde::Serialize;
use tracing::info;

/// Render the analysis as the data block handed to the writer model.
pub(super) fn analysis_text(analysis: &AnalysisOutput) -> String {
    let tables = &analysis.analysis_tables;
    format!(
        "Analysis Summary:\n{}\n\nAnalysis Tables:\n- Research Overview: {}\n- Keyword Frequency: {}\n- Source Summaries: {}",
        analysis.analysis_summary,
        to_json(&tables.research_overview),
        to_json(&tables.keyword_frequency),
        to_json(&tables.source_summaries)
    )
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

impl RunResearchUseCase {
    /// Draft the report from the analysis.
    pub(super) async fn write(
        &self,
        analysis: &AnalysisOutput,
        style: ReportStyle,
        today: NaiveDate,
        progress: &dyn PipelineProgress,
    ) -> Result<String, PipelineError> {
        info!("Writing {} draft report", style);
        progress.on_stage_start(Stage::Writing, 1);

        let prompt = PromptTemplate::write_report(
            &analysis_text(analysis),
            style,
            &today.format(DATE_FORMAT).to_string(),
        );
        let draft = self
            .generator
            .generate(&prompt)
            .await
            .map_err(PipelineError::Writing)?;

        let draft = draft.trim().to_string();
        if draft.is_empty() {
            return Err(PipelineError::EmptyDraft);
        }

        progress.on_stage_complete(Stage::Writing);
        info!("Draft report generated ({} chars)", draft.chars().count());
        Ok(draft)
    }
}
