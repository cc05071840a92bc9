//! Analysis stage of the RunResearch use case.

use super::RunResearchUseCase;
use super::types::PipelineError;
use crate::ports::progress::{PipelineProgress, Stage};
use report_domain::research::analysis::{build_tables, is_meaningful, limited_content_summary};
use report_domain::{AnalysisOutput, PromptTemplate, ResearchSource, SourceSummary};
use tracing::{info, warn};

impl RunResearchUseCase {
    /// Summarize each readable source, combine the summaries, build the tables.
    pub(super) async fn analyze(
        &self,
        sources: &[ResearchSource],
        progress: &dyn PipelineProgress,
    ) -> Result<AnalysisOutput, PipelineError> {
        let meaningful: Vec<&ResearchSource> = sources.iter().filter(|s| is_meaningful(s)).collect();
        info!(
            "Analyzing {} sources ({} with readable content)",
            sources.len(),
            meaningful.len()
        );
        progress.on_stage_start(Stage::Analysis, meaningful.len());

        if meaningful.is_empty() {
            warn!("No readable content; using limited-content summary");
            progress.on_stage_complete(Stage::Analysis);
            return Ok(AnalysisOutput {
                analysis_summary: limited_content_summary(sources),
                analysis_tables: build_tables(sources, Vec::new()),
            });
        }

        let mut summaries = Vec::with_capacity(meaningful.len());
        for source in meaningful {
            let summary = self
                .generator
                .generate(&PromptTemplate::summarize_source(source))
                .await
                .map_err(PipelineError::Analysis)?;
            progress.on_item_complete(Stage::Analysis, &source.title, true);
            summaries.push(SourceSummary {
                url: source.url.clone(),
                title: source.title.clone(),
                summary: summary.trim().to_string(),
            });
        }

        let pairs: Vec<(String, String)> = summaries
            .iter()
            .map(|s| (s.title.clone(), s.summary.clone()))
            .collect();
        let analysis_summary = self
            .generator
            .generate(&PromptTemplate::analysis_summary(&pairs))
            .await
            .map_err(PipelineError::Analysis)?;
        progress.on_stage_complete(Stage::Analysis);

        Ok(AnalysisOutput {
            analysis_summary: analysis_summary.trim().to_string(),
            analysis_tables: build_tables(sources, summaries),
        })
    }
}
