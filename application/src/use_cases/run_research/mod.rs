//! Run Research use case
//!
//! Orchestrates the full research flow, one stage after another:
//!
//! | Stage       | Collaborator        | Failure            |
//! |-------------|---------------------|--------------------|
//! | 1. Search   | `SearchProvider`    | `PipelineError`    |
//! | 2. Fetch    | `ContentFetcher`    | never (placeholder)|
//! | 3. Analysis | `TextGenerator`     | `PipelineError`    |
//! | 4. Writing  | `TextGenerator`     | `PipelineError`    |
//! | 5. Review   | `ReviewReportUseCase` | never (draft)    |

mod analysis;
mod gather;
mod types;
mod writing;

pub use types::{PipelineError, ResearchReport, RunResearchInput, StageLog};

use crate::ports::content_fetcher::ContentFetcher;
use crate::ports::progress::{NoProgress, PipelineProgress, Stage};
use crate::ports::search_provider::SearchProvider;
use crate::ports::text_generator::TextGenerator;
use crate::use_cases::review_report::ReviewReportUseCase;
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Use case for running a research pipeline end to end
#[derive(Clone)]
pub struct RunResearchUseCase {
    pub(super) search: Arc<dyn SearchProvider>,
    pub(super) fetcher: Arc<dyn ContentFetcher>,
    pub(super) generator: Arc<dyn TextGenerator>,
    pub(super) reviewer: Arc<ReviewReportUseCase>,
}

impl RunResearchUseCase {
    pub fn new(
        search: Arc<dyn SearchProvider>,
        fetcher: Arc<dyn ContentFetcher>,
        generator: Arc<dyn TextGenerator>,
        reviewer: Arc<ReviewReportUseCase>,
    ) -> Self {
        Self {
            search,
            fetcher,
            generator,
            reviewer,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunResearchInput,
        today: NaiveDate,
    ) -> Result<ResearchReport, PipelineError> {
        self.execute_with_progress(input, today, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunResearchInput,
        today: NaiveDate,
        progress: &dyn PipelineProgress,
    ) -> Result<ResearchReport, PipelineError> {
        let started = Instant::now();
        let mut logs = Vec::with_capacity(Stage::ALL.len());
        info!("Starting research on '{}'", input.topic);

        // Stages 1-2: Search + Fetch
        let stage_start = Instant::now();
        let sources = self.gather(&input, progress).await?;
        logs.push(
            StageLog::completed(Stage::Search, stage_start.elapsed())
                .with_metric("results_count", sources.len()),
        );

        // Stage 3: Analysis
        let stage_start = Instant::now();
        let analysis = self.analyze(&sources, progress).await?;
        logs.push(
            StageLog::completed(Stage::Analysis, stage_start.elapsed())
                .with_metric("summary_length", analysis.analysis_summary.chars().count())
                .with_metric(
                    "source_summaries_count",
                    analysis.analysis_tables.source_summaries.len(),
                ),
        );

        // Stage 4: Writing
        let stage_start = Instant::now();
        let draft_report = self
            .write(&analysis, input.report_style, today, progress)
            .await?;
        logs.push(
            StageLog::completed(Stage::Writing, stage_start.elapsed())
                .with_metric("draft_length", draft_report.chars().count()),
        );

        // Stage 5: Review
        let stage_start = Instant::now();
        progress.on_stage_start(Stage::Review, 1);
        let review = self.reviewer.execute(&draft_report, today).await;
        progress.on_stage_complete(Stage::Review);
        logs.push(
            StageLog::completed(Stage::Review, stage_start.elapsed())
                .with_metric("final_report_length", review.final_report.chars().count())
                .with_metric("review_notes_length", review.review_notes.chars().count()),
        );

        let processing_time = started.elapsed().as_secs_f64();
        info!("Research complete in {:.2}s", processing_time);

        Ok(ResearchReport {
            research_results: sources,
            analysis_summary: analysis.analysis_summary,
            analysis_tables: analysis.analysis_tables,
            draft_report,
            final_report: review.final_report,
            review_notes: review.review_notes,
            processing_time,
            agent_logs: logs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RetryPolicy, ReviewConfig};
    use crate::ports::search_provider::SearchError;
    use crate::ports::text_generator::GenerationError;
    use crate::use_cases::generate_with_retry::RetryingGenerator;
    use crate::use_cases::testing::{
        MapFetcher, RecordingDelay, RecordingProgress, ScriptedGenerator, StaticSearch, hit,
    };
    use report_domain::review::notes;
    use report_domain::{DomainError, ReportStyle};
    use std::time::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn article(words: &str) -> String {
        format!("{} ", words).repeat(60)
    }

    fn draft_text() -> String {
        format!(
            "Battery Market Report\n{}",
            "Solid-state cells are moving from pilot lines to early production. ".repeat(4)
        )
    }

    fn reviewer(generator: Arc<ScriptedGenerator>) -> Arc<ReviewReportUseCase> {
        let retry = RetryingGenerator::new(
            generator,
            Arc::new(RecordingDelay::default()),
            RetryPolicy {
                max_retries: 1,
                initial_delay: Duration::from_millis(1),
            },
        );
        Arc::new(ReviewReportUseCase::new(retry, ReviewConfig::default()))
    }

    fn use_case(
        search: StaticSearch,
        fetcher: MapFetcher,
        generator: Arc<ScriptedGenerator>,
        review_generator: Arc<ScriptedGenerator>,
    ) -> RunResearchUseCase {
        RunResearchUseCase::new(
            Arc::new(search),
            Arc::new(fetcher),
            generator,
            reviewer(review_generator),
        )
    }

    fn input(num_results: usize) -> RunResearchInput {
        RunResearchInput::new("solid-state batteries", num_results, ReportStyle::Detailed).unwrap()
    }

    #[test]
    fn test_input_validation() {
        assert!(matches!(
            RunResearchInput::new("  ", 5, ReportStyle::Concise),
            Err(DomainError::EmptyTopic)
        ));
        assert!(matches!(
            RunResearchInput::new("topic", 11, ReportStyle::Concise),
            Err(DomainError::InvalidResultCount(11))
        ));
    }

    #[tokio::test]
    async fn test_full_run() {
        let search = StaticSearch::new(vec![hit(1), hit(2), hit(3)]);
        let fetcher = MapFetcher::default()
            .with_page("https://example.com/1", article("lithium anode density"))
            .with_page("https://example.com/2", "Please sign in to continue");
        let draft = draft_text();
        let generator = Arc::new(ScriptedGenerator::replying(&[
            "Summary of source one.",
            "Overall the field is maturing.",
            &draft,
        ]));
        let review_response = format!(
            "IMPROVED REPORT: {}\nREVIEW NOTES: Tightened the wording.",
            draft
        );
        let review_generator = Arc::new(ScriptedGenerator::replying(&[&review_response]));
        let progress = RecordingProgress::default();

        let report = use_case(search, fetcher, generator.clone(), review_generator)
            .execute_with_progress(input(3), today(), &progress)
            .await
            .unwrap();

        assert_eq!(report.research_results.len(), 3);
        assert_eq!(report.research_results[2].fetched_text_length, 0);
        assert!(report.research_results[1].login_wall);

        // One summary (only source 1 is readable) + combine + draft
        assert_eq!(generator.calls(), 3);
        assert_eq!(report.analysis_summary, "Overall the field is maturing.");
        assert_eq!(report.analysis_tables.source_summaries.len(), 1);
        assert_eq!(report.analysis_tables.research_overview.len(), 3);
        assert_eq!(report.analysis_tables.keyword_frequency[0].keyword, "lithium");

        assert_eq!(report.draft_report, draft.trim());
        assert!(report.final_report.starts_with("Battery Market Report\n**Date:** October 16, 2026"));
        assert_eq!(report.review_notes, "Tightened the wording.");

        let stages: Vec<&str> = report.agent_logs.iter().map(|l| l.stage.as_str()).collect();
        assert_eq!(stages, vec!["search", "analysis", "writing", "review"]);
        assert_eq!(report.agent_logs[0].metrics["results_count"], 3);

        let events = progress.events();
        assert_eq!(events.first().map(String::as_str), Some("start:search:3"));
        assert_eq!(events.last().map(String::as_str), Some("done:review"));
        assert!(events.contains(&"item:fetch:false".to_string()));

        let prompts = generator.prompts();
        assert!(prompts[2].contains("in a detailed style"));
        assert!(prompts[2].contains("October 16, 2026"));
    }

    #[tokio::test]
    async fn test_unreadable_sources_skip_summaries() {
        let search = StaticSearch::new(vec![hit(1), hit(2)]);
        let draft = draft_text();
        let generator = Arc::new(ScriptedGenerator::replying(&[&draft]));
        let review_generator = Arc::new(ScriptedGenerator::failing());

        let report = use_case(search, MapFetcher::default(), generator.clone(), review_generator)
            .execute(input(2), today())
            .await
            .unwrap();

        assert_eq!(generator.calls(), 1);
        assert!(report.analysis_summary.contains("Out of 2 sources examined, only 0"));
        assert_eq!(report.analysis_tables.keyword_frequency[0].keyword, "N/A");
        assert_eq!(report.final_report, report.draft_report);
        assert_eq!(report.review_notes, notes::EMPTY_RESPONSE);
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let search = StaticSearch::failing(SearchError::Api {
            status: 403,
            message: "bad key".to_string(),
        });
        let generator = Arc::new(ScriptedGenerator::failing());

        let error = use_case(search, MapFetcher::default(), generator.clone(), generator.clone())
            .execute(input(5), today())
            .await
            .unwrap_err();

        assert!(matches!(error, PipelineError::Search(_)));
        assert!(!error.is_invalid_input());
        assert!(error.to_string().starts_with("Research failed:"));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_summary_failure_propagates() {
        let search = StaticSearch::new(vec![hit(1)]);
        let fetcher = MapFetcher::default().with_page("https://example.com/1", article("grid storage"));
        let generator = Arc::new(ScriptedGenerator::new(vec![Err(GenerationError::Quota(
            "daily limit".to_string(),
        ))]));

        let error = use_case(search, fetcher, generator.clone(), generator)
            .execute(input(1), today())
            .await
            .unwrap_err();

        assert!(matches!(error, PipelineError::Analysis(GenerationError::Quota(_))));
    }

    #[tokio::test]
    async fn test_empty_draft_is_an_error() {
        let search = StaticSearch::new(vec![hit(1)]);
        let generator = Arc::new(ScriptedGenerator::replying(&["   "]));
        let review_generator = Arc::new(ScriptedGenerator::failing());

        let error = use_case(search, MapFetcher::default(), generator, review_generator.clone())
            .execute(input(1), today())
            .await
            .unwrap_err();

        assert!(matches!(error, PipelineError::EmptyDraft));
        assert_eq!(review_generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_search_respects_requested_count() {
        let search = Arc::new(StaticSearch::new((1..=8).map(hit).collect()));
        let draft = draft_text();
        let generator = Arc::new(ScriptedGenerator::replying(&[&draft]));
        let use_case = RunResearchUseCase::new(
            search.clone(),
            Arc::new(MapFetcher::default()),
            generator,
            reviewer(Arc::new(ScriptedGenerator::failing())),
        );

        let report = use_case.execute(input(4), today()).await.unwrap();

        assert_eq!(report.research_results.len(), 4);
        assert_eq!(search.queries(), vec![("solid-state batteries".to_string(), 4)]);
    }
}
