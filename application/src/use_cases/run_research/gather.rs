//! Search and fetch stages of the RunResearch use case.

use super::RunResearchUseCase;
use super::types::{PipelineError, RunResearchInput};
use crate::ports::progress::{PipelineProgress, Stage};
use report_domain::ResearchSource;
use tracing::{debug, info};

impl RunResearchUseCase {
    /// Search for the topic, then fetch every hit in rank order.
    pub(super) async fn gather(
        &self,
        input: &RunResearchInput,
        progress: &dyn PipelineProgress,
    ) -> Result<Vec<ResearchSource>, PipelineError> {
        info!(
            "Searching '{}' via {} ({} results)",
            input.topic,
            self.search.name(),
            input.num_results
        );
        progress.on_stage_start(Stage::Search, input.num_results);
        let hits = self
            .search
            .search(input.topic.content(), input.num_results)
            .await?;
        progress.on_stage_complete(Stage::Search);
        info!("Search returned {} results", hits.len());

        progress.on_stage_start(Stage::Fetch, hits.len());
        let mut sources = Vec::with_capacity(hits.len());
        for hit in hits {
            let content = self.fetcher.fetch(&hit.url).await;
            let success = content.length > 0;
            debug!(
                "Fetched {} ({} chars, login wall: {})",
                hit.url, content.length, content.login_wall
            );
            progress.on_item_complete(Stage::Fetch, &hit.url, success);
            sources.push(ResearchSource::new(hit, content));
        }
        progress.on_stage_complete(Stage::Fetch);

        Ok(sources)
    }
}
