//! Content fetcher port

use async_trait::async_trait;
use report_domain::FetchedContent;

/// Retrieves readable text for a URL.
///
/// Infallible by contract: transport or parse failures come back as
/// [`FetchedContent::failed`] so one bad page never stops a run.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchedContent;
}
