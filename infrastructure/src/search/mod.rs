//! Web search adapters
//!
//! | Provider | Endpoint | Auth | Results field |
//! |----------|----------|------|---------------|
//! | `serper` | `POST https://google.serper.dev/search` | `X-API-KEY` header | `organic` |
//! | `serpapi` | `GET https://serpapi.com/search` | `api_key` query param | `organic_results` |
//!
//! The provider is chosen once per deployment by `[search] provider`
//! (or `SEARCH_PROVIDER`).

mod serpapi;
mod serper;

pub use serpapi::SerpApiSearchProvider;
pub use serper::SerperSearchProvider;

use crate::config::{ConfigError, FileSearchConfig};
use report_application::{SearchError, SearchProvider};
use serde::de::DeserializeOwned;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Longest error body echoed back in [`SearchError::Api`]
const ERROR_BODY_PREVIEW: usize = 200;

/// Which search backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchProviderKind {
    Serper,
    SerpApi,
}

impl FromStr for SearchProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "serper" => Ok(SearchProviderKind::Serper),
            "serpapi" => Ok(SearchProviderKind::SerpApi),
            other => Err(ConfigError::UnknownSearchProvider(other.to_string())),
        }
    }
}

/// Build the configured search provider.
///
/// Fails when the provider name is unknown or its API key is missing.
pub fn build_search_provider(
    config: &FileSearchConfig,
) -> Result<Arc<dyn SearchProvider>, ConfigError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()?;

    let provider: Arc<dyn SearchProvider> = match config.provider.parse::<SearchProviderKind>()? {
        SearchProviderKind::Serper => {
            let key = non_empty(&config.serper_api_key)
                .ok_or(ConfigError::MissingApiKey("SERPER_API_KEY"))?;
            Arc::new(SerperSearchProvider::new(client, key))
        }
        SearchProviderKind::SerpApi => {
            let key = non_empty(&config.serpapi_api_key)
                .ok_or(ConfigError::MissingApiKey("SERPAPI_API_KEY"))?;
            Arc::new(SerpApiSearchProvider::new(client, key))
        }
    };
    Ok(provider)
}

fn non_empty(key: &Option<String>) -> Option<String> {
    key.as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
}

/// Check the status and decode the JSON body of a search API response.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, SearchError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SearchError::Api {
            status: status.as_u16(),
            message: body.chars().take(ERROR_BODY_PREVIEW).collect(),
        });
    }
    response
        .json()
        .await
        .map_err(|e| SearchError::InvalidResponse(e.to_string()))
}
