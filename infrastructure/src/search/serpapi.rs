//! SerpApi search adapter

use super::read_json;
use async_trait::async_trait;
use report_application::{SearchError, SearchProvider};
use report_domain::SearchHit;
use serde::Deserialize;
use tracing::info;

const SERPAPI_ENDPOINT: &str = "https://serpapi.com/search";

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<SerpApiResult>,
}

#[derive(Debug, Deserialize)]
struct SerpApiResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    date: String,
}

impl From<SerpApiResult> for SearchHit {
    fn from(r: SerpApiResult) -> Self {
        let domain = reqwest::Url::parse(&r.link)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_default();
        SearchHit {
            title: r.title,
            url: r.link,
            snippet: r.snippet,
            published_date: r.date,
            domain,
        }
    }
}

/// Google results through SerpApi
pub struct SerpApiSearchProvider {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl SerpApiSearchProvider {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: SERPAPI_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl SearchProvider for SerpApiSearchProvider {
    fn name(&self) -> &str {
        "serpapi"
    }

    async fn search(&self, query: &str, num_results: usize) -> Result<Vec<SearchHit>, SearchError> {
        info!(query, num_results, "search: querying serpapi");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let data: SerpApiResponse = read_json(response).await?;

        Ok(data
            .organic_results
            .into_iter()
            .take(num_results)
            .map(SearchHit::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::spawn;
    use axum::extract::Query;
    use axum::{Json, Router, routing::get};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn results(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        assert_eq!(params.get("api_key").map(String::as_str), Some("test-key"));
        assert_eq!(params.get("q").map(String::as_str), Some("wind power"));
        Json(json!({
            "organic_results": [
                {"title": "One", "link": "https://www.energy.gov/wind", "snippet": "s1"},
                {"title": "Two", "link": "not a url", "snippet": "s2", "date": "2 days ago"},
                {"title": "Three", "link": "https://example.org/3", "snippet": "s3"}
            ]
        }))
    }

    #[tokio::test]
    async fn test_search_derives_domain_from_link() {
        let base = spawn(Router::new().route("/search", get(results))).await;
        let provider = SerpApiSearchProvider::new(reqwest::Client::new(), "test-key")
            .with_endpoint(format!("{}/search", base));

        let hits = provider.search("wind power", 2).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].domain, "www.energy.gov");
        assert_eq!(hits[0].published_date, "");
        assert_eq!(hits[1].domain, "");
        assert_eq!(hits[1].published_date, "2 days ago");
    }
}
