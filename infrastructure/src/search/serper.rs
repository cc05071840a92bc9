//! Serper.dev search adapter

use super::read_json;
use async_trait::async_trait;
use report_application::{SearchError, SearchProvider};
use report_domain::SearchHit;
use serde::Deserialize;
use tracing::info;

const SERPER_ENDPOINT: &str = "https://google.serper.dev/search";

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperResult>,
}

#[derive(Debug, Deserialize)]
struct SerperResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    source: String,
}

impl From<SerperResult> for SearchHit {
    fn from(r: SerperResult) -> Self {
        SearchHit {
            title: r.title,
            url: r.link,
            snippet: r.snippet,
            published_date: r.date,
            domain: r.source,
        }
    }
}

/// Google results through the Serper.dev API
pub struct SerperSearchProvider {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl SerperSearchProvider {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: SERPER_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl SearchProvider for SerperSearchProvider {
    fn name(&self) -> &str {
        "serper"
    }

    async fn search(&self, query: &str, num_results: usize) -> Result<Vec<SearchHit>, SearchError> {
        info!(query, num_results, "search: querying serper");

        let body = serde_json::json!({
            "q": query,
            "num": num_results,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let data: SerperResponse = read_json(response).await?;

        Ok(data
            .organic
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
    use axum::http::{HeaderMap, StatusCode};
    use axum::{Json, Router, routing::post};
    use serde_json::{Value, json};

    async fn organic(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if headers.get("X-API-KEY").and_then(|v| v.to_str().ok()) != Some("test-key") {
            return (StatusCode::FORBIDDEN, Json(json!({"message": "Unauthorized"})));
        }
        assert_eq!(body["q"], "heat pumps");
        let results: Vec<Value> = (1..=4)
            .map(|n| {
                json!({
                    "title": format!("Result {}", n),
                    "link": format!("https://site{}.com/a", n),
                    "snippet": "text",
                    "date": "Jan 1, 2024",
                    "source": format!("site{}.com", n),
                })
            })
            .collect();
        (StatusCode::OK, Json(json!({ "organic": results })))
    }

    #[tokio::test]
    async fn test_search_maps_organic_results() {
        let base = spawn(Router::new().route("/search", post(organic))).await;
        let provider = SerperSearchProvider::new(reqwest::Client::new(), "test-key")
            .with_endpoint(format!("{}/search", base));

        let hits = provider.search("heat pumps", 2).await.unwrap();

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Result 1");
        assert_eq!(hits[0].url, "https://site1.com/a");
        assert_eq!(hits[0].published_date, "Jan 1, 2024");
        assert_eq!(hits[1].domain, "site2.com");
    }

    #[tokio::test]
    async fn test_search_reports_api_errors() {
        let base = spawn(Router::new().route("/search", post(organic))).await;
        let provider = SerperSearchProvider::new(reqwest::Client::new(), "wrong-key")
            .with_endpoint(format!("{}/search", base));

        let error = provider.search("heat pumps", 2).await.unwrap_err();

        assert!(matches!(error, SearchError::Api { status: 403, .. }));
    }
}
