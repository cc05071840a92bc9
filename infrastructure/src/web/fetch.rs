//! Fetch a URL and extract readable text

use crate::config::{ConfigError, FileFetchConfig};
use async_trait::async_trait;
use report_application::ContentFetcher;
use report_domain::FetchedContent;
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum response body size (5 MB)
const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// [`ContentFetcher`] backed by reqwest and scraper
pub struct HtmlContentFetcher {
    client: reqwest::Client,
    preview_chars: usize,
}

impl HtmlContentFetcher {
    pub fn new(client: reqwest::Client, preview_chars: usize) -> Self {
        Self {
            client,
            preview_chars,
        }
    }

    pub fn from_config(config: &FileFetchConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self::new(client, config.preview_chars))
    }

    async fn fetch_text(&self, url: &str) -> Result<String, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ));
        }

        let is_html = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_none_or(|ct| ct.contains("text/html") || ct.contains("application/xhtml"));

        let body = response.bytes().await.map_err(|e| e.to_string())?;
        if body.len() > MAX_BODY_SIZE {
            return Err(format!("Response too large: {} bytes", body.len()));
        }

        let body = String::from_utf8_lossy(&body);
        Ok(if is_html {
            html_to_text(&body)
        } else {
            clean_whitespace(&body)
        })
    }
}

#[async_trait]
impl ContentFetcher for HtmlContentFetcher {
    async fn fetch(&self, url: &str) -> FetchedContent {
        match self.fetch_text(url).await {
            Ok(text) => {
                debug!("Fetched {} chars from {}", text.chars().count(), url);
                FetchedContent::from_text(text, self.preview_chars)
            }
            Err(reason) => {
                warn!("Error fetching {}: {}", url, reason);
                FetchedContent::failed(reason)
            }
        }
    }
}

/// Extract readable text from HTML, stripping tags, scripts, and styles
pub fn html_to_text(html: &str) -> String {
    use scraper::{Html, Selector};

    let document = Html::parse_document(html);

    // Subtrees ignored entirely
    let skip_tags = ["script", "style", "noscript", "svg"];

    let body = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next());
    let root = body.unwrap_or_else(|| document.root_element());

    clean_whitespace(&collect_element_text(root, &skip_tags).join(" "))
}

/// Recursively collect text from an element, skipping elements matching skip_tags
fn collect_element_text(element: scraper::ElementRef, skip_tags: &[&str]) -> Vec<String> {
    if skip_tags.contains(&element.value().name()) {
        return Vec::new();
    }

    let mut parts = Vec::new();
    for child in element.children() {
        match child.value() {
            scraper::Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(t.to_string());
                }
            }
            scraper::Node::Element(_) => {
                if let Some(child_el) = scraper::ElementRef::wrap(child) {
                    parts.extend(collect_element_text(child_el, skip_tags));
                }
            }
            _ => {}
        }
    }
    parts
}

/// Collapse runs of whitespace to one space, keeping at most one blank line
fn clean_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_whitespace = false;
    let mut newline_count = 0;

    for ch in text.chars() {
        if ch == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push('\n');
            }
            prev_was_whitespace = true;
        } else if ch.is_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
            }
            prev_was_whitespace = true;
            newline_count = 0;
        } else {
            result.push(ch);
            prev_was_whitespace = false;
            newline_count = 0;
        }
    }

    result.trim().to_string()
}
