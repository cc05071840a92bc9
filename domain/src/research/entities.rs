//! Research entities - what flows between the pipeline stages.

use crate::core::error::DomainError;
use crate::core::string::preview;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Results requested when the caller does not say.
pub const DEFAULT_NUM_RESULTS: usize = 5;

/// Upper bound on results for a single run.
pub const MAX_NUM_RESULTS: usize = 10;

/// Check a requested result count against `1..=MAX_NUM_RESULTS`.
pub fn validate_num_results(num_results: usize) -> Result<usize, DomainError> {
    if (1..=MAX_NUM_RESULTS).contains(&num_results) {
        Ok(num_results)
    } else {
        Err(DomainError::InvalidResultCount(num_results))
    }
}

/// One ranked result returned by a search provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub domain: String,
}

/// Cleaned page text produced by the content fetcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedContent {
    pub text: String,
    pub preview: String,
    /// Length of `text` in characters
    pub length: usize,
    /// Page looks like a login or paywall interstitial
    pub login_wall: bool,
}

impl FetchedContent {
    /// Build from cleaned text, deriving preview, length and the login-wall flag.
    pub fn from_text(text: impl Into<String>, preview_chars: usize) -> Self {
        let text = text.into();
        Self {
            preview: preview(&text, preview_chars),
            length: text.chars().count(),
            login_wall: super::content::looks_like_login_wall(&text),
            text,
        }
    }

    /// Placeholder for a page that could not be fetched.
    pub fn failed(reason: impl fmt::Display) -> Self {
        Self {
            text: String::new(),
            preview: format!("Error fetching content: {}", reason),
            length: 0,
            login_wall: false,
        }
    }
}

/// A search hit joined with what was fetched from its URL.
///
/// Serialized as the `research_results` entries of the HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchSource {
    pub url: String,
    pub title: String,
    pub snippet: String,
    pub domain: String,
    pub published_date: String,
    pub content_preview: String,
    pub fetched_text_length: usize,
    #[serde(default)]
    pub login_wall: bool,
}

impl ResearchSource {
    pub fn new(hit: SearchHit, content: FetchedContent) -> Self {
        Self {
            url: hit.url,
            title: hit.title,
            snippet: hit.snippet,
            domain: hit.domain,
            published_date: hit.published_date,
            content_preview: content.preview,
            fetched_text_length: content.length,
            login_wall: content.login_wall,
        }
    }
}

/// Per-source summary produced during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSummary {
    pub url: String,
    pub title: String,
    pub summary: String,
}

/// Writing style requested for the draft report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    #[default]
    Concise,
    Detailed,
    Academic,
}

impl ReportStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStyle::Concise => "concise",
            ReportStyle::Detailed => "detailed",
            ReportStyle::Academic => "academic",
        }
    }
}

impl fmt::Display for ReportStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "concise" => Ok(ReportStyle::Concise),
            "detailed" => Ok(ReportStyle::Detailed),
            "academic" => Ok(ReportStyle::Academic),
            other => Err(DomainError::UnknownReportStyle(other.to_string())),
        }
    }
}
