//! Review value objects - the typed result and the raw response it is built from.

use crate::core::error::DomainError;
use crate::core::string::truncate_chars;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed review notes used on the degraded paths.
pub mod notes {
    pub const DRAFT_TOO_SHORT: &str = "Draft report was empty or too short for review.";
    pub const EMPTY_RESPONSE: &str = "Reviewer returned empty response; using draft.";
    pub const MODEL_ERROR: &str = "Model returned error response; using original draft.";
    pub const INVALID_FORMAT: &str = "Reviewer returned invalid format; using draft.";
    pub const UNSPLITTABLE: &str = "Could not parse review response; using draft.";
    pub const NO_NOTES: &str = "Reviewer returned no review notes.";
    pub const NO_IMPROVED_REPORT: &str = " (No improved report provided, using draft)";

    /// Notes for a review aborted by an unexpected failure.
    pub fn reviewer_error(reason: &str) -> String {
        format!("Reviewer error; returned draft. Reason: {}", reason)
    }
}

/// Outcome of one review pass.
///
/// Both fields are guaranteed non-empty whenever the draft is non-empty; the
/// constructors fall back to the draft and to the supplied default notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResult {
    pub final_report: String,
    pub review_notes: String,
}

impl ReviewResult {
    /// Return the draft unchanged with an explanatory note.
    pub fn fallback(draft: &str, review_notes: impl Into<String>) -> Self {
        Self {
            final_report: draft.to_string(),
            review_notes: review_notes.into(),
        }
    }

    /// Build a result from extracted fields, trimming both and substituting
    /// the draft / `default_notes` for anything that ends up blank.
    pub fn from_fields(report: &str, review_notes: &str, draft: &str, default_notes: &str) -> Self {
        let report = report.trim();
        let review_notes = review_notes.trim();
        Self {
            final_report: if report.is_empty() {
                draft.to_string()
            } else {
                report.to_string()
            },
            review_notes: if review_notes.is_empty() {
                default_notes.to_string()
            } else {
                review_notes.to_string()
            },
        }
    }

    /// Cap `review_notes` at `max_chars` characters.
    pub fn with_notes_limit(mut self, max_chars: usize) -> Self {
        self.review_notes = truncate_chars(&self.review_notes, max_chars);
        self
    }
}

/// Raw output received from the text generator, shape unknown.
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    /// Plain text as returned by the model
    Text(String),
    /// An already-structured value (a mapping, or `Null` for "nothing")
    Value(serde_json::Value),
}

impl RawResponse {
    /// Text form used by the text-based strategies.
    ///
    /// Structured values are rendered as compact JSON.
    pub fn as_text(&self) -> String {
        match self {
            RawResponse::Text(text) => text.clone(),
            RawResponse::Value(value) => value.to_string(),
        }
    }
}

impl From<&str> for RawResponse {
    fn from(s: &str) -> Self {
        RawResponse::Text(s.to_string())
    }
}

impl From<String> for RawResponse {
    fn from(s: String) -> Self {
        RawResponse::Text(s)
    }
}

impl From<serde_json::Value> for RawResponse {
    fn from(value: serde_json::Value) -> Self {
        RawResponse::Value(value)
    }
}

/// The output shape the reviewer model is instructed to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseContract {
    /// Two labelled plain-text parts; notes are truncated after parsing
    #[default]
    FreeText,
    /// A single JSON object; notes length is left to the model
    JsonObject,
}

impl ResponseContract {
    /// The notes limit this contract enforces, given the configured value.
    pub fn notes_limit(&self, configured: usize) -> Option<usize> {
        match self {
            ResponseContract::FreeText => Some(configured),
            ResponseContract::JsonObject => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseContract::FreeText => "free-text",
            ResponseContract::JsonObject => "json-object",
        }
    }
}

impl fmt::Display for ResponseContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseContract {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "free-text" | "text" => Ok(ResponseContract::FreeText),
            "json-object" | "json" => Ok(ResponseContract::JsonObject),
            other => Err(DomainError::UnknownContract(other.to_string())),
        }
    }
}
