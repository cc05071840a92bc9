//! Review response normalization.
//!
//! Coerces whatever the reviewer model returned into a [`ReviewResult`]. The
//! work is an explicit, ordered chain of pure strategies; the first one that
//! produces a result wins. The last strategy always produces one, so
//! [`normalize`] is total.
//!
//! | # | Strategy | Accepts |
//! |---|----------|---------|
//! | 1 | [`ErrorSentinel`](NormalizeStrategy::ErrorSentinel) | text containing a known error marker |
//! | 2 | [`DirectMapping`](NormalizeStrategy::DirectMapping) | an already-structured mapping with both keys |
//! | 3 | [`EmbeddedJson`](NormalizeStrategy::EmbeddedJson) | a JSON object somewhere inside prose |
//! | 4 | [`WholeLiteral`](NormalizeStrategy::WholeLiteral) | `{...}` as strict JSON or a permissive literal |
//! | 5 | [`ManualFields`](NormalizeStrategy::ManualFields) | `key: "value"` fragments, with defaults |
//!
//! The error check runs first so an error message that happens to quote a
//! JSON object is never mistaken for a real answer.

use super::literal::parse_literal;
use super::value_objects::{RawResponse, ReviewResult, notes};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

const FINAL_REPORT: &str = "final_report";
const REVIEW_NOTES: &str = "review_notes";

/// Markers that identify an error string produced upstream instead of a review.
const ERROR_MARKERS: &[&str] = &[
    "error: could not parse the review response",
    "invalid response format",
];

/// A balanced brace group with at most one level of nesting.
static EMBEDDED_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?:[^{}]|\{[^{}]*\})*\}").expect("valid object pattern"));

static FINAL_REPORT_FIELD: LazyLock<Regex> = LazyLock::new(|| field_pattern(FINAL_REPORT));
static REVIEW_NOTES_FIELD: LazyLock<Regex> = LazyLock::new(|| field_pattern(REVIEW_NOTES));

fn field_pattern(key: &str) -> Regex {
    Regex::new(&format!(
        r#"["']?{key}["']?\s*:\s*(?:"((?:[^"\\]|\\.)*)"|'((?:[^'\\]|\\.)*)')"#
    ))
    .expect("valid field pattern")
}

/// One step of the normalization cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeStrategy {
    ErrorSentinel,
    DirectMapping,
    EmbeddedJson,
    WholeLiteral,
    ManualFields,
}

impl NormalizeStrategy {
    /// Evaluation order. Changing it changes observable behavior.
    pub const CASCADE: [NormalizeStrategy; 5] = [
        NormalizeStrategy::ErrorSentinel,
        NormalizeStrategy::DirectMapping,
        NormalizeStrategy::EmbeddedJson,
        NormalizeStrategy::WholeLiteral,
        NormalizeStrategy::ManualFields,
    ];

    /// Try this strategy alone.
    pub fn apply(&self, raw: &RawResponse, draft: &str) -> Option<ReviewResult> {
        match self {
            NormalizeStrategy::ErrorSentinel => error_sentinel(raw, draft),
            NormalizeStrategy::DirectMapping => direct_mapping(raw, draft),
            NormalizeStrategy::EmbeddedJson => embedded_json(raw, draft),
            NormalizeStrategy::WholeLiteral => whole_literal(raw, draft),
            NormalizeStrategy::ManualFields => Some(manual_fields(raw, draft)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NormalizeStrategy::ErrorSentinel => "error_sentinel",
            NormalizeStrategy::DirectMapping => "direct_mapping",
            NormalizeStrategy::EmbeddedJson => "embedded_json",
            NormalizeStrategy::WholeLiteral => "whole_literal",
            NormalizeStrategy::ManualFields => "manual_fields",
        }
    }
}

/// Normalize a raw reviewer response, falling back to `draft`.
pub fn normalize(raw: &RawResponse, draft: &str) -> ReviewResult {
    normalize_traced(raw, draft).0
}

/// Like [`normalize`], also reporting which strategy produced the result.
pub fn normalize_traced(raw: &RawResponse, draft: &str) -> (ReviewResult, NormalizeStrategy) {
    for strategy in NormalizeStrategy::CASCADE {
        if let Some(result) = strategy.apply(raw, draft) {
            return (result, strategy);
        }
    }
    // ManualFields never declines; kept for totality of the signature.
    (
        ReviewResult::fallback(draft, notes::INVALID_FORMAT),
        NormalizeStrategy::ManualFields,
    )
}

// ==================== Strategies ====================

fn error_sentinel(raw: &RawResponse, draft: &str) -> Option<ReviewResult> {
    let text = raw.as_text().to_lowercase();
    ERROR_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
        .then(|| ReviewResult::fallback(draft, notes::MODEL_ERROR))
}

fn direct_mapping(raw: &RawResponse, draft: &str) -> Option<ReviewResult> {
    match raw {
        RawResponse::Value(value) => from_mapping(value, draft),
        RawResponse::Text(_) => None,
    }
}

fn embedded_json(raw: &RawResponse, draft: &str) -> Option<ReviewResult> {
    let text = raw.as_text();
    let candidate = longest_object(&text)?;
    let value: Value = serde_json::from_str(candidate).ok()?;
    from_mapping(&value, draft)
}

fn whole_literal(raw: &RawResponse, draft: &str) -> Option<ReviewResult> {
    let text = raw.as_text();
    let trimmed = text.trim();
    if !(trimmed.starts_with('{') && trimmed.ends_with('}')) {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<Value>(trimmed)
        && let Some(result) = from_mapping(&value, draft)
    {
        return Some(result);
    }
    parse_literal(trimmed).and_then(|value| from_mapping(&value, draft))
}

fn manual_fields(raw: &RawResponse, draft: &str) -> ReviewResult {
    let text = raw.as_text();
    let report = capture_field(&FINAL_REPORT_FIELD, &text);
    let review_notes = capture_field(&REVIEW_NOTES_FIELD, &text);
    ReviewResult::from_fields(
        report.as_deref().unwrap_or(draft),
        review_notes.as_deref().unwrap_or(notes::INVALID_FORMAT),
        draft,
        notes::INVALID_FORMAT,
    )
}

// ==================== Helpers ====================

/// The longest brace group in `text`; ties go to the earliest one.
fn longest_object(text: &str) -> Option<&str> {
    let mut best: Option<&str> = None;
    for m in EMBEDDED_OBJECT.find_iter(text) {
        if best.is_none_or(|b| m.as_str().len() > b.len()) {
            best = Some(m.as_str());
        }
    }
    best
}

fn from_mapping(value: &Value, draft: &str) -> Option<ReviewResult> {
    let map = value.as_object()?;
    let report = map.get(FINAL_REPORT)?;
    let review_notes = map.get(REVIEW_NOTES)?;
    Some(ReviewResult::from_fields(
        &field_text(report),
        &field_text(review_notes),
        draft,
        notes::INVALID_FORMAT,
    ))
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn capture_field(pattern: &Regex, text: &str) -> Option<String> {
    let caps = pattern.captures(text)?;
    if let Some(double) = caps.get(1) {
        // Decode JSON escapes; keep the raw capture if they are malformed.
        let quoted = format!("\"{}\"", double.as_str());
        return Some(serde_json::from_str(&quoted).unwrap_or_else(|_| double.as_str().to_string()));
    }
    caps.get(2)
        .map(|single| single.as_str().replace("\\'", "'"))
}
