//! Interpretation of two-part free-text reviewer responses.
//!
//! The free-text contract asks the model for:
//!
//! ```text
//! 1. IMPROVED REPORT: <report>
//! 2. REVIEW NOTES: <notes>
//! ```
//!
//! The response is split on the notes label (or, failing that, on a `2.`
//! list marker at the start of a line). The report part is polished; notes
//! truncation is left to the caller, which knows the configured limit.

use super::polish::polish;
use super::value_objects::{ReviewResult, notes};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

const NOTES_LABEL: &str = "REVIEW NOTES:";
const REPORT_LABEL: &str = "IMPROVED REPORT:";
const SECOND_ITEM: &str = "2.";
const FIRST_ITEM: &str = "1.";

/// `2.` list marker at the start of a line
static SECOND_ITEM_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*2\.").expect("valid list marker pattern"));

/// Split a free-text response into its (report, notes) parts.
pub fn split_parts(response: &str) -> Option<(&str, &str)> {
    response.split_once(NOTES_LABEL).or_else(|| {
        let marker = SECOND_ITEM_LINE.find(response)?;
        Some((&response[..marker.start()], &response[marker.end()..]))
    })
}

/// Remove the list marker and label that introduce the report part.
fn strip_report_label(part: &str) -> &str {
    let part = part.trim();
    let part = part.strip_prefix(FIRST_ITEM).unwrap_or(part).trim_start();
    let part = part.strip_prefix(REPORT_LABEL).unwrap_or(part);
    // A trailing "2." line left behind when the notes label followed the marker.
    let part = part.trim_end();
    match part.strip_suffix(SECOND_ITEM) {
        Some(rest) if rest.is_empty() || rest.ends_with('\n') => rest.trim(),
        _ => part.trim(),
    }
}

/// Turn a free-text response into a [`ReviewResult`].
pub fn interpret_free_text(response: &str, draft: &str, today: NaiveDate) -> ReviewResult {
    let Some((report_part, notes_part)) = split_parts(response) else {
        return ReviewResult::fallback(draft, notes::UNSPLITTABLE);
    };

    let report = strip_report_label(report_part);
    let review_notes = notes_part.trim();
    let review_notes = if review_notes.is_empty() {
        notes::NO_NOTES
    } else {
        review_notes
    };

    if report.is_empty() {
        return ReviewResult::fallback(draft, format!("{}{}", review_notes, notes::NO_IMPROVED_REPORT));
    }

    let polished = polish(report, today);
    ReviewResult::from_fields(&polished, review_notes, draft, notes::NO_NOTES)
}
