//! Text polishing rules for accepted report text.
//!
//! Two order-sensitive transforms: conversational openings are stripped
//! first, then the date line is rebuilt so that exactly one
//! [`DATE_MARKER`] line sits directly below the title.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Bold marker that starts the report's date line.
pub const DATE_MARKER: &str = "**Date:**";

/// Date format used on the date line, e.g. `October 16, 2026`.
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// A conversational opening at the start of a line, with one optional
/// trailing punctuation mark and any following spaces.
static OPENING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:of course|certainly|here is|this is|i have|i've|below is|attached is)\b[.,!:;]?[ \t]*",
    )
    .expect("valid opening pattern")
});

/// Remove conversational openings from line starts until none remain.
pub fn strip_conversational_openings(text: &str) -> String {
    let mut current = text.to_string();
    while OPENING.is_match(&current) {
        current = OPENING.replace_all(&current, "").into_owned();
    }
    current.trim().to_string()
}

/// Format the date line for `today`.
pub fn date_line(today: NaiveDate) -> String {
    format!("{} {}", DATE_MARKER, today.format(DATE_FORMAT))
}

/// Rebuild the date line: drop every existing one and insert a fresh line
/// after the first non-blank line (or first, when the text is blank).
pub fn normalize_date_line(text: &str, today: NaiveDate) -> String {
    let fresh = date_line(today);
    let mut lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim_start().starts_with(DATE_MARKER))
        .collect();

    match lines.iter().position(|line| !line.trim().is_empty()) {
        Some(title) => lines.insert(title + 1, &fresh),
        None => lines.insert(0, &fresh),
    }

    lines.join("\n")
}

/// Apply both polishing rules in order.
pub fn polish(text: &str, today: NaiveDate) -> String {
    normalize_date_line(&strip_conversational_openings(text), today)
}
