//! Login-wall heuristic for fetched page text.
//!
//! A page is flagged when it is short and contains one of a handful of
//! authentication or subscription phrases.

/// Pages at least this long are treated as real content regardless of phrasing.
pub const LOGIN_WALL_MAX_CHARS: usize = 1500;

const LOGIN_PHRASES: &[&str] = &[
    "sign in",
    "log in",
    "login to continue",
    "subscribe to continue",
    "create an account",
    "you must be logged in",
];

/// Whether `text` looks like a login or subscription interstitial.
pub fn looks_like_login_wall(text: &str) -> bool {
    if text.chars().count() >= LOGIN_WALL_MAX_CHARS {
        return false;
    }
    let lower = text.to_lowercase();
    LOGIN_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
