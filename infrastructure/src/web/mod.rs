//! Web page fetching

mod fetch;

pub use fetch::{HtmlContentFetcher, html_to_text};
