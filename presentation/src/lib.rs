//! Presentation layer for research-report
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the HTTP API.

pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use http::{ApiError, AppState, router, serve};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
