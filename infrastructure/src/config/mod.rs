//! Configuration file loading for research-report
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Well-known environment keys (`GEMINI_API_KEY`, `SERPER_API_KEY`, ...)
//! 2. `REPORT_`-prefixed environment variables (`REPORT_REVIEW__MAX_RETRIES=5`)
//! 3. `--config <path>` specified file
//! 4. Project root: `./research-report.toml`
//! 5. Global: `$XDG_CONFIG_HOME/research-report/config.toml`
//! 6. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    FileConfig, FileFetchConfig, FileLlmConfig, FileLoggingConfig, FileReviewConfig,
    FileSearchConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
