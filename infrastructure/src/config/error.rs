//! Configuration errors

use report_domain::DomainError;
use thiserror::Error;

/// Errors raised while loading, validating or applying configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error(transparent)]
    InvalidValue(#[from] DomainError),

    #[error("Unknown search provider: {0} (expected serper or serpapi)")]
    UnknownSearchProvider(String),

    #[error("{0} cannot be 0")]
    ZeroTimeout(&'static str),

    #[error("{0} is not set; add it to the config file or export it")]
    MissingApiKey(&'static str),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
