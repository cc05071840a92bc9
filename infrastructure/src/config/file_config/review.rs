//! Review configuration from TOML (`[review]` section)

use crate::config::ConfigError;
use report_application::{RetryPolicy, ReviewConfig};
use report_domain::ResponseContract;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw review configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReviewConfig {
    /// Total generation attempts
    pub max_retries: u32,
    /// Wait before the first retry; doubles on each further retry
    pub initial_delay_ms: u64,
    pub notes_char_limit: usize,
    pub min_draft_length: usize,
    pub min_response_length: usize,
    /// "free-text" or "json-object"
    pub contract: String,
}

impl Default for FileReviewConfig {
    fn default() -> Self {
        let defaults = ReviewConfig::default();
        Self {
            max_retries: defaults.retry.max_retries,
            initial_delay_ms: defaults.retry.initial_delay.as_millis() as u64,
            notes_char_limit: defaults.notes_char_limit,
            min_draft_length: defaults.min_draft_length,
            min_response_length: defaults.min_response_length,
            contract: defaults.contract.to_string(),
        }
    }
}

impl FileReviewConfig {
    /// Convert to the application-layer review parameters
    pub fn to_review_config(&self) -> Result<ReviewConfig, ConfigError> {
        let contract: ResponseContract = self.contract.parse()?;
        Ok(ReviewConfig {
            retry: RetryPolicy {
                max_retries: self.max_retries,
                initial_delay: Duration::from_millis(self.initial_delay_ms),
            },
            notes_char_limit: self.notes_char_limit,
            min_draft_length: self.min_draft_length,
            min_response_length: self.min_response_length,
            contract,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_application_defaults() {
        let config = FileReviewConfig::default().to_review_config().unwrap();
        assert_eq!(config, ReviewConfig::default());
    }

    #[test]
    fn test_json_contract_and_delay() {
        let file = FileReviewConfig {
            contract: "json".to_string(),
            initial_delay_ms: 250,
            ..Default::default()
        };
        let config = file.to_review_config().unwrap();
        assert_eq!(config.contract, ResponseContract::JsonObject);
        assert_eq!(config.retry.initial_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_unknown_contract_rejected() {
        let file = FileReviewConfig {
            contract: "xml".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            file.to_review_config(),
            Err(ConfigError::InvalidValue(_))
        ));
    }
}
