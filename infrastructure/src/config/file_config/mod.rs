//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; conversion to typed values happens in
//! [`FileConfig::validate`] and the per-section `to_*` helpers.

mod llm;
mod review;
mod search;
mod server;

pub use llm::FileLlmConfig;
pub use review::FileReviewConfig;
pub use search::{FileFetchConfig, FileSearchConfig};
pub use server::{FileLoggingConfig, FileServerConfig};

use super::ConfigError;
use crate::search::SearchProviderKind;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini model settings
    pub llm: FileLlmConfig,
    /// Search provider selection and keys
    pub search: FileSearchConfig,
    /// Page fetching
    pub fetch: FileFetchConfig,
    /// Review pass
    pub review: FileReviewConfig,
    /// HTTP server
    pub server: FileServerConfig,
    /// Log file
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.review.to_review_config()?;
        self.search.provider.parse::<SearchProviderKind>()?;
        if self.llm.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout("llm.timeout_seconds"));
        }
        if self.fetch.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout("fetch.timeout_seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_domain::ResponseContract;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[llm]
model = "gemini-2.5-flash"
temperature = 0.4

[search]
provider = "serpapi"

[fetch]
preview_chars = 500

[review]
max_retries = 5
contract = "json-object"

[server]
bind = "127.0.0.1:9000"

[logging]
file = "app.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.model, "gemini-2.5-flash");
        assert_eq!(config.llm.timeout_seconds, 60);
        assert_eq!(config.search.provider, "serpapi");
        assert_eq!(config.fetch.preview_chars, 500);
        assert_eq!(config.fetch.timeout_seconds, 10);
        assert_eq!(config.review.max_retries, 5);
        assert_eq!(
            config.review.to_review_config().unwrap().contract,
            ResponseContract::JsonObject
        );
        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.logging.file.as_deref(), Some(std::path::Path::new("app.log")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[review]
notes_char_limit = 120
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.review.notes_char_limit, 120);
        // Defaults should apply
        assert_eq!(config.review.max_retries, 3);
        assert_eq!(config.llm.model, "gemini-2.5-pro");
        assert_eq!(config.server.bind, "0.0.0.0:8000");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_provider() {
        let mut config = FileConfig::default();
        config.search.provider = "bing".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownSearchProvider(p)) if p == "bing"
        ));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = FileConfig::default();
        config.llm.timeout_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroTimeout("llm.timeout_seconds"))
        ));
    }
}
