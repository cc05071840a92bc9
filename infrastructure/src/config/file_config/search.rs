//! Search and fetch configuration from TOML (`[search]` and `[fetch]` sections)

use serde::{Deserialize, Serialize};

/// Raw search configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// "serper" or "serpapi"
    pub provider: String,
    pub serper_api_key: Option<String>,
    pub serpapi_api_key: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            provider: "serper".to_string(),
            serper_api_key: None,
            serpapi_api_key: None,
            timeout_seconds: 30,
        }
    }
}

/// Raw page fetch configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    pub timeout_seconds: u64,
    /// Characters kept in each source preview
    pub preview_chars: usize,
    pub user_agent: String,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            preview_chars: 300,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}
