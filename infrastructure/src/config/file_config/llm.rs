//! LLM configuration from TOML (`[llm]` section)

use serde::{Deserialize, Serialize};

/// Raw LLM configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Gemini model name
    pub model: String,
    /// Sampling temperature sent with every request
    pub temperature: f32,
    /// Per-request timeout
    pub timeout_seconds: u64,
    /// API root, overridable for proxies and tests
    pub base_url: String,
    /// API key (usually supplied through `GEMINI_API_KEY`)
    pub api_key: Option<String>,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-pro".to_string(),
            temperature: 0.2,
            timeout_seconds: 60,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: None,
        }
    }
}
