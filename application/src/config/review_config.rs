//! Review pass parameters

use report_domain::ResponseContract;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bounded retry with exponential backoff.
///
/// `max_retries` counts total attempts: 3 means at most three calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Wait before the retry that follows failed attempt `attempt` (0-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.initial_delay
            .saturating_mul(2u32.saturating_pow(attempt))
    }
}

/// Review pass parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewConfig {
    pub retry: RetryPolicy,
    /// Notes cap applied under the free-text contract
    pub notes_char_limit: usize,
    /// Drafts shorter than this (trimmed, in chars) are returned unreviewed
    pub min_draft_length: usize,
    /// Responses shorter than this (trimmed, in chars) count as empty
    pub min_response_length: usize,
    pub contract: ResponseContract,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            notes_char_limit: 200,
            min_draft_length: 100,
            min_response_length: 100,
            contract: ResponseContract::default(),
        }
    }
}

impl ReviewConfig {
    // ==================== Builder Methods ====================

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_contract(mut self, contract: ResponseContract) -> Self {
        self.contract = contract;
        self
    }

    pub fn with_notes_char_limit(mut self, limit: usize) -> Self {
        self.notes_char_limit = limit;
        self
    }

    pub fn with_min_response_length(mut self, min: usize) -> Self {
        self.min_response_length = min;
        self
    }
}
