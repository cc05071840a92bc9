//! Review Report use case
//!
//! Runs the final review pass over a draft report:
//!
//! ```text
//! Precheck ──► Generating ──► Normalizing ──► Done
//!    │             │               │
//!    └─────────────┴───────────────┴──► Fallback (draft + note)
//! ```
//!
//! The pass never fails. Every degraded path returns the draft with a note
//! explaining why, including a panic raised by any collaborator.

use super::generate_with_retry::RetryingGenerator;
use crate::config::ReviewConfig;
use chrono::NaiveDate;
use futures::FutureExt;
use report_domain::core::string::preview;
use report_domain::review::polish::DATE_FORMAT;
use report_domain::review::{interpret_free_text, normalize_traced, notes};
use report_domain::{PromptTemplate, RawResponse, ResponseContract, ReviewResult};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error, info, warn};

const RESPONSE_LOG_PREVIEW: usize = 500;

/// Use case for reviewing and polishing a draft report
pub struct ReviewReportUseCase {
    generator: RetryingGenerator,
    config: ReviewConfig,
}

impl ReviewReportUseCase {
    pub fn new(generator: RetryingGenerator, config: ReviewConfig) -> Self {
        Self { generator, config }
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Review `draft`, dating the result with `today`.
    ///
    /// Notes are capped per the configured contract on every path,
    /// the panic fallback included.
    pub async fn execute(&self, draft: &str, today: NaiveDate) -> ReviewResult {
        let result = match AssertUnwindSafe(self.review(draft, today)).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                error!("Review aborted: {}", reason);
                ReviewResult::fallback(draft, notes::reviewer_error(&reason))
            }
        };

        match self.config.contract.notes_limit(self.config.notes_char_limit) {
            Some(limit) => result.with_notes_limit(limit),
            None => result,
        }
    }

    async fn review(&self, draft: &str, today: NaiveDate) -> ReviewResult {
        // Precheck
        let draft_chars = draft.trim().chars().count();
        if draft_chars < self.config.min_draft_length {
            warn!(
                "Draft too short for review ({} chars, need {})",
                draft_chars, self.config.min_draft_length
            );
            return ReviewResult::fallback(draft, notes::DRAFT_TOO_SHORT);
        }

        // Generating
        let contract = self.config.contract;
        let current_date = today.format(DATE_FORMAT).to_string();
        info!("Reviewing draft ({} chars, contract: {})", draft_chars, contract);

        let prompt = PromptTemplate::review(contract, draft, &current_date);
        let response = self.generator.generate(&prompt).await;

        let response_chars = response.trim().chars().count();
        if response_chars < self.config.min_response_length {
            warn!(
                "Reviewer response too short ({} chars); keeping draft",
                response_chars
            );
            return ReviewResult::fallback(draft, notes::EMPTY_RESPONSE);
        }
        debug!(
            "Raw review response: {}",
            preview(&response, RESPONSE_LOG_PREVIEW)
        );

        // Normalizing
        let result = match contract {
            ResponseContract::JsonObject => {
                let (result, strategy) = normalize_traced(&RawResponse::from(response), draft);
                debug!("Review response recovered by {} strategy", strategy.name());
                result
            }
            ResponseContract::FreeText => interpret_free_text(&response, draft, today),
        };

        info!(
            "Review complete ({} chars, notes: {} chars)",
            result.final_report.chars().count(),
            result.review_notes.chars().count()
        );
        result
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
