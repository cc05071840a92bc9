//! Retrying generation
//!
//! Wraps a [`TextGenerator`] with bounded retries and exponential backoff.
//! Persistent failure is absorbed into the empty string.

use crate::config::RetryPolicy;
use crate::ports::delay::Delay;
use crate::ports::text_generator::TextGenerator;
use std::sync::Arc;
use tracing::{error, warn};

/// Text generator that never fails.
pub struct RetryingGenerator {
    inner: Arc<dyn TextGenerator>,
    delay: Arc<dyn Delay>,
    policy: RetryPolicy,
}

impl RetryingGenerator {
    pub fn new(inner: Arc<dyn TextGenerator>, delay: Arc<dyn Delay>, policy: RetryPolicy) -> Self {
        Self {
            inner,
            delay,
            policy,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Generate text for `prompt`, returning `""` once every attempt has failed.
    pub async fn generate(&self, prompt: &str) -> String {
        let attempts = self.policy.max_retries;

        for attempt in 0..attempts {
            match self.inner.generate(prompt).await {
                Ok(text) => return text,
                Err(e) if attempt + 1 < attempts => {
                    let wait = self.policy.delay_for(attempt);
                    warn!(
                        "Generation attempt {}/{} failed: {}. Retrying in {:?}",
                        attempt + 1,
                        attempts,
                        e,
                        wait
                    );
                    self.delay.sleep(wait).await;
                }
                Err(e) => {
                    error!("Generation failed after {} attempts: {}", attempts, e);
                }
            }
        }

        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::text_generator::GenerationError;
    use crate::use_cases::testing::{RecordingDelay, ScriptedGenerator};
    use std::time::Duration;

    fn retrying(
        generator: Arc<ScriptedGenerator>,
        delay: Arc<RecordingDelay>,
        max_retries: u32,
    ) -> RetryingGenerator {
        RetryingGenerator::new(
            generator,
            delay,
            RetryPolicy {
                max_retries,
                initial_delay: Duration::from_secs(1),
            },
        )
    }

    #[tokio::test]
    async fn test_exhaustion_returns_empty_after_exact_attempts() {
        let generator = Arc::new(ScriptedGenerator::failing());
        let delay = Arc::new(RecordingDelay::default());

        let text = retrying(generator.clone(), delay.clone(), 3)
            .generate("prompt")
            .await;

        assert_eq!(text, "");
        assert_eq!(generator.calls(), 3);
        assert_eq!(
            delay.waits(),
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
    }

    #[tokio::test]
    async fn test_success_after_transient_failure() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Err(GenerationError::Quota("rate limited".to_string())),
            Ok("reviewed".to_string()),
        ]));
        let delay = Arc::new(RecordingDelay::default());

        let text = retrying(generator.clone(), delay.clone(), 3)
            .generate("prompt")
            .await;

        assert_eq!(text, "reviewed");
        assert_eq!(generator.calls(), 2);
        assert_eq!(delay.waits(), vec![Duration::from_secs(1)]);
    }

    #[tokio::test]
    async fn test_zero_attempts_makes_no_call() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok("unused".to_string())]));
        let delay = Arc::new(RecordingDelay::default());

        let text = retrying(generator.clone(), delay.clone(), 0)
            .generate("prompt")
            .await;

        assert_eq!(text, "");
        assert_eq!(generator.calls(), 0);
        assert!(delay.waits().is_empty());
    }

    #[tokio::test]
    async fn test_empty_reply_is_not_retried() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Ok(String::new())]));
        let delay = Arc::new(RecordingDelay::default());

        let text = retrying(generator.clone(), delay, 3).generate("prompt").await;

        assert_eq!(text, "");
        assert_eq!(generator.calls(), 1);
    }
}
