//! Application-level configuration.
//!
//! [`ReviewConfig`] controls the review pass: thresholds, the retry policy
//! and the response contract the reviewer model is held to.

pub mod review_config;

pub use review_config::{RetryPolicy, ReviewConfig};
