//! Core domain concepts shared across all subdomains.
//!
//! - [`topic::Topic`]: a validated research topic
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: character-safe truncation helpers

pub mod error;
pub mod string;
pub mod topic;
