//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_with_retry;
pub mod review_report;
pub mod run_research;

#[cfg(test)]
pub(crate) mod testing;
