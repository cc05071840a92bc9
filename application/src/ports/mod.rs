//! Port definitions (interfaces for external adapters)
//!
//! Ports define how the application layer interacts with external systems.
//! Adapters in the infrastructure layer implement these ports.

pub mod content_fetcher;
pub mod delay;
pub mod progress;
pub mod search_provider;
pub mod text_generator;
