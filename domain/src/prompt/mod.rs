//! Prompt domain
//!
//! Templates for generating prompts at each stage of the research pipeline.

mod template;

pub use template::PromptTemplate;
