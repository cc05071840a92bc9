//! Review domain
//!
//! Everything the review pass needs that does not touch the network: the
//! typed result, the raw response shapes an LLM may hand back, the strategy
//! chain that recovers a result from them, and the text polishing rules.
//!
//! # Response contracts
//!
//! A deployment picks exactly one [`ResponseContract`]:
//!
//! | Contract | Model is asked for | Interpreted by | Notes limit |
//! |----------|--------------------|----------------|-------------|
//! | `free-text` | `IMPROVED REPORT:` / `REVIEW NOTES:` parts | [`free_text::interpret_free_text`] + [`polish`] | truncated |
//! | `json-object` | `{"final_report", "review_notes"}` | [`normalizer::normalize`] | not re-truncated |

pub mod free_text;
pub mod literal;
pub mod normalizer;
pub mod polish;
pub mod value_objects;

pub use free_text::interpret_free_text;
pub use normalizer::{NormalizeStrategy, normalize, normalize_traced};
pub use polish::{DATE_MARKER, normalize_date_line, polish, strip_conversational_openings};
pub use value_objects::{RawResponse, ResponseContract, ReviewResult, notes};
