//! Google Gemini text generation adapter
//!
//! Talks to the `generateContent` REST endpoint directly over reqwest.

mod generator;
mod protocol;

pub use generator::GeminiTextGenerator;
