//! LLM module for notesmith
//!
//! Sends note-generation prompts to the Gemini API.

mod client;
mod gemini;

pub use client::{build_provider, GenerateRequest, LlmProvider};
pub use gemini::GeminiClient;
