//! LLM integration for climateqa: chat-completions client and answer generation.

mod ai_types;
mod client;
pub mod error;
mod generator;

mod generator_tests;

pub use client::{truncate, LlmClient};
pub use error::LlmError;
pub use generator::{
    build_prompt, AnswerGenerator, DEFAULT_FALLBACK_MODEL, DEFAULT_PRIMARY_MODEL,
};
