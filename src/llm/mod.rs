//! Chat-completion client for OpenAI-compatible endpoints.

/// OpenAI-compatible chat-completions request plumbing.
pub mod openai;

pub use openai::{complete, ChatMessage, CompletionError, TEMPERATURE};
