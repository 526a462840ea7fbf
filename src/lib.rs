//! chatwiz — reply suggestions for awkward chat moments.
//!
//! Takes a pasted incoming message plus a social scene and asks an
//! OpenAI-compatible chat-completion endpoint for three styled replies
//! (humorous, empathetic, curiosity-driven). One request, one response,
//! no state kept between invocations.

/// CLI subcommand implementations.
pub mod commands;
/// Secrets file loading and defaults.
pub mod config;
/// Chat-completion client.
pub mod llm;
/// Prompt template assembly.
pub mod prompt;
/// Social scene categories.
pub mod scene;
/// Completion text interpretation.
pub mod suggestion;
