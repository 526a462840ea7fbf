/// Secrets validation subcommand.
pub mod config;
/// Reply-suggestion subcommand.
pub mod suggest;
