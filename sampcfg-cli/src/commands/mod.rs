//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: Print the resolved configuration
//! - `env`: List environment variables and where each value comes from
//! - `check`: Check that required fields are set
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod env;
pub mod show;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use env::EnvCommand;
pub use show::ShowCommand;
