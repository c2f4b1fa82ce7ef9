//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CheckCommand, CompletionsCommand, EnvCommand, ShowCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for inspecting SA:MP server configuration.
#[derive(Parser)]
#[command(name = "sampcfg")]
#[command(version, about = "Inspect resolved SA:MP server configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved configuration
    Show(ShowCommand),

    /// List the SAMP_* environment variables and their state
    Env(EnvCommand),

    /// Check that all required fields are set
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
