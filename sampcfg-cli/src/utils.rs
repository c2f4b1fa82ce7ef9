//! Utility functions for CLI operations.

use crate::error::CliError;
use sampcfg::{Config, ConfigLoader};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Resolve the server directory, using CWD if not specified.
pub fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match dir {
        Some(dir) if !dir.is_dir() => Err(CliError::InvalidArguments(format!(
            "not a directory: {}",
            dir.display()
        ))),
        Some(dir) => Ok(dir),
        None => Ok(env::current_dir()?),
    }
}

/// Load the configuration for `dir`, with or without environment overrides.
pub fn load_config(dir: Option<PathBuf>, skip_env: bool) -> Result<Config, CliError> {
    let dir = resolve_dir(dir)?;
    let config = if skip_env {
        ConfigLoader::load_from_directory(&dir)?
    } else {
        ConfigLoader::load_from_environment(&dir)?
    };
    Ok(config)
}
