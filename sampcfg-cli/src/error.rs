//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use sampcfg::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// The directory has no `samp.json` or `samp.yaml`.
    NoSettingsFile(LibError),

    /// The settings file could not be decoded.
    Config(LibError),

    /// Semantic failure (e.g., required field missing) - exit code 1.
    SemanticFailure(String),

    /// The resolved configuration could not be rendered.
    Render(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., required field missing)
    /// - 3: No settings file found
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error, or output rendering failed
    /// - 7: Settings file could not be parsed
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::NoSettingsFile(_) => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Library(lib_err) => match lib_err {
                LibError::ReadFile { .. } => 5,
                LibError::MissingRequired { .. } => 1,
                _ => 6,
            },
            CliError::Config(_) => 7,
            CliError::Render(_) => 6,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) | CliError::NoSettingsFile(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(e) => write!(f, "Configuration error: {e}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
            CliError::Render(msg) => write!(f, "Output error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) | CliError::NoSettingsFile(e) | CliError::Config(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if e.is_not_found() {
            CliError::NoSettingsFile(e)
        } else if e.is_parse_error() {
            CliError::Config(e)
        } else {
            CliError::Library(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
