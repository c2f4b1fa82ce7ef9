//! Error types for the sampcfg library.
//!
//! Only structural failures (finding, reading or decoding the settings
//! file) and the explicit required-field check produce errors. Problems
//! with individual environment values are logged and never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a sampcfg error.
///
/// # Examples
///
/// ```
/// use sampcfg::{Error, Result};
///
/// fn example_operation() -> Result<i32> {
///     Ok(7777)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sampcfg library.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither `samp.json` nor `samp.yaml` exists in the directory.
    #[error("directory {} does not contain a samp.json or samp.yaml file", dir.display())]
    NoConfigFile {
        /// The directory that was searched.
        dir: PathBuf,
    },

    /// The settings file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON settings file is malformed.
    #[error("failed to parse {}: {source}", path.display())]
    ParseJson {
        /// The file that failed to decode.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The YAML settings file is malformed.
    #[error("failed to parse {}: {source}", path.display())]
    ParseYaml {
        /// The file that failed to decode.
        path: PathBuf,
        /// The underlying decoder error.
        #[source]
        source: serde_yaml::Error,
    },

    /// One or more required fields were left unset.
    #[error("missing required field(s): {}", fields.join(", "))]
    MissingRequired {
        /// External names of the missing fields.
        fields: Vec<String>,
    },
}

impl Error {
    /// Check if error indicates that no settings file was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use sampcfg::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NoConfigFile { dir: PathBuf::from("/srv/samp") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoConfigFile { .. })
    }

    /// Check if error came from decoding a settings file.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseJson { .. } | Self::ParseYaml { .. })
    }
}
