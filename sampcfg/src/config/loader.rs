//! Settings file discovery and loading.
//!
//! A server directory holds either `samp.json` or `samp.yaml`. When both
//! exist the JSON file wins and the YAML file is never read.

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON settings file name.
pub const JSON_FILE: &str = "samp.json";

/// YAML settings file name.
pub const YAML_FILE: &str = "samp.yaml";

/// Serialization format of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `samp.json`
    Json,
    /// `samp.yaml`
    Yaml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Loads configuration from a server directory.
///
/// # Examples
///
/// ```no_run
/// use sampcfg::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_from_environment(Path::new("./server")).unwrap();
/// println!("port: {:?}", config.port);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from `dir`, then apply `SAMP_*` environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if no settings file exists in `dir` or the file
    /// cannot be read or parsed. Bad environment values are only logged.
    pub fn load_from_environment(dir: &Path) -> Result<Config> {
        let mut config = Self::load_from_directory(dir)?;
        EnvironmentConfig::apply_overrides(&mut config);
        Ok(config)
    }

    /// Load settings from `samp.json` or, failing that, `samp.yaml` in `dir`.
    ///
    /// The returned config remembers `dir` as its source directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoConfigFile`] if neither file exists, otherwise
    /// any read or parse error from the chosen file.
    pub fn load_from_directory(dir: &Path) -> Result<Config> {
        let (path, format) =
            Self::find_settings_file(dir).ok_or_else(|| Error::NoConfigFile {
                dir: dir.to_path_buf(),
            })?;

        log::debug!("loading {format} settings from {}", path.display());

        let mut config = match format {
            Format::Json => Self::load_json(&path)?,
            Format::Yaml => Self::load_yaml(&path)?,
        };
        config.dir = Some(dir.to_path_buf());
        Ok(config)
    }

    /// Locate the settings file in `dir`, preferring JSON.
    #[must_use]
    pub fn find_settings_file(dir: &Path) -> Option<(PathBuf, Format)> {
        let json = dir.join(JSON_FILE);
        if json.is_file() {
            return Some((json, Format::Json));
        }

        let yaml = dir.join(YAML_FILE);
        if yaml.is_file() {
            return Some((yaml, Format::Yaml));
        }

        None
    }

    /// Load and parse a JSON settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON is invalid.
    pub fn load_json(path: &Path) -> Result<Config> {
        let contents = Self::read(path)?;
        // A bare `null` document decodes to the empty configuration.
        serde_json::from_str::<Option<Config>>(&contents)
            .map(Option::unwrap_or_default)
            .map_err(|source| Error::ParseJson {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load and parse a YAML settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_yaml(path: &Path) -> Result<Config> {
        let contents = Self::read(path)?;
        // An empty YAML document is null, not a mapping.
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str::<Option<Config>>(&contents)
            .map(Option::unwrap_or_default)
            .map_err(|source| Error::ParseYaml {
                path: path.to_path_buf(),
                source,
            })
    }

    fn read(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })
    }
}
