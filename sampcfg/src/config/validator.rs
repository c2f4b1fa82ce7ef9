//! Required-field policy.
//!
//! Loading never rejects a config for missing values. Callers that want the
//! `required` flags in [`FIELDS`] enforced ask for it explicitly here,
//! usually just before generating `server.cfg`.

use crate::config::fields::{FieldSpec, FIELDS};
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Checks a loaded configuration against the declared required fields.
///
/// # Examples
///
/// ```
/// use sampcfg::config::{Config, ConfigValidator};
///
/// let config = Config {
///     rcon_password: Some("changeme".to_string()),
///     ..Default::default()
/// };
/// ConfigValidator::validate(&config).unwrap();
/// assert!(ConfigValidator::validate(&Config::default()).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Required fields that `config` leaves unset, in table order.
    #[must_use]
    pub fn missing_required(config: &Config) -> Vec<&'static FieldSpec> {
        FIELDS
            .iter()
            .filter(|spec| spec.required && !spec.is_set(config))
            .collect()
    }

    /// Fail if any required field is unset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRequired`] naming every missing field.
    pub fn validate(config: &Config) -> Result<()> {
        let missing = Self::missing_required(config);
        if missing.is_empty() {
            return Ok(());
        }

        Err(Error::MissingRequired {
            fields: missing.iter().map(|spec| spec.name.to_string()).collect(),
        })
    }
}
