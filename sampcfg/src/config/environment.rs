//! Environment variable handling for configuration overrides.
//!
//! Every scalar field in [`FIELDS`] can be overridden by a `SAMP_*`
//! variable named after its external name, e.g. `SAMP_PORT` or
//! `SAMP_RCON_PASSWORD`. List fields (gamemodes, filterscripts, plugins)
//! are file-only.
//!
//! Bad values never fail the overlay. An unparsable boolean is logged and
//! stored as `false`; an unparsable integer or float, or a float that is
//! not finite as `f32`, is logged and the field keeps whatever value it had.

use crate::config::fields::{FieldSlot, FieldSpec, FIELDS};
use crate::config::schema::Config;
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use sampcfg::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config);
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `SAMP_*` overrides from the process environment.
    pub fn apply_overrides(config: &mut Config) {
        Self::apply_overrides_with(config, read_var);
    }

    /// Apply overrides using `lookup` in place of the process environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use sampcfg::config::{Config, EnvironmentConfig};
    ///
    /// let mut config = Config {
    ///     port: Some(7777),
    ///     ..Default::default()
    /// };
    /// EnvironmentConfig::apply_overrides_with(&mut config, |name| {
    ///     (name == "SAMP_PORT").then(|| "9999".to_string())
    /// });
    /// assert_eq!(config.port, Some(9999));
    /// ```
    pub fn apply_overrides_with<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for spec in FIELDS {
            if let Some(value) = lookup(&spec.env_var()) {
                Self::apply_value(config, spec, &value);
            }
        }
    }

    /// Coerce `value` into the field described by `spec`.
    ///
    /// Returns `true` when the field was assigned. Rejected values are
    /// logged and leave the field as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use sampcfg::config::{fields, Config, EnvironmentConfig};
    ///
    /// let spec = fields::lookup("port").unwrap();
    /// let mut config = Config::default();
    /// assert!(!EnvironmentConfig::apply_value(&mut config, spec, "abc"));
    /// assert!(EnvironmentConfig::apply_value(&mut config, spec, "7777"));
    /// assert_eq!(config.port, Some(7777));
    /// ```
    pub fn apply_value(config: &mut Config, spec: &FieldSpec, value: &str) -> bool {
        let var = spec.env_var();
        match spec.slot(config) {
            FieldSlot::Str(slot) => {
                *slot = Some(value.to_string());
                true
            }
            FieldSlot::Bool(slot) => {
                let parsed = parse_bool(value).unwrap_or_else(|| {
                    log::warn!(
                        "environment variable '{var}' could not interpret value '{value}' as boolean, using false"
                    );
                    false
                });
                *slot = Some(parsed);
                true
            }
            FieldSlot::Int(slot) => match value.parse::<i64>() {
                Ok(parsed) => {
                    *slot = Some(parsed);
                    true
                }
                Err(e) => {
                    log::warn!(
                        "environment variable '{var}' could not interpret value '{value}' as integer: {e}"
                    );
                    false
                }
            },
            FieldSlot::Float(slot) => match value.parse::<f64>() {
                Ok(parsed) => {
                    #[allow(clippy::cast_possible_truncation)]
                    let narrowed = parsed as f32;
                    if narrowed.is_finite() {
                        *slot = Some(narrowed);
                        true
                    } else {
                        log::warn!(
                            "environment variable '{var}' value '{value}' is not a finite float, ignoring"
                        );
                        false
                    }
                }
                Err(e) => {
                    log::warn!(
                        "environment variable '{var}' could not interpret value '{value}' as float: {e}"
                    );
                    false
                }
            },
            FieldSlot::Strings(_) | FieldSlot::Plugins(_) => {
                log::info!(
                    "cannot set {} via environment variables yet, ignoring '{var}'",
                    spec.name
                );
                false
            }
        }
    }
}

/// Read a variable from the process environment.
///
/// A value that is not valid UTF-8 is logged and decoded lossily rather
/// than treated as unset.
#[must_use]
pub fn read_var(name: &str) -> Option<String> {
    let value = env::var_os(name)?;
    Some(value.into_string().unwrap_or_else(|raw| {
        let lossy = raw.to_string_lossy().into_owned();
        log::warn!("environment variable '{name}' is not valid UTF-8, using '{lossy}'");
        lossy
    }))
}

/// Parse a boolean value from a string.
///
/// Accepts `1`/`t`/`true` and `0`/`f`/`false`, case-insensitive. Anything
/// else is rejected.
///
/// # Examples
///
/// ```
/// use sampcfg::config::environment::parse_bool;
///
/// assert_eq!(parse_bool("TRUE"), Some(true));
/// assert_eq!(parse_bool("f"), Some(false));
/// assert_eq!(parse_bool("yes"), None);
/// ```
#[must_use]
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fields::lookup;
    use crate::config::schema::Plugin;
    use serial_test::serial;
    use std::collections::HashMap;

    fn apply(config: &mut Config, vars: &[(&str, &str)]) {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        EnvironmentConfig::apply_overrides_with(config, |name| vars.get(name).cloned());
    }

    #[test]
    fn test_parse_bool_true_variants() {
        for s in ["1", "t", "T", "true", "TRUE", "True"] {
            assert_eq!(parse_bool(s), Some(true), "{s}");
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for s in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(parse_bool(s), Some(false), "{s}");
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        for s in ["yes", "no", "on", "off", "", "2", " true"] {
            assert_eq!(parse_bool(s), None, "{s:?}");
        }
    }

    #[test]
    fn test_no_vars_leaves_config_untouched() {
        let mut config = Config {
            port: Some(7777),
            ..Default::default()
        };
        let before = config.clone();
        apply(&mut config, &[]);
        assert_eq!(config, before);
    }

    #[test]
    fn test_int_override() {
        let mut config = Config {
            port: Some(7777),
            ..Default::default()
        };
        apply(&mut config, &[("SAMP_PORT", "9999")]);
        assert_eq!(config.port, Some(9999));
    }

    #[test]
    fn test_int_override_sets_absent_field() {
        let mut config = Config::default();
        apply(&mut config, &[("SAMP_MAXNPC", "-3"), ("SAMP_SLEEP", "+10")]);
        assert_eq!(config.maxnpc, Some(-3));
        assert_eq!(config.sleep, Some(10));
    }

    #[test]
    fn test_invalid_int_keeps_previous_value() {
        let mut config = Config {
            maxplayers: Some(50),
            ..Default::default()
        };
        apply(&mut config, &[("SAMP_MAXPLAYERS", "notanumber")]);
        assert_eq!(config.maxplayers, Some(50));
    }

    #[test]
    fn test_invalid_int_keeps_field_absent() {
        let mut config = Config::default();
        apply(&mut config, &[("SAMP_PORT", "77.77")]);
        assert!(config.port.is_none());
    }

    #[test]
    fn test_int_beyond_32_bits() {
        let mut config = Config::default();
        apply(&mut config, &[("SAMP_CONNSEEDTIME", "99999999999")]);
        assert_eq!(config.connseedtime, Some(99_999_999_999));
    }

    #[test]
    fn test_out_of_range_int_skipped() {
        let mut config = Config {
            connseedtime: Some(300_000),
            ..Default::default()
        };
        apply(&mut config, &[("SAMP_CONNSEEDTIME", "99999999999999999999")]);
        assert_eq!(config.connseedtime, Some(300_000));
    }

    #[test]
    fn test_string_override_is_verbatim() {
        let mut config = Config::default();
        apply(
            &mut config,
            &[
                ("SAMP_RCON_PASSWORD", "  s3cr3t, with spaces "),
                ("SAMP_HOSTNAME", ""),
            ],
        );
        assert_eq!(
            config.rcon_password.as_deref(),
            Some("  s3cr3t, with spaces ")
        );
        assert_eq!(config.hostname.as_deref(), Some(""));
    }

    #[test]
    fn test_bool_override() {
        let mut config = Config {
            lanmode: Some(false),
            ..Default::default()
        };
        apply(&mut config, &[("SAMP_LANMODE", "TRUE"), ("SAMP_QUERY", "0")]);
        assert_eq!(config.lanmode, Some(true));
        assert_eq!(config.query, Some(false));
    }

    #[test]
    fn test_invalid_bool_becomes_false() {
        let mut config = Config {
            announce: Some(true),
            ..Default::default()
        };
        apply(&mut config, &[("SAMP_ANNOUNCE", "yes")]);
        assert_eq!(config.announce, Some(false));

        let mut absent = Config::default();
        apply(&mut absent, &[("SAMP_ANNOUNCE", "yes")]);
        assert_eq!(absent.announce, Some(false));
    }

    #[test]
    fn test_float_override() {
        let mut config = Config::default();
        apply(&mut config, &[("SAMP_STREAM_DISTANCE", "300.5")]);
        assert_eq!(config.stream_distance, Some(300.5));
    }

    #[test]
    fn test_invalid_float_keeps_previous_value() {
        let mut config = Config {
            stream_distance: Some(200.0),
            ..Default::default()
        };
        apply(&mut config, &[("SAMP_STREAM_DISTANCE", "far")]);
        assert_eq!(config.stream_distance, Some(200.0));
    }

    #[test]
    fn test_float_narrowing_rounds() {
        let mut config = Config::default();
        apply(&mut config, &[("SAMP_STREAM_DISTANCE", "0.1")]);
        assert_eq!(config.stream_distance, Some(0.1_f32));
        assert_ne!(f64::from(0.1_f32), 0.1_f64);
    }

    #[test]
    fn test_float_overflowing_f32_skipped() {
        let mut config = Config {
            stream_distance: Some(200.0),
            ..Default::default()
        };
        apply(&mut config, &[("SAMP_STREAM_DISTANCE", "1e40")]);
        assert_eq!(config.stream_distance, Some(200.0));
    }

    #[test]
    fn test_non_finite_float_skipped() {
        for value in ["nan", "NaN", "inf", "-infinity"] {
            let mut config = Config::default();
            apply(&mut config, &[("SAMP_STREAM_DISTANCE", value)]);
            assert!(config.stream_distance.is_none(), "{value}");
        }
    }

    #[test]
    fn test_apply_value_reports_assignment() {
        let port = lookup("port").unwrap();
        let announce = lookup("announce").unwrap();
        let gamemodes = lookup("gamemodes").unwrap();
        let distance = lookup("stream_distance").unwrap();

        let mut config = Config::default();
        assert!(!EnvironmentConfig::apply_value(&mut config, port, "abc"));
        assert!(config.port.is_none());
        assert!(EnvironmentConfig::apply_value(&mut config, port, "7777"));
        assert!(EnvironmentConfig::apply_value(&mut config, announce, "yes"));
        assert!(!EnvironmentConfig::apply_value(&mut config, gamemodes, "x"));
        assert!(!EnvironmentConfig::apply_value(&mut config, distance, "inf"));
        assert_eq!(config.port, Some(7777));
        assert_eq!(config.announce, Some(false));
    }

    #[test]
    fn test_list_fields_not_overridden() {
        let mut config = Config {
            gamemodes: vec!["grandlarc".to_string()],
            plugins: vec![Plugin::named("streamer")],
            ..Default::default()
        };
        apply(
            &mut config,
            &[
                ("SAMP_GAMEMODES", "rivershell"),
                ("SAMP_FILTERSCRIPTS", "admin"),
                ("SAMP_PLUGINS", "mysql"),
            ],
        );
        assert_eq!(config.gamemodes, vec!["grandlarc".to_string()]);
        assert!(config.filterscripts.is_empty());
        assert_eq!(config.plugins, vec![Plugin::named("streamer")]);
    }

    #[test]
    fn test_bookkeeping_fields_have_no_variables() {
        let mut config = Config::default();
        apply(&mut config, &[("SAMP_DIR", "/tmp"), ("SAMP_ECHO", "hi")]);
        assert!(config.dir.is_none());
        assert!(config.echo.is_none());
    }

    #[test]
    fn test_lowercase_variable_names_ignored() {
        let mut config = Config::default();
        apply(&mut config, &[("samp_port", "1234"), ("SAMP_port", "1234")]);
        assert!(config.port.is_none());
    }

    #[test]
    fn test_overlay_is_idempotent() {
        let vars = [
            ("SAMP_PORT", "9999"),
            ("SAMP_ANNOUNCE", "yes"),
            ("SAMP_MAXPLAYERS", "bad"),
            ("SAMP_HOSTNAME", "Twice"),
            ("SAMP_STREAM_DISTANCE", "150"),
        ];
        let mut once = Config {
            maxplayers: Some(32),
            ..Default::default()
        };
        apply(&mut once, &vars);

        let mut twice = once.clone();
        apply(&mut twice, &vars);

        assert_eq!(once, twice);
    }

    #[test]
    #[serial]
    fn test_apply_overrides_reads_process_environment() {
        let saved = env::var("SAMP_PORT").ok();

        env::set_var("SAMP_PORT", "9999");
        let mut config = Config {
            port: Some(7777),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config);
        assert_eq!(config.port, Some(9999));

        match saved {
            Some(val) => env::set_var("SAMP_PORT", val),
            None => env::remove_var("SAMP_PORT"),
        }
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_non_utf8_variable_is_decoded_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let saved_hostname = env::var_os("SAMP_HOSTNAME");
        let saved_port = env::var_os("SAMP_PORT");

        env::set_var("SAMP_HOSTNAME", OsStr::from_bytes(b"caf\xe9"));
        env::set_var("SAMP_PORT", OsStr::from_bytes(b"77\xff"));
        assert_eq!(read_var("SAMP_HOSTNAME").as_deref(), Some("caf\u{fffd}"));

        let mut config = Config {
            port: Some(7777),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config);
        assert_eq!(config.hostname.as_deref(), Some("caf\u{fffd}"));
        assert_eq!(config.port, Some(7777));

        for (name, saved) in [("SAMP_HOSTNAME", saved_hostname), ("SAMP_PORT", saved_port)] {
            match saved {
                Some(val) => env::set_var(name, val),
                None => env::remove_var(name),
            }
        }
    }
}
