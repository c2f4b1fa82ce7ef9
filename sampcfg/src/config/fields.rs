//! Field metadata for every externally settable configuration value.
//!
//! [`FIELDS`] is the single table that ties an external name to its kind,
//! its `server.cfg` default and a typed accessor into [`Config`]. The
//! environment overlay walks this table instead of inspecting the struct
//! at runtime, and a `server.cfg` writer can walk it to emit defaults for
//! absent values.

use crate::config::schema::{Config, Plugin};
use std::fmt;

/// Prefix shared by all configuration environment variables.
pub const ENV_PREFIX: &str = "SAMP_";

/// Declared type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Optional string.
    Str,
    /// Optional signed integer.
    Int,
    /// Optional boolean.
    Bool,
    /// Optional floating point.
    Float,
    /// Sequence of strings.
    Strings,
    /// Sequence of plugin descriptors.
    Plugins,
}

impl FieldKind {
    /// Whether the overlay can set this kind from an environment variable.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Str | Self::Int | Self::Bool | Self::Float)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => write!(f, "string"),
            Self::Int => write!(f, "integer"),
            Self::Bool => write!(f, "boolean"),
            Self::Float => write!(f, "float"),
            Self::Strings => write!(f, "string list"),
            Self::Plugins => write!(f, "plugin list"),
        }
    }
}

/// Mutable view of one field's storage, typed by its kind.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    /// Optional string storage.
    Str(&'a mut Option<String>),
    /// Optional integer storage.
    Int(&'a mut Option<i64>),
    /// Optional boolean storage.
    Bool(&'a mut Option<bool>),
    /// Optional float storage.
    Float(&'a mut Option<f32>),
    /// String list storage.
    Strings(&'a mut Vec<String>),
    /// Plugin list storage.
    Plugins(&'a mut Vec<Plugin>),
}

/// Metadata for a single settable field.
#[derive(Clone, Copy)]
pub struct FieldSpec {
    /// External name used in the settings file.
    pub name: &'static str,
    /// Declared kind.
    pub kind: FieldKind,
    /// Key written to `server.cfg` when it differs from `name`.
    pub cfg_name: Option<&'static str>,
    /// Whether list entries are written as numbered keys (`gamemode0`, ...).
    pub numbered: bool,
    /// `server.cfg` value used when the field is absent.
    pub default: Option<&'static str>,
    /// Declared as required. Only [`ConfigValidator`](crate::config::ConfigValidator) acts on it.
    pub required: bool,
    /// Whether the field is written to `server.cfg` at all.
    pub server_cfg: bool,
    accessor: for<'a> fn(&'a mut Config) -> FieldSlot<'a>,
    probe: fn(&Config) -> bool,
}

impl FieldSpec {
    const fn new(
        name: &'static str,
        kind: FieldKind,
        accessor: for<'a> fn(&'a mut Config) -> FieldSlot<'a>,
        probe: fn(&Config) -> bool,
    ) -> Self {
        Self {
            name,
            kind,
            cfg_name: None,
            numbered: false,
            default: None,
            required: false,
            server_cfg: true,
            accessor,
            probe,
        }
    }

    const fn cfg(self, key: &'static str) -> Self {
        Self {
            cfg_name: Some(key),
            ..self
        }
    }

    const fn numbered(self) -> Self {
        Self {
            numbered: true,
            ..self
        }
    }

    const fn default_value(self, value: &'static str) -> Self {
        Self {
            default: Some(value),
            ..self
        }
    }

    const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    const fn sampctl_only(self) -> Self {
        Self {
            server_cfg: false,
            ..self
        }
    }

    /// Environment variable consulted for this field.
    ///
    /// # Examples
    ///
    /// ```
    /// use sampcfg::config::fields;
    ///
    /// let spec = fields::lookup("rcon_password").unwrap();
    /// assert_eq!(spec.env_var(), "SAMP_RCON_PASSWORD");
    /// ```
    #[must_use]
    pub fn env_var(&self) -> String {
        env_var_name(self.name)
    }

    /// Key used for this field in `server.cfg`.
    #[must_use]
    pub fn cfg_key(&self) -> &'static str {
        self.cfg_name.unwrap_or(self.name)
    }

    /// Borrow the field's storage inside `config`.
    pub fn slot<'a>(&self, config: &'a mut Config) -> FieldSlot<'a> {
        (self.accessor)(config)
    }

    /// Whether `config` holds a value for this field.
    ///
    /// Lists count as set when they are non-empty.
    #[must_use]
    pub fn is_set(&self, config: &Config) -> bool {
        (self.probe)(config)
    }
}

trait Presence {
    fn is_present(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("cfg_name", &self.cfg_name)
            .field("numbered", &self.numbered)
            .field("default", &self.default)
            .field("required", &self.required)
            .field("server_cfg", &self.server_cfg)
            .finish_non_exhaustive()
    }
}

/// Derive the environment variable name for an external field name.
///
/// # Examples
///
/// ```
/// use sampcfg::config::fields::env_var_name;
///
/// assert_eq!(env_var_name("maxplayers"), "SAMP_MAXPLAYERS");
/// assert_eq!(env_var_name("stream_rate"), "SAMP_STREAM_RATE");
/// ```
#[must_use]
pub fn env_var_name(name: &str) -> String {
    format!("{ENV_PREFIX}{}", name.to_uppercase())
}

/// Find a field by external name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

/// Build a [`FieldSpec`]. The slot variant must match the struct field's type.
macro_rules! field {
    ($field:ident, $kind:ident) => {{
        fn accessor(config: &mut Config) -> FieldSlot<'_> {
            FieldSlot::$kind(&mut config.$field)
        }
        fn probe(config: &Config) -> bool {
            config.$field.is_present()
        }
        FieldSpec::new(stringify!($field), FieldKind::$kind, accessor, probe)
    }};
}

/// Every settable field, in declaration order.
pub static FIELDS: &[FieldSpec] = &[
    // sampctl-only
    field!(version, Str).sampctl_only(),
    field!(endpoint, Str).sampctl_only(),
    // Core properties
    field!(gamemodes, Strings).cfg("gamemode").numbered(),
    field!(filterscripts, Strings),
    field!(plugins, Plugins),
    field!(rcon_password, Str).required(),
    field!(port, Int).default_value("8192"),
    field!(hostname, Str).default_value("SA-MP Server"),
    field!(maxplayers, Int).default_value("50"),
    field!(language, Str).default_value("-"),
    field!(mapname, Str).default_value("San Andreas"),
    field!(weburl, Str).default_value("www.sa-mp.com"),
    field!(gamemodetext, Str).default_value("Unknown"),
    // Network and technical config
    field!(bind, Str),
    field!(password, Str),
    field!(announce, Bool).default_value("1"),
    field!(lanmode, Bool).default_value("0"),
    field!(query, Bool).default_value("1"),
    field!(rcon, Bool).default_value("0"),
    field!(logqueries, Bool).default_value("0"),
    field!(sleep, Int).default_value("5"),
    field!(maxnpc, Int).default_value("0"),
    // Rates and performance
    field!(stream_rate, Int).default_value("1000"),
    field!(stream_distance, Float).default_value("200.0"),
    field!(onfoot_rate, Int).default_value("30"),
    field!(incar_rate, Int).default_value("30"),
    field!(weapon_rate, Int).default_value("30"),
    field!(chatlogging, Bool).default_value("1"),
    field!(timestamp, Bool).default_value("1"),
    field!(nosign, Str),
    field!(logtimeformat, Str).default_value("[%H:%M:%S]"),
    field!(messageholelimit, Int).default_value("3000"),
    field!(messageslimit, Int).default_value("500"),
    field!(ackslimit, Int).default_value("3000"),
    field!(playertimeout, Int).default_value("10000"),
    field!(minconnectiontime, Int).default_value("0"),
    field!(lagcompmode, Int).default_value("1"),
    field!(connseedtime, Int).default_value("300000"),
    field!(db_logging, Bool).default_value("0"),
    field!(db_log_queries, Bool).default_value("0"),
    field!(conncookies, Bool).default_value("1"),
    field!(cookielogging, Bool).default_value("0"),
    field!(output, Bool).default_value("1"),
];
