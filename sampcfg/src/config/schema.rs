//! Configuration schema definitions.
//!
//! This module defines the settings record read from `samp.json` or
//! `samp.yaml`. Every scalar setting is optional: `None` means the value
//! was never given and the `server.cfg` default applies downstream.
//!
//! The serde names used here are the external names. They must stay in
//! step with the entries in [`crate::config::fields::FIELDS`], which drive
//! environment variable naming.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Banner echoed by the server when it loads a generated `server.cfg`.
pub const ECHO_MESSAGE: &str = "loading server.cfg generated by sampctl - do not edit this file manually, edit samp.json instead!";

/// Server settings and the directory they were loaded from.
///
/// # Examples
///
/// ```
/// use sampcfg::Config;
///
/// let config = Config {
///     port: Some(7777),
///     hostname: Some("My Server".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.port, Some(7777));
/// assert!(config.maxplayers.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Local directory the configuration was loaded from.
    #[serde(skip)]
    pub dir: Option<PathBuf>,

    /// Echo line written at the top of `server.cfg`.
    #[serde(skip)]
    pub echo: Option<String>,

    // Only used to configure sampctl, never written to server.cfg
    /// SA:MP server binaries version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Download endpoint for server binaries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    // Core properties
    /// Gamemode scripts, written as numbered `gamemodeN` lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gamemodes: Vec<String>,
    /// Filterscripts to load.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filterscripts: Vec<String>,
    /// Plugins to load.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,
    /// RCON password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcon_password: Option<String>,
    /// Listen port.
    pub port: Option<i64>,
    /// Server name shown in the browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Player slots.
    pub maxplayers: Option<i64>,
    /// Language shown in the browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Map name shown in the browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapname: Option<String>,
    /// Website shown in the browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weburl: Option<String>,
    /// Gamemode description shown in the browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamemodetext: Option<String>,

    // Network and technical config
    /// Address to bind to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Join password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Announce to the master server list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announce: Option<bool>,
    /// LAN mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lanmode: Option<bool>,
    /// Answer server browser queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<bool>,
    /// Allow remote RCON login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rcon: Option<bool>,
    /// Log every query packet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logqueries: Option<bool>,
    /// Main loop sleep in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<i64>,
    /// NPC slots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxnpc: Option<i64>,

    // Rates and performance
    /// Streamer update interval in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_rate: Option<i64>,
    /// Streaming distance in world units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_distance: Option<f32>,
    /// On-foot sync rate in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onfoot_rate: Option<i64>,
    /// In-vehicle sync rate in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incar_rate: Option<i64>,
    /// Weapon sync rate in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weapon_rate: Option<i64>,
    /// Log player chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chatlogging: Option<bool>,
    /// Timestamp log lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<bool>,
    /// Disable signature checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nosign: Option<String>,
    /// strftime format for log timestamps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logtimeformat: Option<String>,
    /// Message hole flood limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messageholelimit: Option<i64>,
    /// Messages per second limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messageslimit: Option<i64>,
    /// Acknowledgement flood limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ackslimit: Option<i64>,
    /// Player timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playertimeout: Option<i64>,
    /// Minimum time between connections in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minconnectiontime: Option<i64>,
    /// Lag compensation mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lagcompmode: Option<i64>,
    /// Connection seed rotation in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connseedtime: Option<i64>,
    /// Log SQLite database access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_logging: Option<bool>,
    /// Log SQLite queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_log_queries: Option<bool>,
    /// Use connection cookies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conncookies: Option<bool>,
    /// Log connection cookies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookielogging: Option<bool>,
    /// Print server log to stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<bool>,
}

impl Config {
    /// Directory this configuration was loaded from, if any.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Echo line for `server.cfg`, falling back to [`ECHO_MESSAGE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sampcfg::config::{Config, ECHO_MESSAGE};
    ///
    /// assert_eq!(Config::default().echo(), ECHO_MESSAGE);
    /// ```
    #[must_use]
    pub fn echo(&self) -> &str {
        self.echo.as_deref().unwrap_or(ECHO_MESSAGE)
    }
}

/// A plugin descriptor.
///
/// In a settings file a plugin is either a bare name or a mapping with a
/// `name` and an explicit `path`:
///
/// ```yaml
/// plugins:
///   - streamer
///   - name: mysql
///     path: plugins/mysql.so
/// ```
///
/// # Examples
///
/// ```
/// use sampcfg::config::Plugin;
///
/// let plugin = Plugin::named("streamer");
/// assert_eq!(plugin.name, "streamer");
/// assert!(plugin.path.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    /// Plugin name as written to the `plugins` line.
    pub name: String,
    /// Explicit binary path, if not resolved by name.
    pub path: Option<String>,
}

impl Plugin {
    /// Create a descriptor with no explicit path.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }
}

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum PluginRepr {
    Name(String),
    Full {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
}

impl<'de> Deserialize<'de> for Plugin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match PluginRepr::deserialize(deserializer)? {
            PluginRepr::Name(name) | PluginRepr::Full { name, path: None } => {
                if name.trim().is_empty() {
                    return Err(D::Error::custom("plugin name must not be empty"));
                }
                Ok(Plugin::named(name))
            }
            PluginRepr::Full {
                name,
                path: Some(path),
            } => Ok(Plugin {
                name,
                path: Some(path),
            }),
        }
    }
}

impl Serialize for Plugin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let repr = match &self.path {
            None => PluginRepr::Name(self.name.clone()),
            Some(path) => PluginRepr::Full {
                name: self.name.clone(),
                path: Some(path.clone()),
            },
        };
        repr.serialize(serializer)
    }
}
