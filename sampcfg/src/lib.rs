#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sampcfg
//!
//! A library for loading SA:MP server configuration.
//!
//! Settings come from `samp.json` or `samp.yaml` in a server directory and
//! can be overridden per field by `SAMP_*` environment variables. The result
//! is a single [`Config`] ready to be turned into a `server.cfg`.
//!
//! ## Core Types
//!
//! - [`Config`] and [`Plugin`]: The settings record
//! - [`ConfigLoader`]: Settings file discovery and decoding
//! - [`EnvironmentConfig`]: `SAMP_*` environment overrides
//! - [`config::fields::FIELDS`]: Per-field metadata (kind, default, required)
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use sampcfg::{Config, EnvironmentConfig};
//!
//! let mut config: Config = serde_json::from_str(r#"{"port": 7777}"#).unwrap();
//! EnvironmentConfig::apply_overrides_with(&mut config, |name| match name {
//!     "SAMP_MAXPLAYERS" => Some("100".to_string()),
//!     _ => None,
//! });
//! assert_eq!(config.port, Some(7777));
//! assert_eq!(config.maxplayers, Some(100));
//! ```

pub mod config;
pub mod error;
pub mod logging;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigLoader, ConfigValidator, EnvironmentConfig, Plugin};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
