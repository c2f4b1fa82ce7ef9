//! Configuration system for sampcfg.
//!
//! This module loads SA:MP server settings from a directory and overlays
//! environment variables on top:
//! - `samp.json` or `samp.yaml` settings files (JSON wins when both exist)
//! - `SAMP_*` environment variable overrides for scalar fields
//! - A static field table describing every settable field
//! - An explicit required-field check
//!
//! # Precedence
//!
//! Highest to lowest:
//!
//! 1. Environment variables (`SAMP_*`)
//! 2. The settings file
//! 3. `server.cfg` defaults, applied downstream for fields left absent
//!
//! # Examples
//!
//! Loading a server directory:
//!
//! ```no_run
//! use sampcfg::config::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::load_from_environment(Path::new("/srv/samp")).unwrap();
//! println!("{:?}", config.hostname);
//! ```
//!
//! Walking the field table:
//!
//! ```
//! use sampcfg::config::fields::FIELDS;
//!
//! for spec in FIELDS.iter().filter(|spec| spec.kind.is_scalar()) {
//!     println!("{} <- {}", spec.name, spec.env_var());
//! }
//! ```

pub mod environment;
pub mod fields;
pub mod loader;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use environment::EnvironmentConfig;
pub use fields::{FieldKind, FieldSlot, FieldSpec, FIELDS};
pub use loader::{ConfigLoader, Format};
pub use schema::{Config, Plugin, ECHO_MESSAGE};
pub use validator::ConfigValidator;
