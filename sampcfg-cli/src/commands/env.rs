//! Command to list environment variables and the source of each value.

use crate::error::CliError;
use crate::utils::{load_config, GlobalOptions};
use clap::Args;
use sampcfg::config::environment::read_var;
use sampcfg::config::fields::{FieldSpec, FIELDS};
use sampcfg::{Config, EnvironmentConfig};
use std::path::PathBuf;

/// List the SAMP_* environment variables and their state.
#[derive(Args)]
pub struct EnvCommand {
    /// Server directory containing samp.json or samp.yaml
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl EnvCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_config(self.dir, true)?;

        println!(
            "{:<26} {:<12} {:<8} DEFAULT",
            "VARIABLE", "KIND", "SOURCE"
        );
        for spec in FIELDS {
            let var = spec.env_var();
            let source = if overridden(&config, spec, &var) {
                "env"
            } else if spec.is_set(&config) {
                "file"
            } else if spec.kind.is_scalar() && spec.default.is_some() {
                "default"
            } else {
                "-"
            };

            let var = if spec.kind.is_scalar() {
                var
            } else {
                format!("({})", spec.name)
            };

            println!(
                "{:<26} {:<12} {:<8} {}",
                var,
                spec.kind.to_string(),
                source,
                spec.default.unwrap_or("-")
            );
        }
        Ok(())
    }
}

/// Whether the overlay would assign `var` to this field.
fn overridden(config: &Config, spec: &FieldSpec, var: &str) -> bool {
    if !spec.kind.is_scalar() {
        return false;
    }
    read_var(var).is_some_and(|value| {
        let mut overlaid = config.clone();
        EnvironmentConfig::apply_value(&mut overlaid, spec, &value)
    })
}
