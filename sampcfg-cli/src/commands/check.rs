//! Command to check a server directory for missing required fields.

use crate::error::CliError;
use crate::utils::{load_config, GlobalOptions};
use clap::Args;
use sampcfg::ConfigValidator;
use std::path::PathBuf;

/// Check that all required fields are set.
#[derive(Args)]
pub struct CheckCommand {
    /// Server directory containing samp.json or samp.yaml
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Ignore SAMP_* environment variables
    #[arg(long)]
    pub no_env: bool,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_config(self.dir, self.no_env)?;

        let missing = ConfigValidator::missing_required(&config);
        if missing.is_empty() {
            if !global.quiet {
                println!("Configuration is valid");
            }
            return Ok(());
        }

        for spec in &missing {
            eprintln!(
                "missing required field '{}' (set it in the settings file or {})",
                spec.name,
                spec.env_var()
            );
        }
        Err(CliError::SemanticFailure(
            "Configuration is missing required fields".to_string(),
        ))
    }
}
