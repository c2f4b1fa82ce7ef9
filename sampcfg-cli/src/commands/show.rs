//! Command to print the resolved configuration.

use crate::error::CliError;
use crate::utils::{load_config, GlobalOptions};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Print the resolved configuration.
#[derive(Args)]
pub struct ShowCommand {
    /// Server directory containing samp.json or samp.yaml
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Ignore SAMP_* environment variables
    #[arg(long)]
    pub no_env: bool,
}

impl ShowCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_config(self.dir, self.no_env)?;

        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&config)
                .map_err(|e| CliError::Render(format!("cannot render JSON: {e}")))?,
            OutputFormat::Yaml => serde_yaml::to_string(&config)
                .map_err(|e| CliError::Render(format!("cannot render YAML: {e}")))?,
        };

        println!("{}", rendered.trim_end());
        Ok(())
    }
}
