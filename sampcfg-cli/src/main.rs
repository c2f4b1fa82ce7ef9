//! Main entry point for the sampcfg CLI.
//!
//! This is the command-line interface for inspecting SA:MP server
//! configuration assembled from `samp.json`/`samp.yaml` and `SAMP_*`
//! environment variables:
//! - `show`: Print the resolved configuration
//! - `env`: List environment variables and where each value comes from
//! - `check`: Check that required fields are set
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Install the stderr log backend; overlay warnings go through it
    sampcfg::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Env(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
