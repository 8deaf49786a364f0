//! Command-line interface definition for sitepack.
//!
//! # Command Structure
//!
//! - `sitepack config` - Assemble the bundler configuration and print it as JSON
//! - `sitepack pages` - List the page templates that become build targets
//! - `sitepack after-build` - Run the after-build hooks of the production configuration


use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable holding the package-manager lifecycle event
/// (`dev`, `build`, ...), used when `--mode` is not given.
pub const LIFECYCLE_EVENT_VAR: &str = "npm_lifecycle_event";

/// sitepack - bundler configuration for multi-page static sites
#[derive(Parser, Debug)]
#[command(
    name = "sitepack",
    version,
    about = "Assemble bundler configuration for a multi-page static site",
    long_about = "sitepack discovers page templates, builds the transform rules and plugin\n\
                  chain for development or production, and hands the result to the bundler\n\
                  engine as JSON."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Settings file (defaults to sitepack.toml in the project root)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the configuration for a mode and print it as JSON
    ///
    /// Unrecognized modes produce the mode-independent base configuration
    /// and a warning.
    Config(ConfigArgs),

    /// List discovered page templates
    Pages,

    /// Run the after-build hooks of the production configuration
    ///
    /// Copies static image and icon directories into the output root.
    /// Copy failures are reported as warnings; the build itself stays
    /// successful.
    AfterBuild,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Mode signal: dev / development or build / production
    ///
    /// Falls back to the npm_lifecycle_event environment variable.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

impl ConfigArgs {
    /// The mode signal for this invocation: `--mode`, then the lifecycle
    /// event, then empty.
    pub fn signal(&self) -> String {
        self.mode
            .clone()
            .or_else(|| std::env::var(LIFECYCLE_EVENT_VAR).ok())
            .unwrap_or_default()
    }
}
