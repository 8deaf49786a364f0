//! sitepack CLI entry point.
//!
//! Parses arguments, initializes logging and colors, and dispatches commands.

use clap::Parser;
use miette::Result;
use sitepack_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let project = commands::Project {
        cwd: args.cwd,
        config: args.config,
    };

    let result = match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args, &project),
        cli::Command::Pages => commands::pages_execute(&project),
        cli::Command::AfterBuild => commands::after_build_execute(&project),
    };

    // Convert CLI errors to miette diagnostics
    result.map_err(error::cli_error_to_miette)
}
