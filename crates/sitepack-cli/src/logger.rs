//! Logging infrastructure for the sitepack CLI.
//!
//! Structured logging on the `tracing` ecosystem. Verbosity comes from the
//! global flags, with `RUST_LOG` as an override when neither is given.
//!
//! # Example
//!
//! ```rust,no_run
//! use sitepack_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Assembling configuration");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "sitepack=debug,sitepack_config=debug,sitepack_cli=debug";
const QUIET_FILTER: &str = "sitepack=error,sitepack_config=error,sitepack_cli=error";
const DEFAULT_FILTER: &str = "sitepack=info,sitepack_config=info,sitepack_cli=info";

/// Select the filter for the given verbosity flags.
///
/// The level is determined in this order:
/// 1. `--verbose`: DEBUG for sitepack crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. Default: INFO for sitepack crates (warnings such as an unrecognized
///    mode signal stay visible)
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// Logs go to stderr so configuration JSON on stdout stays clean.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show the module path (keeps output clean)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}
