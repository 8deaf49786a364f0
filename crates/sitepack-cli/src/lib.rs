//! sitepack CLI - bundler configuration for multi-page static sites.
//!
//! This crate provides the command-line surface over `sitepack-config`:
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - Command implementations
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status output on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use sitepack_cli::commands::{pages_execute, Project};
//!
//! fn main() -> sitepack_cli::Result<()> {
//!     pages_execute(&Project::default())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
