//! Command implementations for the sitepack CLI.
//!
//! - [`config`] - Assemble and print the bundler configuration
//! - [`pages`] - List discovered page templates
//! - [`after_build`] - Run after-build hooks
//!
//! Each command provides an `execute` function taking the parsed arguments
//! and the shared project options.

pub mod after_build;
pub mod config;
pub mod pages;
pub(crate) mod utils;

pub use after_build::execute as after_build_execute;
pub use config::execute as config_execute;
pub use pages::execute as pages_execute;
pub use utils::Project;
