//! Error handling for the sitepack CLI.
//!
//! Library errors from `sitepack-config` convert into [`CliError`] via
//! `#[from]`; `main` turns the final error into a miette report.

mod miette;

pub use self::miette::cli_error_to_miette;

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Assembly errors: unknown path roles, colliding layout, missing source root
    #[error("Configuration error: {0}")]
    Config(#[from] sitepack_config::ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

impl CliError {
    /// Hint shown under the error, if one applies
    pub fn hint(&self) -> Option<&'static str> {
        use sitepack_config::ConfigError;

        match self {
            CliError::Config(ConfigError::Discovery { .. }) => {
                Some("Check `layout.source` in sitepack.toml or pass --cwd <DIR>")
            }
            CliError::Config(ConfigError::DuplicatePath { .. }) => {
                Some("Every layout entry in sitepack.toml must point at a distinct directory")
            }
            CliError::Config(ConfigError::UnknownRole(_)) => {
                Some("Known roles: source-root, entry, style-source, asset-root, asset-images, asset-icons, output-root, output-scripts, output-styles, output-images, output-icons")
            }
            CliError::Config(ConfigError::OutsideRoot { .. }) => {
                Some("Set `layout.output_scripts` to a directory inside `layout.output`")
            }
            CliError::Config(ConfigError::InvalidValue(_)) => {
                Some("Check sitepack.toml syntax and SITEPACK_* environment variables")
            }
            _ => None,
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Report a missing file as `CliError::FileNotFound` for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error message with `msg`.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
