//! Error types for configuration assembly and the after-build hook.

use std::path::PathBuf;

use thiserror::Error;

use crate::copy::AssetKind;
use crate::paths::PathRole;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Path registry errors (fatal, raised before any configuration exists)
    #[error("unknown path role: {0}")]
    UnknownRole(String),

    #[error("path roles `{first}` and `{second}` both resolve to {}", .path.display())]
    DuplicatePath {
        first: PathRole,
        second: PathRole,
        path: PathBuf,
    },

    #[error("path role `{role}` must lie under `{root}`, got {}", .path.display())]
    OutsideRoot {
        role: PathRole,
        root: PathRole,
        path: PathBuf,
    },

    // Page discovery errors (fatal)
    #[error("cannot discover pages in {}: {reason}", .path.display())]
    Discovery { path: PathBuf, reason: String },

    // After-build errors (reported, never revert the build)
    #[error("failed to copy {asset} from {}: {reason}", .source_dir.display())]
    AssetCopy {
        asset: AssetKind,
        source_dir: PathBuf,
        reason: String,
    },

    // Settings loading errors
    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Whether the error aborts assembly. Only asset copy failures are
    /// reported after the fact.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConfigError::AssetCopy { .. })
    }
}
