//! Shared utilities for command implementations.

use crate::error::{CliError, Result};
use sitepack_config::{PathRegistry, ProjectSettings};
use std::path::{Path, PathBuf};

/// Where the project lives and which settings file to read.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub cwd: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// A project with settings loaded and every path resolved
pub struct LoadedProject {
    pub settings: ProjectSettings,
    pub paths: PathRegistry,
}

impl Project {
    /// Resolve the project root: `--cwd` (relative to the process working
    /// directory) or the process working directory itself.
    pub fn root(&self) -> Result<PathBuf> {
        let cwd = get_cwd()?;
        let root = match &self.cwd {
            Some(dir) => resolve_path(dir, &cwd),
            None => cwd,
        };

        if !root.is_dir() {
            return Err(CliError::FileNotFound(root));
        }
        Ok(root)
    }

    /// Load settings and build the path registry.
    pub fn load(&self) -> Result<LoadedProject> {
        let root = self.root()?;
        let settings = ProjectSettings::load(&root, self.config.as_deref())?;
        let paths = PathRegistry::new(&root, &settings.layout)?;
        tracing::debug!(root = %root.display(), "project loaded");
        Ok(LoadedProject { settings, paths })
    }
}

/// Resolve a path relative to a working directory.
///
/// If the path is absolute, returns it unchanged. Otherwise, joins it with
/// the working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(|e| {
        CliError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to get current directory: {}", e),
        ))
    })
}
