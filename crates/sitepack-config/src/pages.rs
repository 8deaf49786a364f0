//! Page discovery: one build target per HTML template in the source root.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Extension that marks a file as a page template
pub const TEMPLATE_EXTENSION: &str = ".html";

/// A template and the file it is emitted as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    /// Output filename, relative to the output directory
    pub filename: String,

    /// Absolute path of the source template
    pub template: PathBuf,
}

/// Scan the immediate contents of `source_root` for page templates.
///
/// Only regular files (or links to them) whose name ends in `.html` are
/// selected; subdirectories are not descended into. Pages are returned sorted
/// by filename so page plugin order does not depend on directory listing
/// order.
///
/// # Errors
///
/// Returns `ConfigError::Discovery` if `source_root` does not exist, is not a
/// directory, or cannot be listed.
pub fn discover_pages(source_root: impl AsRef<Path>) -> Result<Vec<PageEntry>> {
    let source_root = source_root.as_ref();

    let metadata = fs::metadata(source_root).map_err(|e| discovery_error(source_root, e))?;
    if !metadata.is_dir() {
        return Err(ConfigError::Discovery {
            path: source_root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let mut pages = Vec::new();
    for entry in fs::read_dir(source_root).map_err(|e| discovery_error(source_root, e))? {
        let entry = entry.map_err(|e| discovery_error(source_root, e))?;

        let Some(filename) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 filename");
            continue;
        };
        if !filename.ends_with(TEMPLATE_EXTENSION) {
            continue;
        }

        // fs::metadata follows links, so linked templates count as files
        let path = entry.path();
        if !fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false) {
            continue;
        }

        pages.push(PageEntry {
            filename,
            template: path,
        });
    }

    pages.sort_by(|a, b| a.filename.cmp(&b.filename));

    tracing::debug!(
        source_root = %source_root.display(),
        count = pages.len(),
        "discovered pages"
    );
    Ok(pages)
}

fn discovery_error(path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::Discovery {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
