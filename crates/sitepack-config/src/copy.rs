//! After-build hook mirroring static asset directories into the output root.
//!
//! Copies run synchronously once the engine reports a finished build. Each
//! asset directory is copied independently: a missing source fails only its
//! own copy, and no failure touches what the build already emitted.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::ConfigError;
use crate::paths::{PathRegistry, PathRole};

/// Kind of static asset directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Images,
    Icons,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Images => f.write_str("images"),
            AssetKind::Icons => f.write_str("icons"),
        }
    }
}

/// One directory mirrored after the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCopy {
    pub asset: AssetKind,
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBuildAssetCopier {
    pub copies: Vec<AssetCopy>,
}

impl PostBuildAssetCopier {
    pub const NAME: &'static str = "copy-assets";

    /// Images then icons, from the asset root into the output root
    pub fn new(paths: &PathRegistry) -> Self {
        let copies = vec![
            AssetCopy {
                asset: AssetKind::Images,
                from: paths.resolve(PathRole::AssetImages).to_path_buf(),
                to: paths.resolve(PathRole::OutputImages).to_path_buf(),
            },
            AssetCopy {
                asset: AssetKind::Icons,
                from: paths.resolve(PathRole::AssetIcons).to_path_buf(),
                to: paths.resolve(PathRole::OutputIcons).to_path_buf(),
            },
        ];
        Self { copies }
    }

    /// Run every copy, overwriting existing files at the destination.
    pub fn run(&self) -> AssetCopyReport {
        let mut report = AssetCopyReport::default();

        for copy in &self.copies {
            match copy_dir(&copy.from, &copy.to) {
                Ok(files) => {
                    tracing::debug!(
                        asset = %copy.asset,
                        files,
                        to = %copy.to.display(),
                        "copied assets"
                    );
                    report.copied.push(CopiedAssets {
                        asset: copy.asset,
                        files,
                    });
                }
                Err(reason) => {
                    tracing::error!(asset = %copy.asset, %reason, "asset copy failed");
                    report.failures.push(ConfigError::AssetCopy {
                        asset: copy.asset,
                        source_dir: copy.from.clone(),
                        reason,
                    });
                }
            }
        }

        report
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopiedAssets {
    pub asset: AssetKind,
    pub files: usize,
}

/// Outcome of the after-build copies. Failures never change the build's
/// own success status.
#[derive(Debug, Default)]
pub struct AssetCopyReport {
    pub copied: Vec<CopiedAssets>,
    pub failures: Vec<ConfigError>,
}

impl AssetCopyReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_assets(&self) -> Vec<AssetKind> {
        self.failures
            .iter()
            .filter_map(|failure| match failure {
                ConfigError::AssetCopy { asset, .. } => Some(*asset),
                _ => None,
            })
            .collect()
    }

    pub fn merge(&mut self, other: AssetCopyReport) {
        self.copied.extend(other.copied);
        self.failures.extend(other.failures);
    }
}

/// Recursively copy `from` into `to`, returning the number of files copied.
fn copy_dir(from: &Path, to: &Path) -> Result<usize, String> {
    if !from.is_dir() {
        return Err("source directory not found".to_string());
    }
    // The walk is lazy, so a destination inside the source would be walked too
    if to.starts_with(from) {
        return Err(format!(
            "destination {} is inside the source directory",
            to.display()
        ));
    }

    let mut files = 0;
    for entry in WalkDir::new(from).follow_links(true) {
        let entry = entry.map_err(|e| e.to_string())?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| e.to_string())?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| format!("{}: {e}", target.display()))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("{}: {e}", parent.display()))?;
            }
            fs::copy(entry.path(), &target)
                .map_err(|e| format!("{}: {e}", target.display()))?;
            files += 1;
        }
    }

    Ok(files)
}
