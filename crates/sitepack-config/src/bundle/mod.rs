//! Output and optimization descriptors handed to the bundler engine.

pub(crate) mod helpers;
mod types;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use types::{ChunkSelection, Devtool, Enforce, Mode, Phase};

/// Filename placeholder replaced by the entry or chunk name
pub const NAME_PLACEHOLDER: &str = "[name]";

/// Returns true if a filename pattern embeds a content hash
/// (`[hash]`, `[hash:N]`, `[chunkhash]`, `[contenthash]`, ...).
pub fn has_hash_placeholder(pattern: &str) -> bool {
    ["[hash", "[chunkhash", "[contenthash", "[fullhash"]
        .iter()
        .any(|token| pattern.contains(token))
}

/// Where and how the engine writes bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDescriptor {
    /// Target directory for all emitted files (absolute)
    pub path: PathBuf,

    /// Filename template for entry chunks
    pub filename: String,

    /// Filename template for split chunks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_filename: Option<String>,
}

impl OutputDescriptor {
    /// Stable entry-named bundles written into `path`
    pub fn unhashed(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            filename: format!("{NAME_PLACEHOLDER}.bundle.js"),
            chunk_filename: None,
        }
    }

    /// Hashed entry bundles and stable chunk names under `scripts_dir`,
    /// relative to `path`.
    pub fn hashed(path: impl Into<PathBuf>, scripts_dir: &str) -> Self {
        let prefix = if scripts_dir.is_empty() {
            String::new()
        } else {
            format!("{}/", scripts_dir.trim_end_matches('/'))
        };

        Self {
            path: path.into(),
            filename: format!("{prefix}{NAME_PLACEHOLDER}.[hash:10].js"),
            chunk_filename: Some(format!("{prefix}{NAME_PLACEHOLDER}.js")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationDescriptor {
    pub split_chunks: SplitChunks,
}

impl OptimizationDescriptor {
    /// Split shared code out of every chunk
    pub fn split_all() -> Self {
        Self {
            split_chunks: SplitChunks {
                chunks: ChunkSelection::All,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    pub chunks: ChunkSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_hash_placeholders() {
        assert!(has_hash_placeholder("[name].[hash:10].js"));
        assert!(has_hash_placeholder("styles.[chunkhash].css"));
        assert!(has_hash_placeholder("[contenthash].js"));
        assert!(!has_hash_placeholder("[name].bundle.js"));
        assert!(!has_hash_placeholder("scripts/[name].js"));
    }

    #[test]
    fn hashed_output_prefixes_scripts_dir() {
        let output = OutputDescriptor::hashed("/project/dist", "scripts");
        assert_eq!(output.filename, "scripts/[name].[hash:10].js");
        assert_eq!(output.chunk_filename.as_deref(), Some("scripts/[name].js"));
    }

    #[test]
    fn hashed_output_without_scripts_dir() {
        let output = OutputDescriptor::hashed("/project/dist", "");
        assert_eq!(output.filename, "[name].[hash:10].js");
        assert_eq!(output.chunk_filename.as_deref(), Some("[name].js"));
    }

    #[test]
    fn optimization_serializes_camel_case() {
        let value = serde_json::to_value(OptimizationDescriptor::split_all()).unwrap();
        assert_eq!(value["splitChunks"]["chunks"], "all");
    }
}
