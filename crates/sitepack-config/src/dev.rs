//! Development server descriptor.
//!
//! Declarative settings only: serving, hot reload and watching are done by
//! the engine's dev server.

use glob::Pattern;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bundle::helpers::{default_dev_host, default_dev_port};
use crate::paths::{PathRegistry, PathRole};
use crate::settings::DevSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerDescriptor {
    /// Directory served as static content
    pub content_base: PathBuf,

    #[serde(default = "default_dev_host")]
    pub host: String,

    #[serde(default = "default_dev_port")]
    pub port: u16,

    /// Hot module replacement
    #[serde(default)]
    pub hot: bool,

    /// Extra globs whose changes trigger a reload
    #[serde(default)]
    pub watch: Vec<String>,

    /// Suppress the bundle info banner on rebuild
    #[serde(default)]
    pub no_info: bool,
}

impl DevServerDescriptor {
    /// Serve the source root with hot reload, also reloading on template
    /// edits.
    pub fn new(paths: &PathRegistry, dev: &DevSettings) -> Self {
        let source_root = paths.resolve(PathRole::SourceRoot);
        let template_glob = format!(
            "{}/**/*.html",
            Pattern::escape(&source_root.to_string_lossy())
        );

        Self {
            content_base: source_root.to_path_buf(),
            host: dev.host.clone(),
            port: dev.port,
            hot: true,
            watch: vec![template_glob],
            no_info: false,
        }
    }

    /// Whether a change to `path` matches one of the watch globs.
    /// Invalid globs never match.
    pub fn watches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        self.watch.iter().any(|glob| match Pattern::new(glob) {
            Ok(pattern) => pattern.matches_path(path),
            Err(err) => {
                tracing::warn!(%glob, %err, "ignoring invalid watch glob");
                false
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::LayoutSettings;

    fn descriptor() -> DevServerDescriptor {
        let paths = PathRegistry::new("/project", &LayoutSettings::default()).unwrap();
        DevServerDescriptor::new(&paths, &DevSettings::default())
    }

    #[test]
    fn serves_source_root_on_fixed_port() {
        let dev = descriptor();
        assert_eq!(dev.content_base, PathBuf::from("/project/src"));
        assert_eq!(dev.port, 3000);
        assert_eq!(dev.host, "0.0.0.0");
        assert!(dev.hot);
        assert!(!dev.no_info);
    }

    #[test]
    fn watches_templates_only() {
        let dev = descriptor();
        assert!(dev.watches("/project/src/index.html"));
        assert!(dev.watches("/project/src/pages/about.html"));
        assert!(!dev.watches("/project/src/index.js"));
        assert!(!dev.watches("/elsewhere/index.html"));
    }

    #[test]
    fn glob_metacharacters_in_root_are_literal() {
        let paths = PathRegistry::new("/sites/blog[v2]", &LayoutSettings::default()).unwrap();
        let dev = DevServerDescriptor::new(&paths, &DevSettings::default());

        assert!(dev.watches("/sites/blog[v2]/src/index.html"));
        assert!(!dev.watches("/sites/blogv/src/index.html"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let dev: DevServerDescriptor =
            serde_json::from_str(r#"{ "contentBase": "/srv" }"#).unwrap();
        assert_eq!(dev.port, 3000);
        assert_eq!(dev.host, "0.0.0.0");
        assert!(dev.watch.is_empty());
    }
}
