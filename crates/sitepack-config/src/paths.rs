//! Path registry: every directory the configuration refers to, resolved once.
//!
//! All paths are absolute. Relative layout entries are joined onto a single
//! working directory captured when the registry is built and then lexically
//! cleaned, so `src/../src` and `src` are the same role target.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use path_clean::PathClean;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::settings::LayoutSettings;

/// Logical role of a path in the project layout
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PathRole {
    SourceRoot,
    Entry,
    StyleSource,
    AssetRoot,
    AssetImages,
    AssetIcons,
    OutputRoot,
    OutputScripts,
    OutputStyles,
    OutputImages,
    OutputIcons,
}

impl PathRole {
    pub const ALL: [PathRole; 11] = [
        PathRole::SourceRoot,
        PathRole::Entry,
        PathRole::StyleSource,
        PathRole::AssetRoot,
        PathRole::AssetImages,
        PathRole::AssetIcons,
        PathRole::OutputRoot,
        PathRole::OutputScripts,
        PathRole::OutputStyles,
        PathRole::OutputImages,
        PathRole::OutputIcons,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PathRole::SourceRoot => "source-root",
            PathRole::Entry => "entry",
            PathRole::StyleSource => "style-source",
            PathRole::AssetRoot => "asset-root",
            PathRole::AssetImages => "asset-images",
            PathRole::AssetIcons => "asset-icons",
            PathRole::OutputRoot => "output-root",
            PathRole::OutputScripts => "output-scripts",
            PathRole::OutputStyles => "output-styles",
            PathRole::OutputImages => "output-images",
            PathRole::OutputIcons => "output-icons",
        }
    }

    fn layout_entry(self, layout: &LayoutSettings) -> &Path {
        match self {
            PathRole::SourceRoot => &layout.source,
            PathRole::Entry => &layout.entry,
            PathRole::StyleSource => &layout.styles,
            PathRole::AssetRoot => &layout.assets,
            PathRole::AssetImages => &layout.images,
            PathRole::AssetIcons => &layout.icons,
            PathRole::OutputRoot => &layout.output,
            PathRole::OutputScripts => &layout.output_scripts,
            PathRole::OutputStyles => &layout.output_styles,
            PathRole::OutputImages => &layout.output_images,
            PathRole::OutputIcons => &layout.output_icons,
        }
    }
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathRole {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        PathRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownRole(s.to_string()))
    }
}

/// Read-only table of resolved paths, one per [`PathRole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRegistry {
    cwd: PathBuf,
    paths: BTreeMap<PathRole, PathBuf>,
}

impl PathRegistry {
    /// Resolve `layout` against `cwd`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DuplicatePath` if two roles resolve to the same
    /// path, and `ConfigError::OutsideRoot` if the output scripts directory
    /// is not under the output root (script filenames are relative to it).
    pub fn new(cwd: impl AsRef<Path>, layout: &LayoutSettings) -> Result<Self> {
        let cwd = cwd.as_ref().to_path_buf().clean();
        let mut paths = BTreeMap::new();
        let mut seen: BTreeMap<PathBuf, PathRole> = BTreeMap::new();

        for role in PathRole::ALL {
            let entry = role.layout_entry(layout);
            let resolved = if entry.is_absolute() {
                entry.to_path_buf().clean()
            } else {
                cwd.join(entry).clean()
            };

            if let Some(first) = seen.insert(resolved.clone(), role) {
                return Err(ConfigError::DuplicatePath {
                    first,
                    second: role,
                    path: resolved,
                });
            }
            paths.insert(role, resolved);
        }

        let registry = Self { cwd, paths };
        if registry
            .relative(PathRole::OutputScripts, PathRole::OutputRoot)
            .is_none()
        {
            return Err(ConfigError::OutsideRoot {
                role: PathRole::OutputScripts,
                root: PathRole::OutputRoot,
                path: registry.resolve(PathRole::OutputScripts).to_path_buf(),
            });
        }

        tracing::debug!(cwd = %registry.cwd.display(), roles = registry.paths.len(), "path registry built");
        Ok(registry)
    }

    /// Resolve `layout` against the process working directory.
    pub fn from_current_dir(layout: &LayoutSettings) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::new(cwd, layout)
    }

    /// The working directory every relative layout entry was joined onto
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn resolve(&self, role: PathRole) -> &Path {
        // Every role is inserted by `new`
        &self.paths[&role]
    }

    /// Resolve a role given by name, e.g. `"output-root"`.
    pub fn resolve_str(&self, role: &str) -> Result<&Path> {
        let role: PathRole = role.parse()?;
        Ok(self.resolve(role))
    }

    /// Path of `role` relative to `base`, with `/` separators, if `role`
    /// lies under `base`.
    pub fn relative(&self, role: PathRole, base: PathRole) -> Option<String> {
        let relative = self.resolve(role).strip_prefix(self.resolve(base)).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PathRole, &Path)> {
        self.paths.iter().map(|(role, path)| (*role, path.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PathRegistry {
        PathRegistry::new("/project", &LayoutSettings::default()).unwrap()
    }

    #[test]
    fn resolves_relative_layout_against_cwd() {
        let paths = registry();
        assert_eq!(paths.resolve(PathRole::SourceRoot), Path::new("/project/src"));
        assert_eq!(paths.resolve(PathRole::OutputRoot), Path::new("/project/dist"));
        assert_eq!(
            paths.resolve(PathRole::AssetIcons),
            Path::new("/project/src/assets/icons")
        );
    }

    #[test]
    fn every_role_is_absolute() {
        let paths = registry();
        assert_eq!(paths.iter().count(), PathRole::ALL.len());
        assert!(paths.iter().all(|(_, path)| path.is_absolute()));
    }

    #[test]
    fn resolve_str_accepts_role_names() {
        let paths = registry();
        assert_eq!(
            paths.resolve_str("output-scripts").unwrap(),
            Path::new("/project/dist/scripts")
        );
    }

    #[test]
    fn resolve_str_rejects_unknown_roles() {
        let err = registry().resolve_str("output-fonts").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRole(ref name) if name == "output-fonts"));
    }

    #[test]
    fn duplicate_paths_fail_construction() {
        let layout = LayoutSettings {
            output: PathBuf::from("src/../src"),
            ..LayoutSettings::default()
        };

        let err = PathRegistry::new("/project", &layout).unwrap_err();
        match err {
            ConfigError::DuplicatePath { first, second, path } => {
                assert_eq!(first, PathRole::SourceRoot);
                assert_eq!(second, PathRole::OutputRoot);
                assert_eq!(path, PathBuf::from("/project/src"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn absolute_layout_entries_are_kept() {
        let layout = LayoutSettings {
            output: PathBuf::from("/var/www/site"),
            output_scripts: PathBuf::from("/var/www/site/js"),
            ..LayoutSettings::default()
        };

        let paths = PathRegistry::new("/project", &layout).unwrap();
        assert_eq!(paths.resolve(PathRole::OutputRoot), Path::new("/var/www/site"));
        assert_eq!(
            paths.relative(PathRole::OutputScripts, PathRole::OutputRoot).as_deref(),
            Some("js")
        );
    }

    #[test]
    fn scripts_outside_output_root_fail_construction() {
        let layout = LayoutSettings {
            output_scripts: PathBuf::from("build/scripts"),
            ..LayoutSettings::default()
        };

        let err = PathRegistry::new("/project", &layout).unwrap_err();
        match err {
            ConfigError::OutsideRoot { role, root, path } => {
                assert_eq!(role, PathRole::OutputScripts);
                assert_eq!(root, PathRole::OutputRoot);
                assert_eq!(path, PathBuf::from("/project/build/scripts"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn asset_copies_land_directly_under_output_root() {
        let paths = registry();
        assert_eq!(
            paths.relative(PathRole::OutputImages, PathRole::OutputRoot).as_deref(),
            Some("images")
        );
        assert_eq!(
            paths.relative(PathRole::OutputIcons, PathRole::OutputRoot).as_deref(),
            Some("icons")
        );
    }

    #[test]
    fn relative_is_none_outside_base() {
        let paths = registry();
        assert_eq!(paths.relative(PathRole::SourceRoot, PathRole::OutputRoot), None);
    }
}
