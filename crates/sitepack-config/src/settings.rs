//! Project settings: filesystem layout, dev-server and lint options.
//!
//! Settings are layered with figment: built-in defaults, then `sitepack.toml`,
//! then `SITEPACK_` environment variables (nested keys separated by `__`,
//! e.g. `SITEPACK_DEV__PORT=4000`).

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format as _, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::bundle::helpers::{
    default_dev_host, default_dev_port, default_lint_config_file, default_lint_files,
};
use crate::error::{ConfigError, Result};

/// Conventional settings file name, looked up in the project root.
pub const SETTINGS_FILE: &str = "sitepack.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    #[serde(default)]
    pub layout: LayoutSettings,

    #[serde(default)]
    pub dev: DevSettings,

    #[serde(default)]
    pub lint: LintSettings,
}

/// Project-relative paths for every path role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub source: PathBuf,
    pub entry: PathBuf,
    pub styles: PathBuf,
    pub assets: PathBuf,
    pub images: PathBuf,
    pub icons: PathBuf,
    pub output: PathBuf,
    pub output_scripts: PathBuf,
    pub output_styles: PathBuf,
    pub output_images: PathBuf,
    pub output_icons: PathBuf,

    /// Third-party dependency directory skipped by the script bindings
    pub dependency_dir: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            source: PathBuf::from("src"),
            entry: PathBuf::from("src/index.js"),
            styles: PathBuf::from("src/styles"),
            assets: PathBuf::from("src/assets"),
            images: PathBuf::from("src/assets/images"),
            icons: PathBuf::from("src/assets/icons"),
            output: PathBuf::from("dist"),
            output_scripts: PathBuf::from("dist/scripts"),
            output_styles: PathBuf::from("dist/styles"),
            output_images: PathBuf::from("dist/images"),
            output_icons: PathBuf::from("dist/icons"),
            dependency_dir: "node_modules".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevSettings {
    #[serde(default = "default_dev_host")]
    pub host: String,

    #[serde(default = "default_dev_port")]
    pub port: u16,
}

impl Default for DevSettings {
    fn default() -> Self {
        Self {
            host: default_dev_host(),
            port: default_dev_port(),
        }
    }
}

/// Style lint options. Lint is always reported, never fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintSettings {
    #[serde(default = "default_lint_config_file")]
    pub config_file: PathBuf,

    #[serde(default = "default_lint_files")]
    pub files: Vec<String>,

    #[serde(default)]
    pub quiet: bool,
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            config_file: default_lint_config_file(),
            files: default_lint_files(),
            quiet: false,
        }
    }
}

impl ProjectSettings {
    /// Load settings for the project rooted at `root`.
    ///
    /// Priority: environment variables > settings file > defaults. When
    /// `config_path` is `None`, `sitepack.toml` in `root` is used if present.
    pub fn load(root: impl AsRef<Path>, config_path: Option<&Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let settings_file = match config_path {
            Some(path) if path.is_absolute() => Some(path.to_path_buf()),
            Some(path) => Some(root.join(path)),
            None => {
                let default_path = root.join(SETTINGS_FILE);
                default_path.exists().then_some(default_path)
            }
        };

        if let Some(path) = settings_file {
            if !path.exists() {
                return Err(ConfigError::InvalidValue(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "loading settings file");
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("SITEPACK_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}
