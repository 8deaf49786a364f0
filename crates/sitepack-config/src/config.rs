//! The assembled build configuration handed to the bundler engine.
//!
//! Assembly is staged: [`BuildConfig::base`] builds the mode-independent
//! configuration, then [`ModeSwitcher::with_mode`](crate::ModeSwitcher::with_mode)
//! and [`BuildConfig::with_plugins`] each take a configuration by value and
//! return the extended one. Nothing is shared between assemblies.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::{Devtool, Mode, OptimizationDescriptor, OutputDescriptor};
use crate::copy::{AssetCopyReport, PostBuildAssetCopier};
use crate::dev::DevServerDescriptor;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::pages::PageEntry;
use crate::paths::{PathRegistry, PathRole};
use crate::plugins::{PluginAssembler, PluginEntry, StyleLintPlugin};
use crate::rules::{TransformBinding, TransformRuleSet};
use crate::settings::ProjectSettings;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleOptions {
    #[serde(default)]
    pub rules: Vec<TransformBinding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Unset when the mode signal was not recognized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    pub entry: PathBuf,

    #[serde(default)]
    pub plugins: Vec<PluginEntry>,

    #[serde(default)]
    pub module: ModuleOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizationDescriptor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,
}

impl BuildConfig {
    /// Mode-independent configuration: entry, page and lint plugins, style
    /// and lint bindings. No output, dev-server or optimization descriptor.
    pub fn base(paths: &PathRegistry, settings: &ProjectSettings, pages: &[PageEntry]) -> Self {
        let lint = StyleLintPlugin::new(paths, &settings.lint);
        let plugins = PluginAssembler::base(pages, lint).into_plugins();
        let rules = TransformRuleSet::base(&settings.layout.dependency_dir).into_rules();

        Self {
            mode: None,
            entry: paths.resolve(PathRole::Entry).to_path_buf(),
            plugins,
            module: ModuleOptions { rules },
            output: None,
            dev_server: None,
            optimization: None,
            devtool: None,
        }
    }

    /// Append plugins after the ones already registered.
    pub fn with_plugins(mut self, plugins: impl IntoIterator<Item = PluginEntry>) -> Self {
        self.plugins.extend(plugins);
        self
    }

    /// Transform rules as an ordered rule set
    pub fn rule_set(&self) -> TransformRuleSet {
        TransformRuleSet::from(self.module.rules.clone())
    }

    /// Hooks registered for the "build finished" phase, in registration order
    pub fn after_build_hooks(&self) -> impl Iterator<Item = &PostBuildAssetCopier> {
        self.plugins.iter().filter_map(|plugin| match plugin {
            PluginEntry::AfterBuild(copier) => Some(copier),
            _ => None,
        })
    }

    /// Invoke every after-build hook. Failures are collected in the report
    /// and never abort the remaining hooks.
    pub fn run_after_build(&self) -> AssetCopyReport {
        let mut report = AssetCopyReport::default();
        for hook in self.after_build_hooks() {
            report.merge(hook.run());
        }
        report
    }

    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::ExtractStylesPlugin;
    use crate::rules::BindingKind;
    use crate::settings::LayoutSettings;
    use serde_json::json;

    fn base() -> BuildConfig {
        let paths = PathRegistry::new("/project", &LayoutSettings::default()).unwrap();
        let pages = vec![PageEntry {
            filename: "index.html".to_string(),
            template: PathBuf::from("/project/src/index.html"),
        }];
        BuildConfig::base(&paths, &ProjectSettings::default(), &pages)
    }

    #[test]
    fn base_has_no_mode_descriptors() {
        let config = base();

        assert_eq!(config.entry, PathBuf::from("/project/src/index.js"));
        assert!(config.mode.is_none());
        assert!(config.output.is_none());
        assert!(config.dev_server.is_none());
        assert!(config.optimization.is_none());
        assert_eq!(config.plugins.len(), 2);
        assert!(config.rule_set().binding(BindingKind::Lint).is_some());
    }

    #[test]
    fn with_plugins_appends_in_order() {
        let config = base().with_plugins([PluginEntry::ExtractStyles(ExtractStylesPlugin {
            filename: "extra.css".to_string(),
        })]);

        assert_eq!(config.plugins.len(), 3);
        assert_eq!(config.plugins[2].name(), "extract-styles");
    }

    #[test]
    fn base_has_no_after_build_hooks() {
        let config = base();
        assert_eq!(config.after_build_hooks().count(), 0);

        let report = config.run_after_build();
        assert!(report.is_complete());
        assert!(report.copied.is_empty());
    }

    #[test]
    fn serializes_without_absent_descriptors() {
        let value = base().to_value().unwrap();

        assert!(value.get("output").is_none());
        assert!(value.get("devServer").is_none());
        assert!(value.get("mode").is_none());
        assert_eq!(value["entry"], json!("/project/src/index.js"));
        assert_eq!(value["module"]["rules"][1]["enforce"], json!("pre"));
    }

    #[test]
    fn value_round_trip_preserves_config() {
        let config = base();
        let restored = BuildConfig::from_value(config.to_value().unwrap()).unwrap();
        assert_eq!(config, restored);
    }
}
