//! Mode switching: the entry point of configuration assembly.

use crate::bundle::{Devtool, Mode, OptimizationDescriptor, OutputDescriptor};
use crate::config::{BuildConfig, ModuleOptions};
use crate::dev::DevServerDescriptor;
use crate::error::Result;
use crate::pages::discover_pages;
use crate::paths::{PathRegistry, PathRole};
use crate::plugins::PluginAssembler;
use crate::rules::TransformRuleSet;
use crate::settings::ProjectSettings;

/// Assembles a [`BuildConfig`] for one invocation.
pub struct ModeSwitcher<'a> {
    paths: &'a PathRegistry,
    settings: &'a ProjectSettings,
}

impl<'a> ModeSwitcher<'a> {
    pub fn new(paths: &'a PathRegistry, settings: &'a ProjectSettings) -> Self {
        Self { paths, settings }
    }

    /// Discover pages and build the mode-independent configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Discovery` if the source root cannot be scanned.
    pub fn base(&self) -> Result<BuildConfig> {
        let pages = discover_pages(self.paths.resolve(PathRole::SourceRoot))?;
        Ok(BuildConfig::base(self.paths, self.settings, &pages))
    }

    /// Assemble the configuration for an invocation signal.
    ///
    /// An unrecognized signal returns the base configuration unchanged and
    /// logs a warning. Either the full configuration is returned or an error;
    /// nothing partial escapes.
    pub fn assemble(&self, signal: &str) -> Result<BuildConfig> {
        let base = self.base()?;

        match Mode::from_signal(signal) {
            Some(mode) => {
                tracing::debug!(%mode, signal, "assembling configuration");
                Ok(self.with_mode(base, mode))
            }
            None => {
                tracing::warn!(
                    signal,
                    "unrecognized mode signal, configuration has no output, dev server or optimization"
                );
                Ok(base)
            }
        }
    }

    /// Extend `config` with the rules, plugins and descriptors of `mode`.
    pub fn with_mode(&self, config: BuildConfig, mode: Mode) -> BuildConfig {
        let BuildConfig {
            entry,
            plugins,
            module,
            ..
        } = config;

        let rules = TransformRuleSet::from(module.rules).with_mode(mode).into_rules();
        let plugins = PluginAssembler::from(plugins)
            .with_mode(mode, self.paths)
            .into_plugins();

        let mut config = BuildConfig {
            mode: Some(mode),
            entry,
            plugins,
            module: ModuleOptions { rules },
            output: None,
            dev_server: None,
            optimization: None,
            devtool: None,
        };

        match mode {
            Mode::Development => {
                config.output = Some(OutputDescriptor::unhashed(
                    self.paths.resolve(PathRole::SourceRoot),
                ));
                config.dev_server = Some(DevServerDescriptor::new(self.paths, &self.settings.dev));
                config.devtool = Some(Devtool::SourceMap);
            }
            Mode::Production => {
                // The registry rejects a scripts directory outside the output root
                let scripts_dir = self
                    .paths
                    .relative(PathRole::OutputScripts, PathRole::OutputRoot)
                    .unwrap_or_default();
                config.output = Some(OutputDescriptor::hashed(
                    self.paths.resolve(PathRole::OutputRoot),
                    &scripts_dir,
                ));
                config.optimization = Some(OptimizationDescriptor::split_all());
            }
        }

        config
    }
}
