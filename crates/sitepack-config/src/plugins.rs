//! Lifecycle plugins registered with the bundler engine.
//!
//! Plugins hooked into the same phase run in registration order. There is no
//! priority field: the order of the list is the order of execution.

use std::path::PathBuf;

use path_clean::PathClean;
use serde::{Deserialize, Serialize};

use crate::bundle::{Mode, Phase};
use crate::copy::PostBuildAssetCopier;
use crate::pages::PageEntry;
use crate::paths::{PathRegistry, PathRole};
use crate::settings::LintSettings;

/// Filename of the extracted stylesheet, relative to the output root
pub const EXTRACTED_STYLESHEET: &str = "styles.[chunkhash].css";

/// Emits one HTML file from one template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlPagePlugin {
    pub filename: String,
    pub template: PathBuf,
}

impl From<&PageEntry> for HtmlPagePlugin {
    fn from(page: &PageEntry) -> Self {
        Self {
            filename: page.filename.clone(),
            template: page.template.clone(),
        }
    }
}

/// Lints stylesheets under `context`, reporting without failing the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleLintPlugin {
    pub config_file: PathBuf,
    pub context: PathBuf,
    pub files: Vec<String>,
    pub fail_on_error: bool,
    pub quiet: bool,
}

impl StyleLintPlugin {
    /// Lint the style sources. A relative config file is resolved against
    /// the registry's working directory.
    pub fn new(paths: &PathRegistry, lint: &LintSettings) -> Self {
        Self {
            config_file: paths.cwd().join(&lint.config_file).clean(),
            context: paths.resolve(PathRole::StyleSource).to_path_buf(),
            files: lint.files.clone(),
            fail_on_error: false,
            quiet: lint.quiet,
        }
    }
}

/// Empties the output directory before anything is emitted into it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanOutputPlugin {
    pub path: PathBuf,
}

/// Writes collected styles to a standalone stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStylesPlugin {
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginEntry {
    HtmlPage(HtmlPagePlugin),
    StyleLint(StyleLintPlugin),
    CleanOutput(CleanOutputPlugin),
    ExtractStyles(ExtractStylesPlugin),
    AfterBuild(PostBuildAssetCopier),
}

impl PluginEntry {
    pub fn name(&self) -> &'static str {
        match self {
            PluginEntry::HtmlPage(_) => "html-page",
            PluginEntry::StyleLint(_) => "style-lint",
            PluginEntry::CleanOutput(_) => "clean-output",
            PluginEntry::ExtractStyles(_) => "extract-styles",
            PluginEntry::AfterBuild(_) => PostBuildAssetCopier::NAME,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            PluginEntry::HtmlPage(_) | PluginEntry::StyleLint(_) => Phase::Compile,
            PluginEntry::CleanOutput(_) => Phase::BeforeEmit,
            PluginEntry::ExtractStyles(_) => Phase::Emit,
            PluginEntry::AfterBuild(_) => Phase::Done,
        }
    }
}

/// Ordered plugin list for one assembly
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginAssembler {
    plugins: Vec<PluginEntry>,
}

impl PluginAssembler {
    /// One page plugin per page, followed by the style lint plugin.
    pub fn base(pages: &[PageEntry], lint: StyleLintPlugin) -> Self {
        let mut plugins: Vec<PluginEntry> = pages
            .iter()
            .map(|page| PluginEntry::HtmlPage(page.into()))
            .collect();
        plugins.push(PluginEntry::StyleLint(lint));
        Self { plugins }
    }

    /// Base plugins extended for `mode`; `None` keeps the base set.
    pub fn build(
        pages: &[PageEntry],
        lint: StyleLintPlugin,
        mode: Option<Mode>,
        paths: &PathRegistry,
    ) -> Self {
        let base = Self::base(pages, lint);
        match mode {
            Some(mode) => base.with_mode(mode, paths),
            None => base,
        }
    }

    /// Development adds nothing. Production appends output cleanup, style
    /// extraction and the asset copy hook, in that order, so cleanup never
    /// removes freshly emitted files.
    pub fn with_mode(mut self, mode: Mode, paths: &PathRegistry) -> Self {
        if mode == Mode::Production {
            self.plugins.push(PluginEntry::CleanOutput(CleanOutputPlugin {
                path: paths.resolve(PathRole::OutputRoot).to_path_buf(),
            }));
            self.plugins.push(PluginEntry::ExtractStyles(ExtractStylesPlugin {
                filename: EXTRACTED_STYLESHEET.to_string(),
            }));
            self.plugins
                .push(PluginEntry::AfterBuild(PostBuildAssetCopier::new(paths)));
        }
        self
    }

    pub fn plugins(&self) -> &[PluginEntry] {
        &self.plugins
    }

    pub fn into_plugins(self) -> Vec<PluginEntry> {
        self.plugins
    }

    /// Index of the first plugin called `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.plugins.iter().position(|plugin| plugin.name() == name)
    }
}

impl From<Vec<PluginEntry>> for PluginAssembler {
    fn from(plugins: Vec<PluginEntry>) -> Self {
        Self { plugins }
    }
}
