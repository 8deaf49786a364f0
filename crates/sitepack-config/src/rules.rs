//! Module transform rules: which transform chain applies to which content.
//!
//! Steps inside a binding run in list order, each receiving the output of
//! the previous one. Bindings with [`Enforce::Pre`] run before every other
//! binding that matches the same file.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::bundle::{Enforce, Mode};
use crate::error::{ConfigError, Result};

/// Pattern for stylesheet content
pub const STYLE_TEST: &str = r"(?i)\.css$";

/// Pattern for script content
pub const SCRIPT_TEST: &str = r"\.js$";

/// What a binding is responsible for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingKind {
    Style,
    Lint,
    Transpile,
}

/// A single transform in a binding's chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "loader", rename_all = "kebab-case")]
pub enum TransformStep {
    /// Injects styles into the page at runtime (development)
    Style,
    /// Hands styles to the extraction plugin (production)
    CssExtract,
    /// Resolves stylesheet imports; `url` controls rewriting of `url()` references
    Css { url: bool },
    /// Style post-processing pipeline, run in order
    Postcss { plugins: Vec<StyleTransform> },
    /// Lint diagnostics over untransformed scripts
    Eslint,
    /// Transpile scripts for broad runtime compatibility
    Babel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTransform {
    Import,
    Mixins,
    SimpleVars,
    Nested,
    Autoprefixer,
    Minify,
}

impl StyleTransform {
    /// Post-processing chain shared by every mode
    pub const BASE_PIPELINE: [StyleTransform; 5] = [
        StyleTransform::Import,
        StyleTransform::Mixins,
        StyleTransform::SimpleVars,
        StyleTransform::Nested,
        StyleTransform::Autoprefixer,
    ];
}

/// Binds a file pattern to an ordered transform chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformBinding {
    pub kind: BindingKind,

    /// Regex matched against the module path
    pub test: String,

    /// Regex for paths the binding never applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforce: Option<Enforce>,

    #[serde(rename = "use")]
    pub steps: Vec<TransformStep>,
}

impl TransformBinding {
    /// Whether this binding applies to `path` (matched with `/` separators).
    pub fn matches(&self, path: &str) -> Result<bool> {
        let path = path.replace('\\', "/");
        if !compile(&self.test)?.is_match(&path) {
            return Ok(false);
        }
        match &self.exclude {
            Some(exclude) => Ok(!compile(exclude)?.is_match(&path)),
            None => Ok(true),
        }
    }

    /// The style post-processing pipeline, if this binding has one
    pub fn style_pipeline(&self) -> Option<&[StyleTransform]> {
        self.steps.iter().find_map(|step| match step {
            TransformStep::Postcss { plugins } => Some(plugins.as_slice()),
            _ => None,
        })
    }

    fn style_pipeline_mut(&mut self) -> Option<&mut Vec<StyleTransform>> {
        self.steps.iter_mut().find_map(|step| match step {
            TransformStep::Postcss { plugins } => Some(plugins),
            _ => None,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ConfigError::InvalidValue(format!("invalid rule pattern `{pattern}`: {e}")))
}

/// Ordered list of transform bindings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformRuleSet {
    rules: Vec<TransformBinding>,
}

impl TransformRuleSet {
    /// Bindings shared by every mode: the style chain and the script lint
    /// pre-pass. Scripts under `dependency_dir` are never linted.
    pub fn base(dependency_dir: &str) -> Self {
        let style = TransformBinding {
            kind: BindingKind::Style,
            test: STYLE_TEST.to_string(),
            exclude: None,
            enforce: None,
            steps: vec![
                TransformStep::Css { url: false },
                TransformStep::Postcss {
                    plugins: StyleTransform::BASE_PIPELINE.to_vec(),
                },
            ],
        };

        let lint = TransformBinding {
            kind: BindingKind::Lint,
            test: SCRIPT_TEST.to_string(),
            exclude: Some(regex::escape(dependency_dir)),
            enforce: Some(Enforce::Pre),
            steps: vec![TransformStep::Eslint],
        };

        Self {
            rules: vec![style, lint],
        }
    }

    /// Base bindings extended for `mode`; `None` keeps the base set.
    pub fn build(dependency_dir: &str, mode: Option<Mode>) -> Self {
        let base = Self::base(dependency_dir);
        match mode {
            Some(mode) => base.with_mode(mode),
            None => base,
        }
    }

    /// Extend the bindings for `mode`.
    ///
    /// Development heads the style chain with live injection. Production
    /// heads it with extraction, appends minification to the style pipeline
    /// and appends script transpilation, which skips the same dependency
    /// directory as the lint pre-pass.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        match mode {
            Mode::Development => {
                if let Some(style) = self.binding_mut(BindingKind::Style) {
                    style.steps.insert(0, TransformStep::Style);
                }
            }
            Mode::Production => {
                if let Some(style) = self.binding_mut(BindingKind::Style) {
                    style.steps.insert(0, TransformStep::CssExtract);
                    if let Some(pipeline) = style.style_pipeline_mut() {
                        pipeline.push(StyleTransform::Minify);
                    }
                }

                let exclude = self
                    .binding(BindingKind::Lint)
                    .and_then(|lint| lint.exclude.clone());
                self.rules.push(TransformBinding {
                    kind: BindingKind::Transpile,
                    test: SCRIPT_TEST.to_string(),
                    exclude,
                    enforce: None,
                    steps: vec![TransformStep::Babel],
                });
            }
        }
        self
    }

    pub fn rules(&self) -> &[TransformBinding] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<TransformBinding> {
        self.rules
    }

    pub fn binding(&self, kind: BindingKind) -> Option<&TransformBinding> {
        self.rules.iter().find(|rule| rule.kind == kind)
    }

    fn binding_mut(&mut self, kind: BindingKind) -> Option<&mut TransformBinding> {
        self.rules.iter_mut().find(|rule| rule.kind == kind)
    }

    /// Bindings that apply to `path`, in execution order: `pre` bindings
    /// first, then normal ones, then `post`, each group in list order.
    pub fn applicable(&self, path: &str) -> Result<Vec<&TransformBinding>> {
        let mut matched = Vec::new();
        for rule in &self.rules {
            if rule.matches(path)? {
                matched.push(rule);
            }
        }
        // Stable sort keeps list order inside each stage
        matched.sort_by_key(|rule| match rule.enforce {
            Some(Enforce::Pre) => 0,
            None => 1,
            Some(Enforce::Post) => 2,
        });
        Ok(matched)
    }
}

impl From<Vec<TransformBinding>> for TransformRuleSet {
    fn from(rules: Vec<TransformBinding>) -> Self {
        Self { rules }
    }
}
