use serde::{Deserialize, Serialize};

/// Build mode tag handed to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Served from the source tree with live reload
    Development,
    /// Hashed, split and extracted output under the output root
    Production,
}

impl Mode {
    /// Map an invocation signal to a mode.
    ///
    /// Accepts the lifecycle event names (`dev`, `build`) as well as the
    /// mode names themselves. Anything else is unrecognized.
    pub fn from_signal(signal: &str) -> Option<Self> {
        match signal.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Some(Mode::Development),
            "build" | "production" => Some(Mode::Production),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source map generation tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    /// External .map files with full mappings
    SourceMap,
}

/// Stage at which a binding runs relative to the ordinary bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforce {
    /// Runs before every normal binding (lint over untransformed source)
    Pre,
    /// Runs after every normal binding
    Post,
}

/// Which chunks participate in chunk splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    /// Only dynamically imported chunks (engine default)
    #[default]
    Async,
    /// Only entry chunks
    Initial,
    /// Every chunk
    All,
}

/// Lifecycle phase a plugin hooks into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Before emitting, used to prepare the output directory
    BeforeEmit,
    /// While compiling modules and assets
    Compile,
    /// When emitting assets
    Emit,
    /// After the build has finished
    Done,
}
