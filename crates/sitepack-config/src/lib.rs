pub mod bundle;
pub mod config;
pub mod copy;
pub mod dev;
pub mod error;
pub mod mode;
pub mod pages;
pub mod paths;
pub mod plugins;
pub mod rules;
pub mod settings;

// Re-export main types
pub use bundle::*;
pub use config::*;
pub use copy::{AssetCopy, AssetCopyReport, AssetKind, CopiedAssets, PostBuildAssetCopier};
pub use dev::*;
pub use error::*;
pub use mode::ModeSwitcher;
pub use pages::{discover_pages, PageEntry};
pub use paths::{PathRegistry, PathRole};
pub use plugins::*;
pub use rules::*;
pub use settings::*;
