//! Config command implementation.
//!
//! Assembles the bundler configuration for the requested mode and emits it
//! as JSON for the bundler engine.

use crate::cli::ConfigArgs;
use crate::commands::utils::Project;
use crate::error::{Result, ResultExt};
use crate::ui;
use sitepack_config::ModeSwitcher;

/// Execute the config command.
///
/// # Steps
///
/// 1. Load settings and resolve the path registry
/// 2. Discover pages and assemble the base configuration
/// 3. Apply the mode resolved from `--mode` or the lifecycle event
/// 4. Print the JSON to stdout, or write it to `--out`
///
/// # Errors
///
/// Returns errors for an unreadable source root, colliding layout paths, or
/// a failed write to `--out`.
pub fn execute(args: ConfigArgs, project: &Project) -> Result<()> {
    let loaded = project.load()?;
    let signal = args.signal();
    tracing::debug!(signal = %signal, "assembling configuration");

    let config = ModeSwitcher::new(&loaded.paths, &loaded.settings).assemble(&signal)?;
    let json = config.to_json_pretty()?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_path(parent)?;
            }
            std::fs::write(&out, format!("{json}\n"))
                .context(format!("Failed to write {}", out.display()))?;

            let mode = config
                .mode
                .map(|m| m.to_string())
                .unwrap_or_else(|| "base".to_string());
            ui::success(&format!(
                "Wrote {} configuration to {}",
                mode,
                out.display()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
