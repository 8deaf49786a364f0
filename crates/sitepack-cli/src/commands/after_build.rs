//! After-build command implementation.
//!
//! Runs the after-build hooks carried by the production configuration,
//! which copy static image and icon directories into the output root.

use crate::commands::utils::Project;
use crate::error::Result;
use crate::ui;
use sitepack_config::{Mode, ModeSwitcher};

/// Execute the after-build command.
///
/// Copy failures are reported as warnings and never fail the command; a
/// finished build stays successful even if an asset directory is missing.
pub fn execute(project: &Project) -> Result<()> {
    let loaded = project.load()?;
    let switcher = ModeSwitcher::new(&loaded.paths, &loaded.settings);
    let config = switcher.with_mode(switcher.base()?, Mode::Production);

    let report = config.run_after_build();

    for copied in &report.copied {
        ui::success(&format!(
            "Copied {} ({} files)",
            copied.asset, copied.files
        ));
    }
    for failure in &report.failures {
        ui::warning(&failure.to_string());
    }

    if report.is_complete() {
        tracing::info!("after-build hooks finished");
    } else {
        tracing::warn!(
            failed = report.failures.len(),
            "after-build hooks finished with copy failures"
        );
    }

    Ok(())
}
