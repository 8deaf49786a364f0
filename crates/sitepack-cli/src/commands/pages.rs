//! Pages command implementation.

use crate::commands::utils::Project;
use crate::error::Result;
use crate::ui;
use sitepack_config::{discover_pages, PathRole};

/// Execute the pages command.
///
/// Prints one `filename<TAB>template` line per discovered page, in filename
/// order.
pub fn execute(project: &Project) -> Result<()> {
    let loaded = project.load()?;
    let source_root = loaded.paths.resolve(PathRole::SourceRoot);
    let pages = discover_pages(source_root)?;

    if pages.is_empty() {
        ui::warning(&format!(
            "No page templates found in {}",
            source_root.display()
        ));
        return Ok(());
    }

    for page in &pages {
        println!("{}\t{}", page.filename, page.template.display());
    }
    tracing::debug!(count = pages.len(), "pages listed");

    Ok(())
}
