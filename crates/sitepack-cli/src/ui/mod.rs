//! Terminal UI utilities for status output.
//!
//! Status lines go to stderr; stdout is reserved for command output such as
//! the assembled configuration.

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{info, success, warning};

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// Initialize color support. `--no-color` always disables colors; otherwise
/// the environment and terminal decide.
pub fn init_colors(no_color: bool) {
    COLOR_ENABLED.store(!no_color && should_use_color(), Ordering::Relaxed);
}

/// Whether status messages are colored
pub fn colors_enabled() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, falls back to terminal capability
/// detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}
