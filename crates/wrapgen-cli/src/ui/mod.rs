//! Terminal output: status lines and the run summary.
//!
//! Everything is written to stderr; stdout is reserved for command output
//! such as `wrapgen schema`.

mod format;
mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, print_run_summary, render_run_summary};
pub use messages::{info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Decide once whether status output is colored.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && crate::logger::should_use_colors(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub(crate) fn paint(text: &str, style: owo_colors::Style) -> String {
    use owo_colors::OwoColorize;

    if colors_enabled() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
