//! Duration formatting and the per-package run summary.

use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

use owo_colors::Style;
use wrapgen::RunReport;

use super::paint;

/// Format duration in human-readable format.
///
/// ```
/// use std::time::Duration;
/// use wrapgen_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{total_ms}ms")
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// One line per requested package, in requested order, then a total.
pub fn render_run_summary(report: &RunReport, out_dir: &Path, elapsed: Duration) -> String {
    let mut out = String::new();
    let name_width = report
        .outcomes
        .iter()
        .map(|o| o.package_name.len())
        .max()
        .unwrap_or(0);

    for outcome in &report.outcomes {
        let name = format!("{:<name_width$}", outcome.package_name);
        let line = match &outcome.result {
            Ok(generated) => format!(
                "  {} {}  {} commands, {} exceptions",
                paint("✓", Style::new().green()),
                name,
                generated.commands,
                generated.exceptions
            ),
            Err(failure) => format!(
                "  {} {}  {}",
                paint("✗", Style::new().red()),
                name,
                paint(&format!("{} ({failure})", failure.kind()), Style::new().red())
            ),
        };
        let _ = writeln!(out, "{line}");
    }

    let generated = report.succeeded().count();
    let failed = report.outcomes.len() - generated;
    let _ = write!(
        out,
        "\n{} client(s) generated in {} -> {}",
        generated,
        format_duration(elapsed),
        out_dir.display()
    );
    if failed > 0 {
        let _ = write!(out, ", {failed} skipped");
    }
    out
}

/// Print [`render_run_summary`] to stderr.
pub fn print_run_summary(report: &RunReport, out_dir: &Path, elapsed: Duration) {
    eprintln!("{}", render_run_summary(report, out_dir, elapsed));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_format_duration_boundary() {
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
    }
}
