//! Logging setup for the wrapgen CLI.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: DEBUG for wrapgen crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`
//! 4. INFO for wrapgen crates
//!
//! Logs go to stderr so `wrapgen schema` output can be piped.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str =
    "wrapgen=debug,wrapgen_scan=debug,wrapgen_gen=debug,wrapgen_config=debug,wrapgen_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str =
    "wrapgen=info,wrapgen_scan=info,wrapgen_gen=info,wrapgen_config=info,wrapgen_cli=info";

/// Filter for the given verbosity flags.
pub fn env_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

/// Whether stderr should get ANSI colors.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
