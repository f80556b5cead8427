//! Output routing and diagnostics setup.
//!
//! Translated lines go to stdout so they can be piped or redirected.
//! Progress, status and warnings go to stderr. `--quiet` hides status
//! messages but never warnings; `--no-color` or `NO_COLOR` disables styling.
//! Structured diagnostics from the worker and client go through `tracing`,
//! filtered by `RUST_LOG` (default `warn`).

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub quiet: bool,
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Sets the process-wide output configuration. Later calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Installs the stderr `tracing` subscriber.
///
/// `verbose` raises the default level to `debug` for this crate;
/// an explicit `RUST_LOG` always wins.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "strings_tl=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!is_no_color())
        .try_init();
}

/// Prints a status message to stderr unless quiet.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Prints a warning to stderr, even in quiet mode.
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        eprintln!(
            "{} {}",
            $crate::ui::Style::warning("Warning:"),
            format_args!($($arg)*)
        );
    };
}
