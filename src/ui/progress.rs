use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use crate::output;

/// Line counter drawn on stderr while a table is being translated.
///
/// Hidden in quiet mode. Clears itself when dropped.
pub struct LineProgress {
    progress_bar: ProgressBar,
}

impl LineProgress {
    #[allow(clippy::unwrap_used)]
    pub fn new(total_lines: usize) -> Self {
        let progress_bar = if output::is_quiet() {
            ProgressBar::with_draw_target(Some(total_lines as u64), ProgressDrawTarget::hidden())
        } else {
            ProgressBar::with_draw_target(Some(total_lines as u64), ProgressDrawTarget::stderr())
        };
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "])
                .template("{spinner} Translating line {pos}/{len} {msg}")
                .unwrap(),
        );
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// Prints a finished line to stdout without tearing the bar.
    pub fn println_stdout(&self, line: &str) {
        self.progress_bar.suspend(|| println!("{line}"));
    }

    pub fn advance(&self, fallbacks: usize) {
        self.progress_bar.inc(1);
        if fallbacks > 0 {
            self.progress_bar
                .set_message(format!("({fallbacks} kept untranslated)"));
        }
    }

    pub fn stop(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for LineProgress {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
