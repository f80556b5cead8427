use std::time::Duration;
use tokio::sync::mpsc;

use super::line::{LocalizationLine, render_entry};
use crate::config::Credentials;
use crate::translation::{TranslationRequest, Translator};

/// Pause between two provider calls; personal Baidu accounts allow one
/// query per second.
pub const DEFAULT_PACING: Duration = Duration::from_secs(1);

/// What happened to a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStatus {
    /// The value was replaced by its translation.
    Translated,
    /// Not an entry; copied verbatim.
    Passthrough,
    /// Translation failed; the original line was kept.
    Fallback(String),
}

/// One output line, delivered in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedLine {
    pub index: usize,
    pub text: String,
    pub status: LineStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub translated: usize,
    pub fallbacks: usize,
    /// The consumer went away before every line was delivered.
    pub cancelled: bool,
}

impl RunSummary {
    fn record(&mut self, status: &LineStatus) {
        self.lines += 1;
        match status {
            LineStatus::Translated => self.translated += 1,
            LineStatus::Fallback(_) => self.fallbacks += 1,
            LineStatus::Passthrough => {}
        }
    }
}

/// Translates a string table line by line.
///
/// Holds a snapshot of the credentials and language pair taken when the
/// run was requested.
pub struct LineProcessor<T> {
    translator: T,
    credentials: Credentials,
    from: String,
    to: String,
    pacing: Duration,
}

impl<T: Translator> LineProcessor<T> {
    pub fn new(
        translator: T,
        credentials: Credentials,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            translator,
            credentials,
            from: from.into(),
            to: to.into(),
            pacing: DEFAULT_PACING,
        }
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Processes one line. Translation failures never escape: the original
    /// line comes back as a [`LineStatus::Fallback`].
    ///
    /// A trailing `\r` is kept on rendered entries so CRLF tables stay CRLF.
    pub async fn process_line(&self, index: usize, line: &str) -> ProcessedLine {
        let (content, line_ending) = line
            .strip_suffix('\r')
            .map_or((line, ""), |content| (content, "\r"));

        let LocalizationLine::Entry { key, value } = LocalizationLine::parse(content) else {
            return ProcessedLine {
                index,
                text: line.to_string(),
                status: LineStatus::Passthrough,
            };
        };

        let request = TranslationRequest {
            text: value.to_string(),
            from: self.from.clone(),
            to: self.to.clone(),
        };

        match self.translator.translate(&request, &self.credentials).await {
            Ok(translated) => ProcessedLine {
                index,
                text: format!("{}{line_ending}", render_entry(key, &translated)),
                status: LineStatus::Translated,
            },
            Err(e) => {
                if e.is_provider() {
                    tracing::warn!(
                        line = index + 1,
                        key,
                        error = %e,
                        "provider refused, keeping original"
                    );
                } else {
                    tracing::warn!(
                        line = index + 1,
                        key,
                        error = ?e,
                        "request failed, keeping original"
                    );
                }
                ProcessedLine {
                    index,
                    text: line.to_string(),
                    status: LineStatus::Fallback(e.to_string()),
                }
            }
        }
    }

    /// Processes every line of `buffer` in order, sending each result as
    /// soon as it is ready.
    ///
    /// The buffer is split on `\n`, so a trailing newline yields a final
    /// empty line. Consecutive lines are separated by the pacing delay.
    /// Dropping the receiving end stops the run before the next line.
    pub async fn run(&self, buffer: &str, sender: mpsc::Sender<ProcessedLine>) -> RunSummary {
        let mut summary = RunSummary::default();

        for (index, line) in buffer.split('\n').enumerate() {
            if index > 0 && !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }

            if sender.is_closed() {
                summary.cancelled = true;
                break;
            }

            let processed = self.process_line(index, line).await;
            summary.record(&processed.status);

            if sender.send(processed).await.is_err() {
                summary.cancelled = true;
                break;
            }
        }

        if summary.cancelled {
            tracing::info!(processed = summary.lines, "receiver dropped, translation stopped");
        } else {
            tracing::debug!(
                lines = summary.lines,
                translated = summary.translated,
                fallbacks = summary.fallbacks,
                "translation finished"
            );
        }

        summary
    }
}
