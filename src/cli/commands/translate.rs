use anyhow::{Context, Result, anyhow};
use futures_util::StreamExt;
use std::path::PathBuf;
use std::pin::pin;

use crate::config::Session;
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::processor::{Dispatcher, LineProcessor, LineStatus};
use crate::translation::{BaiduClient, resolve_language};
use crate::ui::{LineProgress, Style};

pub struct TranslateOptions {
    pub file: Option<PathBuf>,
    pub from: String,
    pub to: Option<String>,
    pub write: bool,
}

pub async fn run_translate(session: &Session, options: TranslateOptions) -> Result<()> {
    let to = options.to.as_deref().ok_or_else(|| {
        anyhow!(
            "Missing required option: --to <LANG>\n\n\
             Run 'stl languages' to see the configured languages."
        )
    })?;
    let from = resolve_language(session.languages(), &options.from, true)?;
    let to = resolve_language(session.languages(), to, false)?;

    let credentials = session
        .credentials()
        .context("Run 'stl configure' to set your Baidu app id and key")?
        .clone();

    let source_text = InputReader::read(options.file.as_deref())?;
    let total_lines = source_text.split('\n').count();

    tracing::debug!(%from, %to, lines = total_lines, "starting translation");

    let processor = LineProcessor::new(BaiduClient::new(), credentials, from, to);
    let dispatcher = Dispatcher::new();
    let mut job = dispatcher.start(processor, source_text)?;

    let progress = LineProgress::new(total_lines);
    let mut translated_lines = Vec::with_capacity(total_lines);
    let mut fallbacks = 0;

    {
        let mut lines = pin!(job.lines());
        while let Some(line) = lines.next().await {
            if matches!(line.status, LineStatus::Fallback(_)) {
                fallbacks += 1;
            }
            progress.println_stdout(&line.text);
            progress.advance(fallbacks);
            translated_lines.push(line.text);
        }
    }
    progress.stop();

    let summary = job.finish().await?;

    if options.write
        && let Some(path) = options.file.as_deref()
    {
        atomic_write(path, &translated_lines.join("\n"))
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        crate::status!(
            "{} Wrote {}",
            Style::success("✓"),
            Style::secondary(path.display())
        );
    }

    crate::status!(
        "{} {} of {} lines translated{}",
        Style::success("✓"),
        summary.translated,
        summary.lines,
        if summary.fallbacks > 0 {
            Style::warning(format!(", {} kept untranslated", summary.fallbacks))
        } else {
            String::new()
        }
    );

    Ok(())
}
