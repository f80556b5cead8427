use futures_util::Stream;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};

use super::worker::{LineProcessor, ProcessedLine, RunSummary};
use crate::translation::Translator;

/// Lines buffered between the worker and the consumer.
const CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Input is empty: nothing to translate")]
    EmptyInput,

    #[error("A translation is already running")]
    Busy,

    #[error("Translation worker stopped unexpectedly")]
    Worker(#[from] JoinError),
}

/// Starts translation runs, one at a time.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    busy: Arc<AtomicBool>,
}

/// Clears the busy flag when the worker task ends, however it ends.
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Spawns a worker for `buffer`.
    ///
    /// Fails with [`DispatchError::EmptyInput`] before anything is spawned,
    /// and with [`DispatchError::Busy`] while an earlier job is still running.
    pub fn start<T>(
        &self,
        processor: LineProcessor<T>,
        buffer: String,
    ) -> Result<TranslationJob, DispatchError>
    where
        T: Translator + 'static,
    {
        if buffer.is_empty() {
            return Err(DispatchError::EmptyInput);
        }

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(DispatchError::Busy);
        }
        let guard = BusyGuard(Arc::clone(&self.busy));

        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        let handle = tokio::spawn(async move {
            let _guard = guard;
            processor.run(&buffer, sender).await
        });

        Ok(TranslationJob { receiver, handle })
    }
}

/// A running translation: an ordered stream of lines plus the worker handle.
pub struct TranslationJob {
    receiver: mpsc::Receiver<ProcessedLine>,
    handle: JoinHandle<RunSummary>,
}

impl TranslationJob {
    /// Waits for the next processed line; `None` once the worker is done.
    pub async fn next_line(&mut self) -> Option<ProcessedLine> {
        self.receiver.recv().await
    }

    /// Lines as a stream, in input order.
    pub fn lines(&mut self) -> impl Stream<Item = ProcessedLine> + '_ {
        async_stream::stream! {
            while let Some(line) = self.receiver.recv().await {
                yield line;
            }
        }
    }

    /// Drains any undelivered lines, waits for the worker and returns its
    /// summary.
    pub async fn finish(mut self) -> Result<RunSummary, DispatchError> {
        while self.receiver.recv().await.is_some() {}
        Ok(self.handle.await?)
    }

    /// Stops the worker before its next line and waits for it.
    pub async fn cancel(self) -> Result<RunSummary, DispatchError> {
        let Self { receiver, handle } = self;
        drop(receiver);
        Ok(handle.await?)
    }
}
