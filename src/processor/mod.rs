mod dispatch;
mod line;
mod worker;

pub use dispatch::{DispatchError, Dispatcher, TranslationJob};
pub use line::{LocalizationLine, render_entry};
pub use worker::{DEFAULT_PACING, LineProcessor, LineStatus, ProcessedLine, RunSummary};
