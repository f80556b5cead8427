//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Languages command handler.
pub mod languages;

/// Translation command handler.
pub mod translate;

use anyhow::Result;
use std::path::PathBuf;

use crate::config::{ConfigManager, LoadStatus, Session};
use crate::ui::Style;

/// Opens the session from `--config` or the default `~/baidu.txt`.
pub fn open_session(config_path: Option<PathBuf>) -> Result<(Session, LoadStatus)> {
    let manager = match config_path {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };
    Ok(Session::open(manager))
}

/// Prints a warning describing why the stored configuration is unusable.
pub fn report_load_status(session: &Session, status: &LoadStatus) {
    let path = Style::secondary(session.config_path().display());
    match status {
        LoadStatus::Ready => {}
        LoadStatus::NotFound => {
            crate::warning!(
                "No Baidu configuration found at {path}\n  \
                 Run 'stl configure' to set your app id and key."
            );
        }
        LoadStatus::Invalid(reason) => {
            crate::warning!(
                "Could not read Baidu configuration: {reason}\n  \
                 Using the built-in language table. Run 'stl configure' to rewrite {path}."
            );
        }
        LoadStatus::Incomplete => {
            crate::warning!(
                "Baidu configuration at {path} has no app id or app key\n  \
                 Run 'stl configure' to set them."
            );
        }
    }
}
