//! # stl - localization string-table translator
//!
//! `stl` translates Apple-style `.strings` tables through the Baidu general
//! translation API. Each line of the form `"key" = "value";` has its value
//! translated and is reassembled; every other line is copied verbatim.
//! Lines are streamed to stdout as they finish, one request per second to
//! stay within the free-tier rate limit.
//!
//! ## Quick Start
//!
//! ```bash
//! # Store the app id, app key and language table in ~/baidu.txt
//! stl configure
//!
//! # Translate a table to Japanese
//! stl --to Japanese en.lproj/Localizable.strings > ja.lproj/Localizable.strings
//!
//! # Translate in place, from an explicit source language
//! stl --from English --to fra --write fr.lproj/Localizable.strings
//! ```
//!
//! ## Configuration
//!
//! `~/baidu.txt` is a JSON document:
//!
//! ```json
//! {"appid": "2015063000000001", "appkey": "12345678", "language": {"English": "en", "Japanese": "jp"}}
//! ```
//!
//! Without a `language` table the built-in one is used.

/// Credentials, language table and the session that owns them.
pub mod config;

/// Command-line interface definitions and handlers.
pub mod cli;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Output routing, quiet mode and diagnostics.
pub mod output;

/// Location of the config file.
pub mod paths;

/// Line parsing and the paced translation worker.
pub mod processor;

/// Baidu translation API client.
pub mod translation;

/// Terminal UI components (progress, colors, prompts).
pub mod ui;
