//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

use exitcode::ExitCode;

use crate::config::ConfigError;
use crate::processor::DispatchError;
use crate::translation::LanguageError;

/// Maps an error chain to a sysexits-style process exit code.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    for cause in err.chain() {
        if cause.is::<ConfigError>() {
            return exitcode::CONFIG;
        }
        if cause.is::<LanguageError>() {
            return exitcode::USAGE;
        }
        if let Some(dispatch) = cause.downcast_ref::<DispatchError>() {
            return match dispatch {
                DispatchError::EmptyInput => exitcode::NOINPUT,
                DispatchError::Busy => exitcode::TEMPFAIL,
                DispatchError::Worker(_) => exitcode::SOFTWARE,
            };
        }
        if cause.is::<std::io::Error>() {
            return exitcode::IOERR;
        }
    }
    exitcode::SOFTWARE
}
