use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stl")]
#[command(about = "Translate localization string tables through the Baidu translation API")]
#[command(version)]
pub struct Args {
    /// String table to translate (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Source language name or code, or "auto" to detect it
    #[arg(short = 'f', long = "from", default_value = "auto")]
    pub from: String,

    /// Target language name or code (e.g. English, jp, fra)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Replace FILE with the translated table once all lines are done
    #[arg(short = 'w', long, requires = "file")]
    pub write: bool,

    /// Use this config file instead of ~/baidu.txt
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Hide progress and status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log request details to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Set the Baidu app id, app key and language table
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Baidu app id (non-interactive)
        #[arg(long, requires = "appkey")]
        appid: Option<String>,

        /// Baidu app key (non-interactive)
        #[arg(long, requires = "appid")]
        appkey: Option<String>,

        /// JSON file with the language table, e.g. {"English": "en"}
        #[arg(long, value_name = "FILE")]
        languages: Option<PathBuf>,
    },
    /// List the configured languages
    Languages,
}
