//! Configure command handler for credentials and the language table.

use anyhow::{Context, Result, bail};
use inquire::validator::Validation;
use inquire::{Confirm, Editor, Password, PasswordDisplayMode, Text};
use std::fs;
use std::path::PathBuf;

use crate::config::{Credentials, LanguageTable, LoadStatus, Session};
use crate::ui::{Style, handle_prompt_cancellation};

pub struct ConfigureOptions {
    pub show: bool,
    pub appid: Option<String>,
    pub appkey: Option<String>,
    pub languages: Option<PathBuf>,
}

/// Shows or edits the stored configuration.
///
/// With `--appid`/`--appkey`/`--languages` the values are applied directly;
/// otherwise the user is prompted, starting from the current values.
pub fn run_configure(
    session: &mut Session,
    status: &LoadStatus,
    options: ConfigureOptions,
) -> Result<()> {
    if options.show {
        super::report_load_status(session, status);
        print_configuration(session);
        return Ok(());
    }

    let languages = options
        .languages
        .as_deref()
        .map(|path| {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read language file: {}", path.display()))?;
            parse_language_table(&contents)
        })
        .transpose()?;

    match (options.appid, options.appkey, languages) {
        (Some(appid), Some(appkey), languages) => {
            let credentials = Credentials::new(appid, appkey)?;
            let languages = languages.unwrap_or_else(|| session.languages().clone());
            save(session, credentials, languages)
        }
        (None, None, Some(languages)) => {
            let credentials = session
                .credentials()
                .context("Set --appid and --appkey along with --languages")?
                .clone();
            save(session, credentials, languages)
        }
        _ => handle_prompt_cancellation(|| run_configure_interactive(session)),
    }
}

fn run_configure_interactive(session: &mut Session) -> Result<()> {
    let current = session.to_config_file();

    let appid = Text::new("App ID:")
        .with_initial_value(&current.appid)
        .with_help_message("From the Baidu translation developer console")
        .prompt()?;

    let mut key_prompt = Password::new("App key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation();
    if !current.appkey.is_empty() {
        key_prompt = key_prompt.with_help_message("Leave empty to keep the current key");
    }
    let appkey = key_prompt.prompt()?;
    let appkey = if appkey.trim().is_empty() {
        current.appkey
    } else {
        appkey
    };

    let credentials = Credentials::new(appid, appkey)?;

    let languages = if Confirm::new("Edit the language table?")
        .with_default(false)
        .prompt()?
    {
        let initial = serde_json::to_string_pretty(&current.language)?;
        let edited = Editor::new("Language table (JSON):")
            .with_predefined_text(&initial)
            .with_file_extension(".json")
            .with_validator(|text: &str| {
                Ok(match parse_language_table(text) {
                    Ok(_) => Validation::Valid,
                    Err(e) => Validation::Invalid(format!("{e:#}").into()),
                })
            })
            .prompt()?;
        parse_language_table(&edited)?
    } else {
        current.language
    };

    save(session, credentials, languages)
}

fn save(session: &mut Session, credentials: Credentials, languages: LanguageTable) -> Result<()> {
    session.configure(credentials, languages)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(session.config_path().display())
    );
    Ok(())
}

/// Parses a language table from JSON, rejecting an empty one.
pub fn parse_language_table(json: &str) -> Result<LanguageTable> {
    let table: LanguageTable = serde_json::from_str(json)
        .context("Language table is not a JSON object of name/code pairs")?;

    if table.is_empty() {
        bail!("Language table must contain at least one entry");
    }
    if let Some((name, _)) = table.iter().find(|(_, code)| code.trim().is_empty()) {
        bail!("Language '{name}' has an empty code");
    }

    Ok(table)
}

fn print_configuration(session: &Session) {
    let file = session.to_config_file();

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}    {}",
        Style::label("path"),
        Style::secondary(session.config_path().display())
    );
    println!("  {}   {}", Style::label("appid"), display_or_unset(&file.appid));
    println!(
        "  {}  {}",
        Style::label("appkey"),
        if file.appkey.is_empty() {
            Style::secondary("(not set)")
        } else {
            Style::value(mask_key(&file.appkey))
        }
    );
    println!(
        "  {}  {}",
        Style::label("languages"),
        file.language
            .iter()
            .map(|(name, code)| format!("{} ({})", Style::value(name), Style::code(code)))
            .collect::<Vec<_>>()
            .join(", ")
    );
}

fn display_or_unset(value: &str) -> String {
    if value.is_empty() {
        Style::secondary("(not set)")
    } else {
        Style::value(value)
    }
}

/// Keeps the last four characters of a key visible.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}
