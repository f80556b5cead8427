//! Language selection against the active language table.

use crate::config::LanguageTable;
use crate::ui::Style;

/// Source code that asks the provider to detect the language.
pub const AUTO_DETECT: &str = "auto";

#[derive(Debug, thiserror::Error)]
pub enum LanguageError {
    #[error(
        "Unknown language: '{input}'\n\n\
         Configured languages: {known}\n\
         Run 'stl languages' to see the full table."
    )]
    Unknown { input: String, known: String },

    #[error("'auto' can only be used as the source language")]
    AutoAsTarget,
}

/// Resolves a language name or code to the provider code.
///
/// Accepts an exact table name, a case-insensitive table name, or a code
/// already present in the table. `auto` is accepted only when `allow_auto`.
pub fn resolve_language(
    table: &LanguageTable,
    input: &str,
    allow_auto: bool,
) -> Result<String, LanguageError> {
    let input = input.trim();

    if input.eq_ignore_ascii_case(AUTO_DETECT) {
        return if allow_auto {
            Ok(AUTO_DETECT.to_string())
        } else {
            Err(LanguageError::AutoAsTarget)
        };
    }

    if let Some(code) = table.get(input) {
        return Ok(code.to_string());
    }

    if let Some((_, code)) = table
        .iter()
        .find(|(name, _)| name.to_lowercase() == input.to_lowercase())
    {
        return Ok(code.to_string());
    }

    if table.contains_code(input) {
        return Ok(input.to_string());
    }

    Err(LanguageError::Unknown {
        input: input.to_string(),
        known: table.names().collect::<Vec<_>>().join(", "),
    })
}

/// Prints the language table to stdout.
pub fn print_languages(table: &LanguageTable) {
    println!("{}", Style::header("Configured languages"));

    let width = table.names().map(|n| n.chars().count()).max().unwrap_or(0);
    for (name, code) in table.iter() {
        let pad = width.saturating_sub(name.chars().count());
        println!(
            "  {}{}  {}",
            Style::value(name),
            " ".repeat(pad),
            Style::code(code)
        );
    }

    println!();
    println!(
        "  {}",
        Style::hint(format!("Use '{AUTO_DETECT}' as --from to detect the source language"))
    );
}
