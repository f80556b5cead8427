//! Parsing and rendering of localization string-table lines.

use regex::Regex;
use std::sync::LazyLock;

/// `"key" = "value";`, anchored at the start of the line. Both captures are
/// greedy, so escaped quotes inside a value stay part of the value.
#[allow(clippy::expect_used)]
static ENTRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // expect is safe: the pattern is a compile-time constant
    Regex::new(r#"^"(.*)"\s*=\s*"(.*)";"#).expect("entry pattern is valid")
});

/// One raw input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizationLine<'a> {
    Entry { key: &'a str, value: &'a str },
    Other,
}

impl<'a> LocalizationLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let Some(caps) = ENTRY_PATTERN.captures(line) else {
            return Self::Other;
        };

        match (caps.get(1), caps.get(2)) {
            (Some(key), Some(value)) => Self::Entry {
                key: key.as_str(),
                value: value.as_str(),
            },
            _ => Self::Other,
        }
    }
}

/// Reassembles an entry with a new value.
pub fn render_entry(key: &str, value: &str) -> String {
    format!("\"{key}\" = \"{value}\";")
}
