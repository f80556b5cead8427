//! Ordered language-name to provider-code table.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Languages offered when the config document carries no table of its own.
pub const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("Chinese", "zh"),
    ("English", "en"),
    ("Japanese", "jp"),
    ("Korean", "kor"),
    ("French", "fra"),
    ("Russian", "ru"),
    ("German", "de"),
    ("Traditional Chinese", "cht"),
];

/// Maps human-readable language names to Baidu language codes.
///
/// Insertion order is kept so the table prints and saves the way the user
/// wrote it. Inserting an existing name replaces its code in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTable {
    entries: Vec<(String, String)>,
}

impl LanguageTable {
    /// Returns the built-in table.
    pub fn builtin() -> Self {
        DEFAULT_LANGUAGES.iter().copied().collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, code: impl Into<String>) {
        let name = name.into();
        let code = code.into();

        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = code;
        } else {
            self.entries.push((name, code));
        }
    }

    /// Looks up the code for an exact language name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_str())
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.iter().any(|(_, c)| c == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LanguageTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::default();
        for (name, code) in iter {
            table.insert(name, code);
        }
        table
    }
}

impl Serialize for LanguageTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, code) in &self.entries {
            map.serialize_entry(name, code)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LanguageTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = LanguageTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping language names to codes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut table = LanguageTable::default();
                while let Some((name, code)) = access.next_entry::<String, String>()? {
                    table.insert(name, code);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let table = LanguageTable::builtin();
        assert_eq!(table.len(), DEFAULT_LANGUAGES.len());
        assert_eq!(table.get("Japanese"), Some("jp"));
        assert_eq!(table.get("Traditional Chinese"), Some("cht"));
        assert_eq!(table.names().next(), Some("Chinese"));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut table: LanguageTable = [("English", "en"), ("Korean", "ko")].into_iter().collect();
        table.insert("Korean", "kor");

        assert_eq!(table.len(), 2);
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("English", "en"), ("Korean", "kor")]);
    }

    #[test]
    fn test_serialize_keeps_order() {
        let table: LanguageTable = [("Zulu", "zul"), ("Arabic", "ara")].into_iter().collect();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"Zulu":"zul","Arabic":"ara"}"#);
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let table: LanguageTable =
            serde_json::from_str(r#"{"Spanish": "spa", "Dutch": "nl", "Thai": "th"}"#).unwrap();
        let names: Vec<_> = table.names().collect();
        assert_eq!(names, vec!["Spanish", "Dutch", "Thai"]);
    }

    #[test]
    fn test_deserialize_duplicate_key_keeps_last_value() {
        let table: LanguageTable =
            serde_json::from_str(r#"{"English": "en", "German": "de", "English": "eng"}"#)
                .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("English"), Some("eng"));
        assert_eq!(table.names().next(), Some("English"));
    }

    #[test]
    fn test_deserialize_rejects_non_string_codes() {
        let result = serde_json::from_str::<LanguageTable>(r#"{"English": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_contains_code() {
        let table = LanguageTable::builtin();
        assert!(table.contains_code("fra"));
        assert!(!table.contains_code("fr"));
    }
}
