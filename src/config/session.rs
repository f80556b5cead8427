use std::path::Path;

use super::languages::LanguageTable;
use super::manager::{ConfigError, ConfigFile, ConfigManager, Credentials};

/// Outcome of reading the config document at startup.
///
/// None of these are fatal; the caller decides whether to prompt for
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Ready,
    NotFound,
    Invalid(String),
    Incomplete,
}

/// Process-wide settings: credentials plus the active language table.
///
/// Loaded once, changed only through [`Session::configure`], which
/// persists immediately. Translation runs take a snapshot of the
/// credentials when they start.
#[derive(Debug)]
pub struct Session {
    manager: ConfigManager,
    credentials: Option<Credentials>,
    languages: LanguageTable,
}

impl Session {
    /// Loads the document behind `manager`, falling back to defaults.
    pub fn open(manager: ConfigManager) -> (Self, LoadStatus) {
        let mut session = Self {
            manager,
            credentials: None,
            languages: LanguageTable::builtin(),
        };

        let status = match session.manager.load() {
            Ok(file) => {
                if !file.language.is_empty() {
                    session.languages = file.language.clone();
                }
                match file.credentials() {
                    Ok(credentials) => {
                        session.credentials = Some(credentials);
                        LoadStatus::Ready
                    }
                    Err(_) => LoadStatus::Incomplete,
                }
            }
            Err(ConfigError::NotFound { .. }) => LoadStatus::NotFound,
            Err(e) => LoadStatus::Invalid(format!("{:#}", anyhow::Error::new(e))),
        };

        tracing::debug!(
            path = %session.manager.config_path().display(),
            ?status,
            languages = session.languages.len(),
            "config loaded"
        );

        (session, status)
    }

    pub fn credentials(&self) -> Result<&Credentials, ConfigError> {
        self.credentials.as_ref().ok_or(ConfigError::Incomplete)
    }

    pub const fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    pub fn config_path(&self) -> &Path {
        self.manager.config_path()
    }

    /// Snapshot of the current settings in document form.
    pub fn to_config_file(&self) -> ConfigFile {
        let (appid, appkey) = self.credentials.as_ref().map_or_else(
            || (String::new(), String::new()),
            |c| (c.app_id.clone(), c.app_key.clone()),
        );

        ConfigFile {
            appid,
            appkey,
            language: self.languages.clone(),
        }
    }

    /// Replaces credentials and languages, then writes the document.
    pub fn configure(
        &mut self,
        credentials: Credentials,
        languages: LanguageTable,
    ) -> Result<(), ConfigError> {
        if languages.is_empty() {
            return Err(ConfigError::EmptyLanguageTable);
        }

        let file = ConfigFile {
            appid: credentials.app_id.clone(),
            appkey: credentials.app_key.clone(),
            language: languages.clone(),
        };
        self.manager.save(&file)?;

        self.credentials = Some(credentials);
        self.languages = languages;

        tracing::info!(path = %self.manager.config_path().display(), "config saved");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn manager_in(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("baidu.txt"))
    }

    #[test]
    fn test_open_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let (session, status) = Session::open(manager_in(&temp_dir));

        assert_eq!(status, LoadStatus::NotFound);
        assert_eq!(session.languages(), &LanguageTable::builtin());
        assert!(matches!(
            session.credentials(),
            Err(ConfigError::Incomplete)
        ));
    }

    #[test]
    fn test_open_invalid_json_reports_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);
        fs::write(manager.config_path(), "{not json").unwrap();

        let (session, status) = Session::open(manager);

        assert!(matches!(status, LoadStatus::Invalid(_)));
        assert_eq!(session.languages(), &LanguageTable::builtin());
    }

    #[test]
    fn test_open_incomplete_credentials_still_applies_languages() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);
        fs::write(
            manager.config_path(),
            r#"{"appid": "", "appkey": "key", "language": {"Spanish": "spa"}}"#,
        )
        .unwrap();

        let (session, status) = Session::open(manager);

        assert_eq!(status, LoadStatus::Incomplete);
        assert_eq!(session.languages().get("Spanish"), Some("spa"));
        assert!(session.credentials().is_err());
    }

    #[test]
    fn test_open_empty_language_table_keeps_default() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);
        fs::write(
            manager.config_path(),
            r#"{"appid": "id", "appkey": "key", "language": {}}"#,
        )
        .unwrap();

        let (session, status) = Session::open(manager);

        assert_eq!(status, LoadStatus::Ready);
        assert_eq!(session.languages(), &LanguageTable::builtin());
        assert_eq!(session.credentials().unwrap().app_id, "id");
    }

    #[test]
    fn test_configure_persists_and_reloads() {
        let temp_dir = TempDir::new().unwrap();
        let (mut session, _) = Session::open(manager_in(&temp_dir));

        let languages: LanguageTable = [("English", "en"), ("Italian", "it")].into_iter().collect();
        session
            .configure(Credentials::new("id", "key").unwrap(), languages.clone())
            .unwrap();

        assert_eq!(session.credentials().unwrap().app_key, "key");

        let (reloaded, status) = Session::open(manager_in(&temp_dir));
        assert_eq!(status, LoadStatus::Ready);
        assert_eq!(reloaded.languages(), &languages);
        assert_eq!(reloaded.to_config_file(), session.to_config_file());
    }

    #[test]
    fn test_configure_rejects_empty_language_table() {
        let temp_dir = TempDir::new().unwrap();
        let (mut session, _) = Session::open(manager_in(&temp_dir));

        let result = session.configure(
            Credentials::new("id", "key").unwrap(),
            LanguageTable::default(),
        );

        assert!(matches!(result, Err(ConfigError::EmptyLanguageTable)));
        assert!(!session.config_path().exists());
        assert!(session.credentials().is_err());
    }
}
