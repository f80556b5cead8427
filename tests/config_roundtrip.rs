#![allow(clippy::unwrap_used)]
//! Config document contract tests.
//!
//! The document at `~/baidu.txt` is shared with older installs, so its
//! shape (`appid`, `appkey`, `language`) must survive a save/load cycle.

use std::fs;
use strings_tl::config::{
    ConfigError, ConfigFile, ConfigManager, Credentials, LanguageTable, LoadStatus, Session,
};
use tempfile::TempDir;

fn manager(temp_dir: &TempDir) -> ConfigManager {
    ConfigManager::with_path(temp_dir.path().join("baidu.txt"))
}

#[test]
fn test_save_then_load_is_identical() {
    let temp_dir = TempDir::new().unwrap();
    let manager = manager(&temp_dir);

    let config = ConfigFile {
        appid: "20240101000000001".to_string(),
        appkey: "k3y".to_string(),
        language: [("中文", "zh"), ("英语", "en"), ("日语", "jp")]
            .into_iter()
            .collect(),
    };

    manager.save(&config).unwrap();
    assert_eq!(manager.load().unwrap(), config);
}

#[test]
fn test_saved_document_uses_expected_field_names() {
    let temp_dir = TempDir::new().unwrap();
    let manager = manager(&temp_dir);

    manager
        .save(&ConfigFile {
            appid: "id".to_string(),
            appkey: "key".to_string(),
            language: LanguageTable::builtin(),
        })
        .unwrap();

    let raw = fs::read_to_string(manager.config_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["appid"], "id");
    assert_eq!(json["appkey"], "key");
    assert_eq!(json["language"]["French"], "fra");
}

#[test]
fn test_missing_invalid_and_incomplete_are_distinct() {
    let temp_dir = TempDir::new().unwrap();
    let manager = manager(&temp_dir);

    assert!(matches!(manager.load(), Err(ConfigError::NotFound { .. })));

    fs::write(manager.config_path(), "not json").unwrap();
    assert!(matches!(manager.load(), Err(ConfigError::Invalid { .. })));

    fs::write(manager.config_path(), r#"{"appid": "id"}"#).unwrap();
    let loaded = manager.load().unwrap();
    assert!(matches!(loaded.credentials(), Err(ConfigError::Incomplete)));
}

#[test]
fn test_session_lifecycle() {
    let temp_dir = TempDir::new().unwrap();

    let (mut session, status) = Session::open(manager(&temp_dir));
    assert_eq!(status, LoadStatus::NotFound);
    assert!(session.credentials().is_err());
    assert_eq!(session.languages(), &LanguageTable::builtin());

    let languages: LanguageTable = [("German", "de")].into_iter().collect();
    session
        .configure(Credentials::new("id", "key").unwrap(), languages.clone())
        .unwrap();

    let (reopened, status) = Session::open(manager(&temp_dir));
    assert_eq!(status, LoadStatus::Ready);
    assert_eq!(reopened.languages(), &languages);
    assert_eq!(reopened.credentials().unwrap(), session.credentials().unwrap());
}
