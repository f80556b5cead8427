//! Location of the per-user configuration file.
//!
//! The credentials document lives directly in the home directory as
//! `baidu.txt`, so existing installations keep working.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// File name of the credentials document inside the home directory.
pub const CONFIG_FILE_NAME: &str = "baidu.txt";

/// Returns `<home>/baidu.txt`.
pub fn config_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(CONFIG_FILE_NAME))
}

/// Returns the user's home directory.
fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_path_is_in_home() {
        let original = std::env::var("HOME").ok();
        unsafe { std::env::set_var("HOME", "/custom/home") };

        let path = config_path().unwrap();
        assert_eq!(path, PathBuf::from("/custom/home/baidu.txt"));

        // Restore
        if let Some(val) = original {
            unsafe { std::env::set_var("HOME", val) };
        } else {
            unsafe { std::env::remove_var("HOME") };
        }
    }

    #[test]
    fn test_config_file_name() {
        assert_eq!(CONFIG_FILE_NAME, "baidu.txt");
    }
}
