//! Defaults and the optional settings file.
//!
//! The settings file is a small YAML document, by default at
//! `~/.simple-query/config.yml`:
//!
//! ```yaml
//! list_separator: ";"
//! join_separator: "-"
//! ```

use std::fs::File;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Separator used when splitting a single value into a list.
pub const DEFAULT_LIST_SEPARATOR: &str = ",";

/// Separator used when joining every value of a key into one.
pub const DEFAULT_JOIN_SEPARATOR: &str = ",";

/// Epoch values above this (2100-01-01T00:00:00Z in seconds) are read as
/// milliseconds.
pub const MILLISECONDS_THRESHOLD: i64 = 4_102_444_800;

/// Default path for the settings file
const DEFAULT_CONFIG_PATH: &str = "~/.simple-query/config.yml";

/// Resolves the settings file path.
///
/// Uses the custom path when one is given, otherwise the default. Shell
/// expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use simple_query_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub list_separator: Option<String>,
    pub join_separator: Option<String>,
}

impl Settings {
    pub fn list_separator(&self) -> &str {
        self.list_separator
            .as_deref()
            .unwrap_or(DEFAULT_LIST_SEPARATOR)
    }

    pub fn join_separator(&self) -> &str {
        self.join_separator
            .as_deref()
            .unwrap_or(DEFAULT_JOIN_SEPARATOR)
    }
}

/// Reads the settings file at `path`.
///
/// A missing file is not an error and gives the default settings.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be opened, or does not
/// contain valid settings YAML.
pub fn load_settings(path: &str) -> Result<Settings> {
    if !Path::new(path).exists() {
        debug!("No settings file at `{}`, using defaults", path);
        return Ok(Settings::default());
    }

    let reader = File::open(path)
        .map_err(|e| Error::io_error("settings".to_string(), path.to_string(), e))?;

    // An empty file deserializes to `None` rather than failing
    let settings: Option<Settings> = serde_yaml::from_reader(reader)
        .map_err(|e| {
            Error::yaml_error(
                "reading".to_string(),
                "settings".to_string(),
                path.to_string(),
                e,
            )
        })?;

    debug!("Loaded settings from `{}`", path);
    Ok(settings.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/config.yml".to_string());
        assert_eq!(get_config_path(&custom_path), "/custom/path/config.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".simple-query/config.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_threshold_is_year_2100() {
        assert_eq!(MILLISECONDS_THRESHOLD, 4_102_444_800);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.list_separator(), ",");
        assert_eq!(settings.join_separator(), ",");
    }

    #[test]
    fn test_load_settings_missing_file() {
        let settings = load_settings("/definitely/not/here/config.yml").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "list_separator: \";\"\njoin_separator: \"-\"").unwrap();

        let settings = load_settings(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.list_separator(), ";");
        assert_eq!(settings.join_separator(), "-");
    }

    #[test]
    fn test_load_settings_partial() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "join_separator: \"|\"").unwrap();

        let settings = load_settings(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.list_separator(), ",");
        assert_eq!(settings.join_separator(), "|");
    }

    #[test]
    fn test_load_settings_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let settings = load_settings(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_invalid_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "list_separator: [unclosed").unwrap();

        let result = load_settings(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }
}
