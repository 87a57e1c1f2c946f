use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Session settings read from an optional TOML file.
///
/// ```toml
/// title = "Dork"
/// log = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Shown in the welcome banner.
    pub title: String,
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "Dork".to_string(),
            log: "warn".to_string(),
        }
    }
}

pub fn load_config_from_file(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path)?;
    load_config_from_str(&text)
}

pub fn load_config_from_str(text: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(load_config_from_str("").unwrap(), Config::default());
    }

    #[test]
    fn fields_override_defaults() {
        let cfg = load_config_from_str("title = \"Zork\"\n").unwrap();
        assert_eq!(cfg.title, "Zork");
        assert_eq!(cfg.log, "warn");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = load_config_from_str("rooms = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_config_from_file(Path::new("/nonexistent/dork.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
