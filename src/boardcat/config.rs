//! # Configuration
//!
//! Stored as `config.json` in the config directory: `BOARDCAT_HOME` when set,
//! else `.boardcat/` in the working directory if it exists, else the user's
//! platform config directory.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `catalog` | `catalog.json` | Catalog file used when `--catalog` is not given |
//! | `show-hidden` | `false` | Also list hidden cards in `boardcat filter` |

use crate::error::{BoardcatError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATALOG: &str = "catalog.json";

/// Keys accepted by `boardcat config`.
pub const CONFIG_KEYS: &[&str] = &["catalog", "show-hidden"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BoardcatConfig {
    /// Catalog file used when none is given on the command line
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// List hidden cards as well as visible ones
    #[serde(default)]
    pub show_hidden: bool,
}

fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}

impl Default for BoardcatConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            show_hidden: false,
        }
    }
}

impl BoardcatConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BoardcatError::Io)?;
        let config = serde_json::from_str(&content).map_err(BoardcatError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BoardcatError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(BoardcatError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(BoardcatError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "catalog" => Ok(self.catalog.clone()),
            "show-hidden" => Ok(self.show_hidden.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "catalog" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(BoardcatError::Config("catalog path cannot be empty".into()));
                }
                self.catalog = value.to_string();
            }
            "show-hidden" => {
                self.show_hidden = value.trim().parse().map_err(|_| {
                    BoardcatError::Config(format!(
                        "show-hidden expects true or false, got '{}'",
                        value
                    ))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> BoardcatError {
    BoardcatError::Config(format!(
        "unknown config key '{}' (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BoardcatConfig::default();
        assert_eq!(config.catalog, "catalog.json");
        assert!(!config.show_hidden);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = BoardcatConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, BoardcatConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".boardcat");

        let mut config = BoardcatConfig::default();
        config.set("catalog", "docs/boards.json").unwrap();
        config.set("show-hidden", "true").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = BoardcatConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.catalog, "docs/boards.json");
        assert!(loaded.show_hidden);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.json"), r#"{"show-hidden": true}"#).unwrap();

        let loaded = BoardcatConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.catalog, "catalog.json");
        assert!(loaded.show_hidden);
    }

    #[test]
    fn test_get_and_set_reject_unknown_keys() {
        let mut config = BoardcatConfig::default();
        assert!(matches!(
            config.set("colour", "red"),
            Err(BoardcatError::Config(_))
        ));
        assert!(config.get("colour").is_err());
        assert!(config.set("show-hidden", "perhaps").is_err());
        assert!(config.set("catalog", "  ").is_err());
        assert_eq!(config.get("show-hidden").unwrap(), "false");
    }
}
