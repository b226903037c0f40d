use std::path::Path;

use serde::Deserialize;

use crate::core::errors::{Result, SlotSyncError};

/// Optional project configuration read from `.slotsync.toml`.
///
/// Everything has a sensible default; the file only exists to change
/// the default slot-setting candidates or the az binary path.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub slot_settings: SlotSettingsSection,
    #[serde(default)]
    pub azure: AzureSection,
}

impl AppConfig {
    /// Load the configuration.
    ///
    /// An explicitly given path must exist; the default `.slotsync.toml`
    /// is optional and its absence yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let default_path = Path::new(".slotsync.toml");
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(SlotSyncError::InvalidConfig {
                        detail: format!("config file not found: {}", p.display()),
                    });
                }
                p
            }
            None => {
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| SlotSyncError::InvalidConfig {
            detail: format!("failed to parse {}: {e}", path.display()),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            slot_settings: SlotSettingsSection::default(),
            azure: AzureSection::default(),
        }
    }
}

/// The `[slot_settings]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SlotSettingsSection {
    /// Keys conventionally considered environment-specific, offered as
    /// the default sticky set for slot targets.
    #[serde(default = "default_candidates")]
    pub defaults: Vec<String>,
}

impl Default for SlotSettingsSection {
    fn default() -> Self {
        Self {
            defaults: default_candidates(),
        }
    }
}

/// The `[azure]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AzureSection {
    /// Path to the az binary.
    #[serde(default = "default_cli_path")]
    pub cli_path: String,
}

impl Default for AzureSection {
    fn default() -> Self {
        Self {
            cli_path: default_cli_path(),
        }
    }
}

fn default_candidates() -> Vec<String> {
    ["NODE_ENV", "DATABASE_URL", "API_KEY"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_cli_path() -> String {
    "az".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_yields_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(
            config.slot_settings.defaults,
            vec!["NODE_ENV", "DATABASE_URL", "API_KEY"]
        );
        assert_eq!(config.azure.cli_path, "az");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = AppConfig::load(Some(Path::new("nope.toml"))).unwrap_err();
        assert!(matches!(err, SlotSyncError::InvalidConfig { .. }));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slotsync.toml");
        std::fs::write(&path, "[slot_settings]\ndefaults = [\"RUNTIME_MODE\"]\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.slot_settings.defaults, vec!["RUNTIME_MODE"]);
        assert_eq!(config.azure.cli_path, "az");
    }

    #[test]
    fn bad_toml_is_an_invalid_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slotsync.toml");
        std::fs::write(&path, "not toml at all [[[").unwrap();

        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, SlotSyncError::InvalidConfig { .. }));
    }
}
