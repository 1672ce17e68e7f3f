use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

fn default_recognition_language() -> String {
    global_constants::DEFAULT_RECOGNITION_LANGUAGE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default = "default_recognition_language")]
    pub recognition_language: String,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub last_export_directory: Option<PathBuf>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            recognition_language: default_recognition_language(),
            theme_mode: ThemeMode::default(),
            last_export_directory: None,
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;
        self.save_to_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let mut settings: UserSettings = serde_json::from_str(&contents)?;

        if settings.recognition_language.trim().is_empty() {
            log::warn!("[SETTINGS] Empty recognition language, falling back to default");
            settings.recognition_language = default_recognition_language();
        }

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!(
            "[SETTINGS] Recognition language: {}",
            settings.recognition_language
        );
        log::debug!("[SETTINGS] Theme: {}", settings.theme_mode);

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_CONFIG_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(test_name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("image-text-extractor-test-{}", test_name))
            .join(global_constants::SETTINGS_FILE_NAME)
    }

    #[test]
    fn test_theme_mode_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_serialization() {
        let serialized = serde_json::to_string(&ThemeMode::Dark).unwrap();
        assert_eq!(serialized, "\"Dark\"");
    }

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(settings.recognition_language, "eng");
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert!(settings.last_export_directory.is_none());
    }

    #[test]
    fn test_user_settings_deserialization_with_missing_fields() {
        let settings: UserSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_load_from_missing_path_writes_defaults() {
        let settings_path = temp_settings_path("missing");
        if let Some(parent) = settings_path.parent() {
            std::fs::remove_dir_all(parent).ok();
        }

        let settings = UserSettings::load_from_path(&settings_path).unwrap();

        assert_eq!(settings, UserSettings::default());
        assert!(settings_path.exists());

        std::fs::remove_dir_all(settings_path.parent().unwrap()).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let settings_path = temp_settings_path("roundtrip");
        let original_settings = UserSettings {
            recognition_language: "eng+deu".to_string(),
            theme_mode: ThemeMode::Dark,
            last_export_directory: Some(PathBuf::from("/tmp/exports")),
        };

        original_settings.save_to_path(&settings_path).unwrap();
        let loaded_settings = UserSettings::load_from_path(&settings_path).unwrap();

        assert_eq!(loaded_settings, original_settings);

        std::fs::remove_dir_all(settings_path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_replaces_blank_language_with_default() {
        let settings_path = temp_settings_path("blank-language");
        std::fs::create_dir_all(settings_path.parent().unwrap()).unwrap();
        std::fs::write(&settings_path, r#"{ "recognition_language": "  " }"#).unwrap();

        let settings = UserSettings::load_from_path(&settings_path).unwrap();

        assert_eq!(settings.recognition_language, "eng");

        std::fs::remove_dir_all(settings_path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let settings_path = temp_settings_path("malformed");
        std::fs::create_dir_all(settings_path.parent().unwrap()).unwrap();
        std::fs::write(&settings_path, "not json").unwrap();

        assert!(UserSettings::load_from_path(&settings_path).is_err());

        std::fs::remove_dir_all(settings_path.parent().unwrap()).ok();
    }
}
