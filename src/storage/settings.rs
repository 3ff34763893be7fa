//! Settings storage
//!
//! Reads the gallery configuration from the data directory.

use crate::storage::{get_data_dir, StorageError};
use crate::types::config::GalleryConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> GalleryConfig {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            GalleryConfig::default()
        }
    }
}

/// Load and validate settings from a specific file
pub fn load_settings_from(path: &Path) -> Result<GalleryConfig, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(GalleryConfig::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: GalleryConfig = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Catalog file to read: the configured one, or `models.json` in the data dir
pub fn resolve_catalog_path(settings: &GalleryConfig) -> Result<PathBuf, StorageError> {
    match &settings.catalog_path {
        Some(path) => Ok(path.clone()),
        None => Ok(get_data_dir()?.join("models.json")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::model::Locale;

    #[test]
    fn test_missing_settings_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, GalleryConfig::default());
    }

    #[test]
    fn test_settings_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = GalleryConfig::default();
        settings.locale = Locale::EnUs;
        settings.columns = 3;
        fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.locale, Locale::EnUs);
        assert_eq!(loaded.columns, 3);
    }

    #[test]
    fn test_loaded_settings_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "columns": 40 }"#).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded.columns, 6);
    }

    #[test]
    fn test_corrupted_settings_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_settings_from(&path),
            Err(StorageError::Json(_))
        ));
    }

    #[test]
    fn test_configured_catalog_path_wins() {
        let mut settings = GalleryConfig::default();
        settings.catalog_path = Some(PathBuf::from("/srv/models.json"));
        assert_eq!(
            resolve_catalog_path(&settings).unwrap(),
            PathBuf::from("/srv/models.json")
        );
    }
}
