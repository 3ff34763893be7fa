//! Configuration types
//!
//! Gallery configuration, persisted as `settings.json` by the storage layer.

use crate::types::model::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Gallery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Path to the JSON catalog of models (defaults to `<data dir>/models.json`)
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Language of rendered descriptions
    #[serde(default)]
    pub locale: Locale,
    /// Desktop window title
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Number of card columns on wide windows
    #[serde(default = "default_columns")]
    pub columns: u32,
}

fn default_window_title() -> String {
    "Model Gallery".to_string()
}

fn default_columns() -> u32 {
    4
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            locale: Locale::default(),
            window_title: default_window_title(),
            columns: default_columns(),
        }
    }
}

impl GalleryConfig {
    /// Normalize out-of-range values
    pub fn validate(&mut self) {
        self.columns = self.columns.clamp(1, 6);
        if self.window_title.trim().is_empty() {
            self.window_title = default_window_title();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GalleryConfig::default();
        assert_eq!(config.columns, 4);
        assert_eq!(config.locale, Locale::ZhCn);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.window_title, "Model Gallery");
    }

    #[test]
    fn test_config_validation() {
        let mut config = GalleryConfig::default();

        config.columns = 0;
        config.validate();
        assert_eq!(config.columns, 1);

        config.columns = 12;
        config.validate();
        assert_eq!(config.columns, 6);

        config.window_title = "  ".to_string();
        config.validate();
        assert_eq!(config.window_title, "Model Gallery");
    }

    #[test]
    fn test_config_missing_fields_use_defaults() {
        let config: GalleryConfig = serde_json::from_str(r#"{ "locale": "en_US" }"#)
            .expect("Failed to deserialize");
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.columns, 4);
        assert_eq!(config.window_title, "Model Gallery");
    }
}
