//! User settings for Outlay
//!
//! Manages user preferences including the currency symbol, date label format,
//! the length of the undo window and the ordered category list.

use serde::{Deserialize, Serialize};

use super::paths::OutlayPaths;
use crate::error::OutlayError;
use crate::models::Category;

/// A category as declared in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySeed {
    /// Display title
    pub title: String,
    /// Short glyph shown in the category grid
    #[serde(default)]
    pub icon: String,
}

impl CategorySeed {
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
        }
    }
}

/// User settings for Outlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in confirmations and summaries
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime format for the selected-date label
    #[serde(default = "default_long_date_format")]
    pub long_date_format: String,

    /// How long a recorded expense can be reversed, in seconds
    #[serde(default = "default_undo_window_secs")]
    pub undo_window_secs: u64,

    /// Whether expense creation and deletion are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Ordered category list shown in the grid
    #[serde(default = "default_categories")]
    pub categories: Vec<CategorySeed>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_long_date_format() -> String {
    "%B %-d, %Y".to_string()
}

fn default_undo_window_secs() -> u64 {
    4
}

fn default_audit_enabled() -> bool {
    true
}

fn default_categories() -> Vec<CategorySeed> {
    vec![
        CategorySeed::new("Food", "F"),
        CategorySeed::new("Transport", "T"),
        CategorySeed::new("Shopping", "S"),
        CategorySeed::new("Health", "H"),
        CategorySeed::new("Fun", "*"),
        CategorySeed::new("Home", "^"),
        CategorySeed::new("Bills", "$"),
        CategorySeed::new("Gifts", "G"),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            long_date_format: default_long_date_format(),
            undo_window_secs: default_undo_window_secs(),
            audit_enabled: default_audit_enabled(),
            categories: default_categories(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OutlayPaths) -> Result<Self, OutlayError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| OutlayError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                OutlayError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Check that every category seed makes a usable grid entry
    pub fn validate(&self) -> Result<(), OutlayError> {
        for (i, category) in Category::from_seeds(&self.categories).iter().enumerate() {
            category
                .validate()
                .map_err(|e| OutlayError::Config(format!("Category #{}: {}", i + 1, e)))?;
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OutlayPaths) -> Result<(), OutlayError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| OutlayError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| OutlayError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.undo_window_secs, 4);
        assert!(settings.audit_enabled);
        assert_eq!(settings.categories.len(), 8);
        assert_eq!(settings.categories[0].title, "Food");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.undo_window_secs = 10;
        settings.categories = vec![CategorySeed::new("Coffee", "c")];

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.undo_window_secs, 10);
        assert_eq!(loaded.categories, vec![CategorySeed::new("Coffee", "c")]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.long_date_format, "%B %-d, %Y");
        assert_eq!(settings.categories.len(), 8);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, OutlayError::Config(_)));
    }

    #[test]
    fn test_blank_category_title_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OutlayPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"categories": [{"title": "Food"}, {"title": "  "}]}"#,
        )
        .unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, OutlayError::Config(_)));
        assert!(err.to_string().contains("Category #2"));
    }

    #[test]
    fn test_default_categories_validate() {
        assert!(Settings::default().validate().is_ok());

        let mut settings = Settings::default();
        settings.categories.push(CategorySeed::new("x".repeat(51), ""));
        assert!(settings.validate().is_err());
    }
}
