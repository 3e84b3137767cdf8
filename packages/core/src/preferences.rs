//! User preferences persisted as JSON in the platform config directory

use crate::settings::PresentationSettings;
use crate::ReaderResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable that overrides the preferences file location
pub const PREFERENCES_ENV: &str = "LECTOR_PREFERENCES";

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Restore the last applied settings on startup
    #[serde(default = "default_remember")]
    pub remember_settings: bool,
    /// Last applied settings
    #[serde(default)]
    pub settings: Option<PresentationSettings>,
}

fn default_remember() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            remember_settings: true,
            settings: None,
        }
    }
}

impl Preferences {
    /// Default preferences file location
    ///
    /// `LECTOR_PREFERENCES` wins when set; otherwise the platform config
    /// directory, falling back to the temp directory.
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(PREFERENCES_ENV) {
            return PathBuf::from(path);
        }

        directories::ProjectDirs::from("app", "lector", "Lector")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("lector"))
            .join(PREFERENCES_FILE)
    }

    /// Load preferences; a missing file yields the defaults
    pub fn load_from(path: &Path) -> ReaderResult<Self> {
        if !path.exists() {
            debug!("No preferences at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let prefs = serde_json::from_str(&json)?;
        debug!("Loaded preferences from {:?}", path);
        Ok(prefs)
    }

    /// Load preferences, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!("Ignoring unreadable preferences at {:?}: {}", path, e);
            Self::default()
        })
    }

    /// Write preferences as pretty JSON, creating parent directories
    pub async fn save_to(&self, path: &Path) -> ReaderResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, json).await?;
        debug!("Saved preferences to {:?}", path);
        Ok(())
    }

    /// Settings to start the session with
    pub fn initial_settings(&self) -> PresentationSettings {
        match (self.remember_settings, self.settings) {
            (true, Some(settings)) => settings,
            _ => PresentationSettings::default(),
        }
    }

    /// Remember the applied settings
    pub fn record(&mut self, settings: PresentationSettings) {
        self.settings = Some(settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BackgroundColor, FontSize};
    use crate::settings::SettingChange;
    use crate::ReaderError;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(PREFERENCES_FILE);

        let mut prefs = Preferences::default();
        prefs.record(
            PresentationSettings::default()
                .with_change(SettingChange::BackgroundColor(BackgroundColor::GRAY)),
        );
        prefs.save_to(&path).await.unwrap();

        let loaded = Preferences::load_from(&path).unwrap();
        assert_eq!(loaded, prefs);
        assert_eq!(
            loaded.initial_settings().background_color,
            BackgroundColor::GRAY
        );
    }

    #[test]
    fn test_unknown_option_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        std::fs::write(
            &path,
            r##"{"remember_settings":true,"settings":{"font_family":"Open Sans",
                "font_size":"72px","font_color":"#000000",
                "background_color":"#FFFFFF","content_width":"1394px"}}"##,
        )
        .unwrap();

        let err = Preferences::load_from(&path).unwrap_err();
        assert!(matches!(err, ReaderError::Serialization(_)));
        assert_eq!(Preferences::load_or_default(&path), Preferences::default());
    }

    #[test]
    fn test_initial_settings_respects_remember_flag() {
        let saved =
            PresentationSettings::default().with_change(SettingChange::FontSize(FontSize::Large));
        let mut prefs = Preferences {
            remember_settings: true,
            settings: Some(saved),
        };
        assert_eq!(prefs.initial_settings(), saved);

        prefs.remember_settings = false;
        assert_eq!(prefs.initial_settings(), PresentationSettings::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert!(prefs.remember_settings);
        assert_eq!(prefs.settings, None);
    }
}
