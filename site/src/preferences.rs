//! Theme and locale choices, loaded once and persisted on every change.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PreferencesError;
use crate::i18n::{Locale, Translations};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(default)]
    theme: Theme,
    #[serde(default)]
    locale: Locale,
}

#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    stored: StoredPreferences,
}

impl Preferences {
    const FILE_NAME: &'static str = "preferences.json";

    /// `<config dir>/portfolio/preferences.json`, or the working directory
    /// when the platform has no config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("portfolio"))
            .unwrap_or_default()
            .join(Self::FILE_NAME)
    }

    /// Reads saved preferences. A missing file yields the defaults.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();

        let stored = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No saved preferences, using defaults");
                StoredPreferences::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, stored })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn theme(&self) -> Theme {
        self.stored.theme
    }

    pub fn locale(&self) -> Locale {
        self.stored.locale
    }

    pub fn translations(&self) -> &'static Translations {
        self.stored.locale.translations()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), PreferencesError> {
        self.stored.theme = theme;
        self.persist()
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, PreferencesError> {
        let theme = self.stored.theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    pub fn set_locale(&mut self, locale: Locale) -> Result<(), PreferencesError> {
        self.stored.locale = locale;
        self.persist()
    }

    fn persist(&self) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.stored)?)?;
        info!(
            theme = ?self.stored.theme,
            locale = %self.stored.locale,
            "Preferences saved"
        );
        Ok(())
    }
}
