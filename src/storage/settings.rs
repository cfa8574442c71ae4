//! Settings storage
//!
//! Manages persistence of API keys, theme preference, voice configuration
//! and the export directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::speech::VoiceSettings;
use crate::storage::{get_data_dir, StorageError};

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    /// Follow the OS preference
    System,
}

impl Theme {
    /// Next theme in the toggle cycle: dark → light → system → dark
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::System,
            Theme::System => Theme::Dark,
        }
    }

    /// Spanish label for the theme tooltip
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Oscuro",
            Theme::Light => "Claro",
            Theme::System => "Sistema",
        }
    }

    /// The concrete stylesheet variant to apply.
    ///
    /// A desktop webview has no `prefers-color-scheme` hook we control, so
    /// `System` resolves to dark, the theme the product ships with.
    pub fn resolved(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark | Theme::System => "dark",
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Gemini API key used for copy and headline generation
    #[serde(default)]
    pub gemini_api_key: String,
    /// Google Cloud TTS API key used for voiceover synthesis
    #[serde(default)]
    pub tts_api_key: String,
    /// UI theme
    pub theme: Theme,
    /// Voice used for voiceover synthesis
    pub voice: VoiceSettings,
    /// Where exports are written; `None` means the platform download dir
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            tts_api_key: String::new(),
            theme: Theme::Dark,
            voice: VoiceSettings::default(),
            export_dir: None,
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Clamps the voice parameters to the ranges the TTS API accepts and
    /// trims whitespace that tends to sneak in when keys are pasted.
    pub fn validate(&mut self) {
        self.gemini_api_key = self.gemini_api_key.trim().to_string();
        self.tts_api_key = self.tts_api_key.trim().to_string();
        self.voice.speaking_rate = self.voice.speaking_rate.clamp(0.25, 4.0);
        self.voice.pitch = self.voice.pitch.clamp(-20.0, 20.0);

        if self.voice.language_code.trim().is_empty() {
            self.voice.language_code = VoiceSettings::default().language_code;
        }
        if self.voice.name.trim().is_empty() {
            self.voice.name = VoiceSettings::default().name;
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match load_settings_internal() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Internal settings loading with error propagation
fn load_settings_internal() -> Result<AppSettings, StorageError> {
    let path = get_settings_path()?;

    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(&path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from disk");
    Ok(settings)
}

/// Save settings to disk
pub fn save_settings(settings: &AppSettings) -> Result<(), StorageError> {
    let path = get_settings_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to disk");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert!(settings.gemini_api_key.is_empty());
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.voice.language_code, "es-AR");
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        settings.gemini_api_key = "  AIza-something  ".to_string();
        settings.voice.speaking_rate = 9.0;
        settings.voice.pitch = -50.0;
        settings.voice.name = "   ".to_string();
        settings.validate();

        assert_eq!(settings.gemini_api_key, "AIza-something");
        assert_eq!(settings.voice.speaking_rate, 4.0);
        assert_eq!(settings.voice.pitch, -20.0);
        assert_eq!(settings.voice.name, VoiceSettings::default().name);
    }

    #[test]
    fn test_theme_cycle() {
        assert_eq!(Theme::Dark.next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::System);
        assert_eq!(Theme::System.next(), Theme::Dark);
    }

    #[test]
    fn test_settings_serialization() {
        let mut settings = AppSettings::default();
        settings.theme = Theme::System;
        settings.gemini_api_key = "k".to_string();

        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: AppSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_missing_key_fields_default_to_empty() {
        // Settings written by an older build without key fields still load
        let json = r#"{"theme":"light","voice":{"language_code":"es-AR","name":"es-AR-Neural2-B","gender":"MALE","speaking_rate":1.1,"pitch":0.0}}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.gemini_api_key.is_empty());
    }
}
