//! Voiceover synthesis and playback
//!
//! Google Cloud Text-to-Speech turns a finished script into MP3 bytes; the
//! player decodes and plays them on a dedicated audio thread.

pub mod client;
pub mod playback;

pub use client::TtsClient;
pub use playback::AudioPlayer;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// SSML voice gender, as the TTS API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SsmlGender {
    Male,
    Female,
    Neutral,
}

/// Voice configuration for voiceover synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub language_code: String,
    pub name: String,
    pub gender: SsmlGender,
    pub speaking_rate: f64,
    pub pitch: f64,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        // The house voice: Argentine Spanish, slightly faster than neutral
        // so a 90-word script lands near the 30s mark.
        Self {
            language_code: "es-AR".to_string(),
            name: "es-AR-Neural2-B".to_string(),
            gender: SsmlGender::Male,
            speaking_rate: 1.1,
            pitch: 0.0,
        }
    }
}

/// Errors from synthesis or playback.
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("no TTS API key configured")]
    MissingKey,

    #[error("the TTS API key was rejected")]
    InvalidKey,

    #[error("TTS API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("the response carried no audio content")]
    NoAudio,

    #[error("audio content is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("audio playback failed: {0}")]
    Playback(String),
}

impl TtsError {
    /// User-facing message, in the product's voice.
    pub fn user_message(&self) -> String {
        match self {
            TtsError::MissingKey => {
                "⚠️ Falta la API Key de Google TTS. Configurala arriba.".to_string()
            }
            TtsError::InvalidKey => {
                "❌ API Key de TTS inválida. Verificá que sea correcta.".to_string()
            }
            other => format!("Error de audio: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_voice_is_the_house_voice() {
        let voice = VoiceSettings::default();
        assert_eq!(voice.language_code, "es-AR");
        assert_eq!(voice.name, "es-AR-Neural2-B");
        assert_eq!(voice.gender, SsmlGender::Male);
        assert!((voice.speaking_rate - 1.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gender_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&SsmlGender::Female).unwrap(), "\"FEMALE\"");
        let back: SsmlGender = serde_json::from_str("\"NEUTRAL\"").unwrap();
        assert_eq!(back, SsmlGender::Neutral);
    }
}
