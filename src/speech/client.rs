//! Google Cloud TTS client
//!
//! POSTs `text:synthesize` and decodes the base64 MP3 payload. Key handling
//! mirrors the generation client: 400 responses that mention the API key are
//! surfaced as `InvalidKey`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::speech::{SsmlGender, TtsError, VoiceSettings};

const API_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
    ssml_gender: SsmlGender,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    speaking_rate: f64,
    pitch: f64,
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Thin client over the Google TTS REST endpoint.
pub struct TtsClient {
    http: reqwest::Client,
}

impl Default for TtsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TtsClient {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client construction only fails on TLS misconfiguration");
        Self { http }
    }

    /// Synthesize a script into MP3 bytes.
    pub async fn synthesize(
        &self,
        api_key: &str,
        text: &str,
        voice: &VoiceSettings,
    ) -> Result<Vec<u8>, TtsError> {
        if api_key.trim().is_empty() {
            return Err(TtsError::MissingKey);
        }

        let request = SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code: &voice.language_code,
                name: &voice.name,
                ssml_gender: voice.gender,
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
                speaking_rate: voice.speaking_rate,
                pitch: voice.pitch,
            },
        };

        let url = format!("{API_URL}?key={api_key}");
        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_default();

            if status.as_u16() == 400 && message.contains("API key") {
                return Err(TtsError::InvalidKey);
            }
            return Err(TtsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SynthesizeResponse =
            serde_json::from_str(&body).map_err(|_| TtsError::NoAudio)?;
        let encoded = parsed.audio_content.ok_or(TtsError::NoAudio)?;
        let bytes = BASE64.decode(encoded.as_bytes())?;

        tracing::debug!("Synthesized {} bytes of MP3", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_matches_the_api_shape() {
        let voice = VoiceSettings::default();
        let request = SynthesizeRequest {
            input: SynthesisInput { text: "Hola" },
            voice: VoiceSelection {
                language_code: &voice.language_code,
                name: &voice.name,
                ssml_gender: voice.gender,
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
                speaking_rate: voice.speaking_rate,
                pitch: voice.pitch,
            },
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["input"]["text"], "Hola");
        assert_eq!(json["voice"]["languageCode"], "es-AR");
        assert_eq!(json["voice"]["ssmlGender"], "MALE");
        assert_eq!(json["audioConfig"]["audioEncoding"], "MP3");
        assert_eq!(json["audioConfig"]["speakingRate"], 1.1);
    }

    #[test]
    fn test_audio_content_decodes_from_base64() {
        let body = r#"{"audioContent":"SUQzBAA="}"#;
        let parsed: SynthesizeResponse = serde_json::from_str(body).unwrap();
        let bytes = BASE64.decode(parsed.audio_content.unwrap().as_bytes()).unwrap();
        assert_eq!(&bytes[..3], b"ID3");
    }

    #[test]
    fn test_missing_audio_content_is_no_audio() {
        let parsed: SynthesizeResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.audio_content.is_none());
    }
}
