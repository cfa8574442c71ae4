//! Gemini HTTP client
//!
//! One client instance is shared by the whole app; the API key is passed per
//! call because the user can change it at any time from the key panel.
//!
//! Retry policy: up to 3 attempts with a linear 1s/2s backoff. Inside each
//! attempt a 429 from the primary model triggers a single try against the
//! fallback variant before the attempt counts as failed. Key errors abort
//! immediately, they never get better on retry.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::generation::parser;
use crate::generation::prompts::{self, BatchSpec};
use crate::generation::GenerateError;
use crate::types::{BuyerPersona, FunnelStage, GeneratedCopy, GeneratedHeadline};

/// Model tried first on every request.
pub const PRIMARY_MODEL: &str = "gemini-2.0-flash";
/// Model tried when the primary is rate-limited.
pub const FALLBACK_MODEL: &str = "gemini-2.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const MAX_ATTEMPTS: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Output budget for a single copy.
const COPY_MAX_TOKENS: u32 = 4000;
/// Output budget for a batch; arrays need room for every element.
const BATCH_MAX_TOKENS: u32 = 8000;

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

// ============================================================================
// Client
// ============================================================================

/// Thin client over the `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiClient {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client construction only fails on TLS misconfiguration");
        Self { http }
    }

    /// Generate one AIDA copy for a persona and funnel stage.
    pub async fn generate_copy(
        &self,
        api_key: &str,
        persona: &BuyerPersona,
        funnel: FunnelStage,
    ) -> Result<GeneratedCopy, GenerateError> {
        let prompt = format!(
            "{}\n\n{}",
            prompts::SYSTEM_PROMPT,
            prompts::build_copy_prompt(persona, funnel)
        );
        let payload = self.generate(api_key, &prompt, COPY_MAX_TOKENS).await?;
        parser::parse_copy(&payload, persona, funnel)
    }

    /// Generate a whole batch of copies in a single aggregated request.
    pub async fn generate_batch(
        &self,
        api_key: &str,
        specs: &[BatchSpec],
    ) -> Result<Vec<GeneratedCopy>, GenerateError> {
        let prompt = format!(
            "{}\n\n{}",
            prompts::SYSTEM_PROMPT,
            prompts::build_batch_prompt(specs)
        );
        let payload = self.generate(api_key, &prompt, BATCH_MAX_TOKENS).await?;
        parser::parse_batch(&payload, specs)
    }

    /// Generate a short image headline for today's date.
    pub async fn generate_headline(
        &self,
        api_key: &str,
        date: chrono::NaiveDate,
    ) -> Result<GeneratedHeadline, GenerateError> {
        let prompt = prompts::build_headline_prompt(date);
        let payload = self.generate(api_key, &prompt, 256).await?;
        parser::parse_headline(&payload)
    }

    /// Cheap probe used by the key tester. Succeeds iff the key works.
    pub async fn check_key(&self, api_key: &str) -> Result<(), GenerateError> {
        if api_key.trim().is_empty() {
            return Err(GenerateError::MissingKey);
        }
        match self
            .call_model(api_key, FALLBACK_MODEL, prompts::KEY_CHECK_PROMPT, 10, false)
            .await
        {
            Ok(_) => Ok(()),
            // The probe itself can be rate-limited; try the other variant.
            Err(GenerateError::Api { status: 429, .. }) => self
                .call_model(api_key, PRIMARY_MODEL, prompts::KEY_CHECK_PROMPT, 10, false)
                .await
                .map(|_| ()),
            Err(e) => Err(e),
        }
    }

    /// Run a prompt with the full retry/fallback policy and return the raw
    /// model text.
    pub async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        max_output_tokens: u32,
    ) -> Result<String, GenerateError> {
        if api_key.trim().is_empty() {
            return Err(GenerateError::MissingKey);
        }

        let mut last_err = GenerateError::Empty;

        for attempt in 1..=MAX_ATTEMPTS {
            let result = self
                .call_model(api_key, PRIMARY_MODEL, prompt, max_output_tokens, true)
                .await;

            let err = match result {
                Ok(text) => return Ok(text),
                Err(GenerateError::Api { status: 429, .. }) => {
                    tracing::info!("{} rate-limited, trying {}", PRIMARY_MODEL, FALLBACK_MODEL);
                    match self
                        .call_model(api_key, FALLBACK_MODEL, prompt, max_output_tokens, true)
                        .await
                    {
                        Ok(text) => return Ok(text),
                        Err(GenerateError::Api { status: 429, .. }) => GenerateError::RateLimited,
                        Err(e) => e,
                    }
                }
                Err(e) => e,
            };

            if !err.is_retryable() || attempt == MAX_ATTEMPTS {
                return Err(err);
            }

            tracing::warn!("Generation attempt {}/{} failed: {}", attempt, MAX_ATTEMPTS, err);
            tokio::time::sleep(Duration::from_secs(attempt as u64)).await;
            last_err = err;
        }

        Err(last_err)
    }

    /// One POST against one model variant.
    async fn call_model(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
        max_output_tokens: u32,
        json_response: bool,
    ) -> Result<String, GenerateError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt.to_string() }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.9,
                max_output_tokens,
                response_mime_type: json_response.then(|| "application/json".to_string()),
            },
        };

        let url = format!("{API_BASE}/{model}:generateContent?key={api_key}");
        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| "Unknown".to_string());

            if status.as_u16() == 400 && message.contains("API key") {
                return Err(GenerateError::InvalidKey);
            }
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        parsed
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .and_then(|p| p.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(GenerateError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_not_retryable() {
        assert!(!GenerateError::MissingKey.is_retryable());
        assert!(!GenerateError::InvalidKey.is_retryable());
        assert!(GenerateError::RateLimited.is_retryable());
        assert!(GenerateError::Empty.is_retryable());
        assert!(GenerateError::Api { status: 500, message: "boom".into() }.is_retryable());
    }

    #[test]
    fn test_request_serializes_with_camel_case_config() {
        let request = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: "hola".into() }] }],
            generation_config: GenerationConfig {
                temperature: 0.9,
                max_output_tokens: 4000,
                response_mime_type: Some("application/json".into()),
            },
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "hola");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 4000);
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
    }

    #[test]
    fn test_plain_text_probe_omits_mime_type() {
        let config = GenerationConfig {
            temperature: 0.9,
            max_output_tokens: 10,
            response_mime_type: None,
        };
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("responseMimeType").is_none());
    }

    #[test]
    fn test_response_text_extraction_shape() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"atencion\":\"x\"}"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        let text = parsed
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .and_then(|p| p.into_iter().next())
            .and_then(|p| p.text)
            .unwrap();
        assert_eq!(text, "{\"atencion\":\"x\"}");
    }

    #[test]
    fn test_error_body_extraction() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key."}}"#;
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap();
        let message = parsed.error.and_then(|e| e.message).unwrap();
        assert!(message.contains("API key"));
    }

    #[test]
    fn test_user_messages_for_key_errors() {
        assert!(GenerateError::MissingKey.user_message().contains("Falta la API Key"));
        assert!(GenerateError::InvalidKey.user_message().contains("inválida"));
    }
}
