//! Copy generation
//!
//! Prompt templating, the Gemini HTTP client with its retry/fallback
//! policy, and parsing of model output into the AIDA schema.

pub mod client;
pub mod parser;
pub mod prompts;

pub use client::{GeminiClient, FALLBACK_MODEL, PRIMARY_MODEL};
pub use prompts::BatchSpec;

use thiserror::Error;

/// Errors from the generation pipeline.
///
/// The UI maps these to the user-facing messages; everything except the key
/// errors is considered transient and retried by the client.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no API key configured")]
    MissingKey,

    #[error("the API key was rejected")]
    InvalidKey,

    #[error("rate limited on both model variants")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("empty response from the model")]
    Empty,

    #[error("the model response is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("the batch response looks truncated, probably out of quota")]
    Truncated,

    #[error("the batch returned {got} scripts, expected {expected}")]
    BatchShape { expected: usize, got: usize },
}

impl GenerateError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, GenerateError::MissingKey | GenerateError::InvalidKey)
    }

    /// User-facing message, in the product's voice.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::MissingKey => {
                "⚠️ Falta la API Key de Gemini. Configurala arriba.".to_string()
            }
            GenerateError::InvalidKey => {
                "❌ API Key inválida. Verificá que sea correcta.".to_string()
            }
            GenerateError::RateLimited => {
                "Límite de cuota excedido en ambos modelos. Esperá unos minutos.".to_string()
            }
            GenerateError::MalformedJson(_) => {
                "La respuesta de Gemini no es JSON válido. Intentá de nuevo.".to_string()
            }
            GenerateError::Truncated => {
                "La respuesta de Gemini está vacía o incompleta. Probablemente límite de cuota excedido."
                    .to_string()
            }
            other => format!("Error: {other}"),
        }
    }
}
