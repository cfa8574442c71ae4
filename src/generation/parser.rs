//! Model-output parsing
//!
//! Gemini is asked for bare JSON but routinely wraps it in markdown fences
//! or stray prose. Extraction strips the fences and slices to the outermost
//! object/array before handing the payload to serde.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use uuid::Uuid;

use crate::generation::prompts::BatchSpec;
use crate::generation::GenerateError;
use crate::types::copy::estimate_secs;
use crate::types::{BuyerPersona, FunnelStage, GeneratedCopy, GeneratedHeadline};

/// A batch response this short cannot hold a single full script; it is the
/// signature of quota-truncated output.
const MIN_BATCH_PAYLOAD_LEN: usize = 100;

static FENCE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\s*").unwrap());
static FENCE_ANY: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\s*").unwrap());
static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());
static JSON_ARRAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").unwrap());

/// One script as it comes off the wire. Field names are the Spanish keys the
/// prompt demands.
#[derive(Debug, Deserialize)]
pub struct RawScript {
    #[serde(rename = "atencion")]
    pub attention: String,
    #[serde(rename = "interes")]
    pub interest: String,
    #[serde(rename = "deseo")]
    pub desire: String,
    #[serde(rename = "accion")]
    pub action: String,
    #[serde(rename = "visual_atencion")]
    pub visual_attention: Option<String>,
    #[serde(rename = "visual_interes")]
    pub visual_interest: Option<String>,
    #[serde(rename = "visual_deseo")]
    pub visual_desire: Option<String>,
    #[serde(rename = "visual_accion")]
    pub visual_action: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawHeadline {
    headline: String,
    #[serde(rename = "contexto", default)]
    context: String,
}

/// Strip markdown fences and surrounding noise from a model payload.
pub fn clean_payload(text: &str) -> String {
    let text = FENCE_OPEN.replace_all(text, "");
    let text = FENCE_ANY.replace_all(&text, "");
    text.trim().to_string()
}

/// Slice a cleaned payload down to its outermost JSON object.
pub fn extract_object(text: &str) -> Option<&str> {
    JSON_OBJECT.find(text).map(|m| m.as_str())
}

/// Slice a cleaned payload down to its outermost JSON array.
pub fn extract_array(text: &str) -> Option<&str> {
    JSON_ARRAY.find(text).map(|m| m.as_str())
}

/// Attach metrics and request context to a raw script.
fn assemble(raw: RawScript, persona: BuyerPersona, funnel: FunnelStage) -> GeneratedCopy {
    let full_text = format!(
        "{} {} {} {}",
        raw.attention, raw.interest, raw.desire, raw.action
    );
    let words = full_text.split_whitespace().count();

    GeneratedCopy {
        id: Uuid::new_v4().to_string(),
        attention: raw.attention,
        interest: raw.interest,
        desire: raw.desire,
        action: raw.action,
        visual_attention: raw.visual_attention,
        visual_interest: raw.visual_interest,
        visual_desire: raw.visual_desire,
        visual_action: raw.visual_action,
        full_text,
        words,
        time_secs: estimate_secs(words),
        persona,
        funnel,
        timestamp: Utc::now(),
        is_favorite: false,
    }
}

/// Parse a single-copy response.
pub fn parse_copy(
    payload: &str,
    persona: &BuyerPersona,
    funnel: FunnelStage,
) -> Result<GeneratedCopy, GenerateError> {
    let cleaned = clean_payload(payload);
    let json = extract_object(&cleaned).unwrap_or(&cleaned);
    let raw: RawScript = serde_json::from_str(json)?;
    Ok(assemble(raw, persona.clone(), funnel))
}

/// Parse a batch response, pairing element *i* with request spec *i*.
pub fn parse_batch(
    payload: &str,
    specs: &[BatchSpec],
) -> Result<Vec<GeneratedCopy>, GenerateError> {
    if payload.len() < MIN_BATCH_PAYLOAD_LEN {
        return Err(GenerateError::Truncated);
    }

    let cleaned = clean_payload(payload);
    let json = extract_array(&cleaned).unwrap_or(&cleaned);
    let raw: Vec<RawScript> = serde_json::from_str(json)?;

    if raw.len() != specs.len() {
        return Err(GenerateError::BatchShape {
            expected: specs.len(),
            got: raw.len(),
        });
    }

    Ok(raw
        .into_iter()
        .zip(specs)
        .map(|(script, spec)| assemble(script, spec.persona.clone(), spec.funnel))
        .collect())
}

/// Parse a headline response.
pub fn parse_headline(payload: &str) -> Result<GeneratedHeadline, GenerateError> {
    let cleaned = clean_payload(payload);
    let json = extract_object(&cleaned).unwrap_or(&cleaned);
    let raw: RawHeadline = serde_json::from_str(json)?;
    Ok(GeneratedHeadline {
        id: Uuid::new_v4().to_string(),
        text: raw.headline,
        context: raw.context,
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::persona_by_id;

    const SCRIPT: &str = r#"{"atencion": "Esa pared.", "visual_atencion": "Close-up pared", "interes": "Ya sé, el albañil nunca llega.", "visual_interes": "Mujer esperando", "deseo": "Placas 3D, las pegás vos misma en una tarde.", "visual_deseo": "Time-lapse", "accion": "Envío gratis, entrá ahora.", "visual_accion": "Texto animado"}"#;

    fn persona() -> &'static BuyerPersona {
        persona_by_id("mama-renovadora").unwrap()
    }

    #[test]
    fn test_parse_plain_json() {
        let copy = parse_copy(SCRIPT, persona(), FunnelStage::Tof).unwrap();
        assert_eq!(copy.attention, "Esa pared.");
        assert_eq!(copy.visual_desire.as_deref(), Some("Time-lapse"));
        assert_eq!(copy.funnel, FunnelStage::Tof);
        assert!(copy.full_text.starts_with("Esa pared. Ya sé"));
        assert_eq!(copy.words, copy.full_text.split_whitespace().count());
        assert_eq!(copy.time_secs, estimate_secs(copy.words));
    }

    #[test]
    fn test_parse_fenced_json() {
        let fenced = format!("```json\n{SCRIPT}\n```");
        let copy = parse_copy(&fenced, persona(), FunnelStage::Mof).unwrap();
        assert_eq!(copy.action, "Envío gratis, entrá ahora.");
    }

    #[test]
    fn test_parse_json_with_surrounding_prose() {
        let noisy = format!("Claro, acá está tu copy:\n{SCRIPT}\nEspero que sirva!");
        let copy = parse_copy(&noisy, persona(), FunnelStage::Tof).unwrap();
        assert_eq!(copy.attention, "Esa pared.");
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_copy("no json here", persona(), FunnelStage::Tof).unwrap_err();
        assert!(matches!(err, GenerateError::MalformedJson(_)));
    }

    #[test]
    fn test_missing_visuals_are_none() {
        let minimal = r#"{"atencion": "a", "interes": "b", "deseo": "c", "accion": "d"}"#;
        let copy = parse_copy(minimal, persona(), FunnelStage::Bof).unwrap();
        assert!(copy.visual_attention.is_none());
        assert_eq!(copy.full_text, "a b c d");
        assert_eq!(copy.words, 4);
    }

    #[test]
    fn test_parse_batch_pairs_specs_in_order() {
        let specs = vec![
            BatchSpec { persona: persona().clone(), funnel: FunnelStage::Tof },
            BatchSpec { persona: persona_by_id("abuela").unwrap().clone(), funnel: FunnelStage::Bof },
        ];
        let payload = format!("```json\n[{SCRIPT},{SCRIPT}]\n```");
        let copies = parse_batch(&payload, &specs).unwrap();

        assert_eq!(copies.len(), 2);
        assert_eq!(copies[0].funnel, FunnelStage::Tof);
        assert_eq!(copies[1].funnel, FunnelStage::Bof);
        assert_eq!(copies[1].persona.id, "abuela");
        assert_ne!(copies[0].id, copies[1].id);
    }

    #[test]
    fn test_parse_batch_rejects_wrong_count() {
        let specs = vec![
            BatchSpec { persona: persona().clone(), funnel: FunnelStage::Tof },
            BatchSpec { persona: persona().clone(), funnel: FunnelStage::Mof },
            BatchSpec { persona: persona().clone(), funnel: FunnelStage::Bof },
        ];
        let payload = format!("[{SCRIPT},{SCRIPT}]");
        let err = parse_batch(&payload, &specs).unwrap_err();
        assert!(matches!(err, GenerateError::BatchShape { expected: 3, got: 2 }));
    }

    #[test]
    fn test_parse_batch_flags_truncated_payload() {
        let specs = vec![BatchSpec { persona: persona().clone(), funnel: FunnelStage::Tof }];
        let err = parse_batch("[]", &specs).unwrap_err();
        assert!(matches!(err, GenerateError::Truncated));
    }

    #[test]
    fn test_parse_headline() {
        let payload = "```json\n{\"headline\": \"Mes nuevo, casa nueva\", \"contexto\": \"principio de mes\"}\n```";
        let headline = parse_headline(payload).unwrap();
        assert_eq!(headline.text, "Mes nuevo, casa nueva");
        assert_eq!(headline.context, "principio de mes");
    }
}
