//! Generated-copy types
//!
//! A generated copy is one AIDA video-ad script: four spoken sections, each
//! paired with a visual direction for the editor, plus derived metrics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::persona::{BuyerPersona, FunnelStage};

/// Words per second of a natural Argentine voiceover read.
pub const WORDS_PER_SECOND: f64 = 2.7;

/// A complete AIDA ad script as produced by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCopy {
    pub id: String,
    /// Hook that stops the scroll (0-5 s)
    pub attention: String,
    /// Context and identification (5-15 s)
    pub interest: String,
    /// Product as transformation, the longest part (15-35 s)
    pub desire: String,
    /// Urgent CTA with the offer (35-45 s)
    pub action: String,
    pub visual_attention: Option<String>,
    pub visual_interest: Option<String>,
    pub visual_desire: Option<String>,
    pub visual_action: Option<String>,
    /// The four sections joined for the voiceover read
    pub full_text: String,
    /// Word count of `full_text`
    pub words: usize,
    /// Estimated read time in seconds at [`WORDS_PER_SECOND`]
    pub time_secs: u32,
    pub persona: BuyerPersona,
    pub funnel: FunnelStage,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl GeneratedCopy {
    /// The (section, visual) pairs in AIDA order, for rendering and exports.
    pub fn scenes(&self) -> [(&'static str, &str, Option<&str>); 4] {
        [
            ("ATENCIÓN", self.attention.as_str(), self.visual_attention.as_deref()),
            ("INTERÉS", self.interest.as_str(), self.visual_interest.as_deref()),
            ("DESEO", self.desire.as_str(), self.visual_desire.as_deref()),
            ("ACCIÓN", self.action.as_str(), self.visual_action.as_deref()),
        ]
    }
}

/// Estimate spoken duration for a word count.
pub fn estimate_secs(words: usize) -> u32 {
    (words as f64 / WORDS_PER_SECOND).round() as u32
}

/// How a batch distributes its copies across funnel stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchStyle {
    /// One of each stage, then weighted-random extras
    Assorted,
    /// Rotate TOF/MOF/BOF
    Classic,
    /// Every copy from a single stage
    Only(FunnelStage),
}

impl BatchStyle {
    /// Key used by the style selector and stored batches.
    pub fn key(self) -> String {
        match self {
            BatchStyle::Assorted => "uno-cada-uno".to_string(),
            BatchStyle::Classic => "mixto".to_string(),
            BatchStyle::Only(stage) => stage.key().to_string(),
        }
    }

    /// Inverse of [`BatchStyle::key`].
    pub fn from_key(key: &str) -> Option<BatchStyle> {
        match key {
            "uno-cada-uno" => Some(BatchStyle::Assorted),
            "mixto" => Some(BatchStyle::Classic),
            other => other.parse().ok().map(BatchStyle::Only),
        }
    }

    /// Expand the style into a concrete per-copy funnel list.
    pub fn funnel_list(self, count: usize, mut pick_extra: impl FnMut() -> FunnelStage) -> Vec<FunnelStage> {
        match self {
            BatchStyle::Assorted => {
                let mut list: Vec<FunnelStage> = FunnelStage::ALL.to_vec();
                while list.len() < count {
                    list.push(pick_extra());
                }
                list.truncate(count);
                list
            }
            BatchStyle::Classic => (0..count)
                .map(|i| FunnelStage::CLASSIC[i % FunnelStage::CLASSIC.len()])
                .collect(),
            BatchStyle::Only(stage) => vec![stage; count],
        }
    }
}

/// A batch of copies generated in a single aggregated request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: String,
    pub copies: Vec<GeneratedCopy>,
    pub timestamp: DateTime<Utc>,
    pub count: usize,
    pub style: BatchStyle,
}

/// A short image headline generated for ad creatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedHeadline {
    pub id: String,
    pub text: String,
    /// The model's one-line reason for the headline
    pub context: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_secs_rounds() {
        // 81 words at 2.7 w/s = 30 s exactly
        assert_eq!(estimate_secs(81), 30);
        assert_eq!(estimate_secs(0), 0);
        // 70 / 2.7 = 25.9 -> 26
        assert_eq!(estimate_secs(70), 26);
    }

    #[test]
    fn test_assorted_list_starts_with_one_of_each() {
        let list = BatchStyle::Assorted.funnel_list(8, || FunnelStage::Tof);
        assert_eq!(&list[..5], &FunnelStage::ALL);
        assert_eq!(list.len(), 8);
        assert!(list[5..].iter().all(|&s| s == FunnelStage::Tof));
    }

    #[test]
    fn test_assorted_list_truncates_below_five() {
        let list = BatchStyle::Assorted.funnel_list(3, || unreachable!());
        assert_eq!(list, vec![FunnelStage::Tof, FunnelStage::Mof, FunnelStage::Bof]);
    }

    #[test]
    fn test_classic_list_rotates() {
        let list = BatchStyle::Classic.funnel_list(7, || unreachable!());
        assert_eq!(list[0], FunnelStage::Tof);
        assert_eq!(list[3], FunnelStage::Tof);
        assert_eq!(list[5], FunnelStage::Bof);
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn test_only_list_repeats_stage() {
        let list = BatchStyle::Only(FunnelStage::Metralleta).funnel_list(4, || unreachable!());
        assert_eq!(list, vec![FunnelStage::Metralleta; 4]);
    }

    #[test]
    fn test_style_key_round_trip() {
        for style in [
            BatchStyle::Assorted,
            BatchStyle::Classic,
            BatchStyle::Only(FunnelStage::Hibrido),
        ] {
            assert_eq!(BatchStyle::from_key(&style.key()), Some(style));
        }
        assert_eq!(BatchStyle::from_key("nope"), None);
    }
}
