//! Buyer personas and funnel stages
//!
//! A persona describes who the ad speaks to; a funnel stage describes how
//! warm that audience is and therefore which generation instructions apply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A buyer persona, weighted by real ad-performance data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerPersona {
    /// Stable identifier, e.g. `mama-renovadora`
    pub id: String,
    /// Display name, e.g. "Mujer 45-54 Renovadora"
    pub name: String,
    /// Emoji shown on persona cards and export tags
    pub emoji: String,
    /// Relative weight for the random pick (higher = better ROAS segment)
    pub weight: u32,
    /// One-line description of the segment
    pub desc: String,
    /// The pain the copy should open with
    pub pain: String,
    /// What actually makes this segment buy
    pub motivator: String,
    /// Voice/tone guidance for the copywriter model
    pub tone: String,
}

/// Marketing funnel stage (plus the two house copy styles).
///
/// Serialized in lowercase so stored history matches the stage keys used in
/// prompts and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunnelStage {
    /// Top of funnel: cold audience, pain hook
    Tof,
    /// Middle of funnel: warm audience, differentiation
    Mof,
    /// Bottom of funnel: hot audience, urgency and offers
    Bof,
    /// Rapid-fire spec style, one idea per line
    Metralleta,
    /// Emotional hook + rapid-fire benefits
    Hibrido,
}

impl FunnelStage {
    /// All stages, in the order they appear in the UI and batch rotations.
    pub const ALL: [FunnelStage; 5] = [
        FunnelStage::Tof,
        FunnelStage::Mof,
        FunnelStage::Bof,
        FunnelStage::Metralleta,
        FunnelStage::Hibrido,
    ];

    /// The three classic funnel stages used by the "mixto" batch rotation.
    pub const CLASSIC: [FunnelStage; 3] =
        [FunnelStage::Tof, FunnelStage::Mof, FunnelStage::Bof];

    /// Lowercase key, e.g. `tof`
    pub fn key(self) -> &'static str {
        match self {
            FunnelStage::Tof => "tof",
            FunnelStage::Mof => "mof",
            FunnelStage::Bof => "bof",
            FunnelStage::Metralleta => "metralleta",
            FunnelStage::Hibrido => "hibrido",
        }
    }

    /// Uppercase label for tags and export headers, e.g. `TOF`
    pub fn label(self) -> String {
        self.key().to_uppercase()
    }

    /// Accent color used by the UI and the HTML export.
    pub fn color(self) -> &'static str {
        match self {
            FunnelStage::Tof => "#ff6b35",
            FunnelStage::Mof => "#ffd700",
            FunnelStage::Bof => "#4ade80",
            FunnelStage::Metralleta => "#ec4899",
            FunnelStage::Hibrido => "#8b5cf6",
        }
    }
}

impl fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FunnelStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tof" => Ok(FunnelStage::Tof),
            "mof" => Ok(FunnelStage::Mof),
            "bof" => Ok(FunnelStage::Bof),
            "metralleta" => Ok(FunnelStage::Metralleta),
            "hibrido" => Ok(FunnelStage::Hibrido),
            other => Err(format!("unknown funnel stage: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_key_round_trip() {
        for stage in FunnelStage::ALL {
            assert_eq!(stage.key().parse::<FunnelStage>().unwrap(), stage);
        }
    }

    #[test]
    fn test_stage_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&FunnelStage::Metralleta).unwrap();
        assert_eq!(json, "\"metralleta\"");
        let back: FunnelStage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FunnelStage::Metralleta);
    }

    #[test]
    fn test_stage_colors_are_distinct() {
        let mut colors: Vec<_> = FunnelStage::ALL.iter().map(|s| s.color()).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), FunnelStage::ALL.len());
    }
}
