//! Image-combo types
//!
//! An image combo is a randomized selection of scene variables (ambience,
//! light, angle, ...) composed into a generation prompt plus a headline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One coded scene variable, e.g. `B1 — Golden hour`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageVariable {
    /// Group letter + index, e.g. `A3`
    pub code: String,
    pub name: String,
    /// English scene description fed to the image model
    pub desc: String,
    /// Camera/technical notes (photo-style group only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical: Option<String>,
    /// Decor-style notes (panel-color group only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// The variables picked from one lettered group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboPick {
    /// Group display name, e.g. "Luz"
    pub group: String,
    pub variables: Vec<ImageVariable>,
}

/// A rolled image combo ready to paste into an image generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCombo {
    pub id: String,
    /// Joined variable codes, e.g. `A3-B1-C6-...`
    pub combo_code: String,
    pub picks: Vec<ComboPick>,
    /// Composed scene paragraph from every picked description
    pub scene_prompt: String,
    pub headline: String,
    /// The model's reason for the headline
    pub headline_context: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_favorite: bool,
}
