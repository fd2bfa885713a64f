//! Ranking category payload
//!
//! Listing-quality checks nested per section. Key names (including the
//! backend's `RestictedWords` misspelling and `HowTOSolve` casing) are
//! pinned verbatim; they are the wire contract.

use serde::{Deserialize, Serialize};

/// One check outcome for a listing section
///
/// A check reports an issue iff `status` is exactly `"Error"`; any other
/// value or an absent field means no issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(rename = "HowTOSolve", default)]
    pub how_to_solve: Option<String>,
}

impl CheckResult {
    /// The status-string discriminator: `"Error"` exactly, nothing else
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("Error")
    }
}

/// Checks for one listing section (title, bullets, description, keywords)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionChecks {
    #[serde(rename = "RestictedWords", default)]
    pub restricted_words: Option<CheckResult>,
    #[serde(rename = "checkSpecialCharacters", default)]
    pub special_characters: Option<CheckResult>,
    #[serde(rename = "charLim", default)]
    pub char_lim: Option<CheckResult>,
}

/// The nested `data` object of a ranking payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingChecks {
    #[serde(rename = "TitleResult", default)]
    pub title_result: Option<SectionChecks>,
    #[serde(rename = "BulletPoints", default)]
    pub bullet_points: Option<SectionChecks>,
    #[serde(rename = "Description", default)]
    pub description: Option<SectionChecks>,
    #[serde(rename = "BackendKeywords", default)]
    pub backend_keywords: Option<SectionChecks>,
    /// Top-level character-limit check, no per-section sub-check
    #[serde(rename = "charLim", default)]
    pub char_lim: Option<CheckResult>,
}

/// Per-product ranking payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingProduct {
    #[serde(default)]
    pub asin: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(default)]
    pub data: Option<RankingChecks>,
}
