//! Keyword tracking view models

use serde::{Deserialize, Serialize};

/// Tracked keyword with its current search rank
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordRank {
    pub keyword: String,
    #[serde(default)]
    pub asin: Option<String>,
    #[serde(default)]
    pub search_volume: u64,
    /// Organic rank; absent when the product is not ranking
    #[serde(default)]
    pub rank: Option<u32>,
    /// Search results page the rank falls on
    #[serde(default)]
    pub page: Option<u32>,
}
