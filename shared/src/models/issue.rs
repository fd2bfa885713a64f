//! Normalized issue row
//!
//! The canonical flat record every category payload normalizes into. Rows
//! are ready to render as table cells or export as CSV lines.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One detected problem for one product in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueRow {
    /// Product identifier; empty for account-level rows
    pub asin: String,
    pub sku: Option<String>,
    /// Display name, "N/A" when the listing has none
    pub title: String,
    /// Composite label "<Section> | <Check>", also the group/dedup key
    pub issue_heading: String,
    /// Raw human-readable description, may carry a highlight suffix
    pub message: String,
    /// Remediation text
    pub solution: String,
    /// Category-specific auxiliary fields
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl IssueRow {
    pub fn new(
        asin: impl Into<String>,
        sku: Option<String>,
        title: Option<String>,
        issue_heading: impl Into<String>,
        message: impl Into<String>,
        solution: impl Into<String>,
    ) -> Self {
        let title = match title {
            Some(t) if !t.is_empty() => t,
            _ => "N/A".to_string(),
        };
        Self {
            asin: asin.into(),
            sku,
            title,
            issue_heading: issue_heading.into(),
            message: message.into(),
            solution: solution.into(),
            extra: HashMap::new(),
        }
    }

    /// Attach a category-specific auxiliary field
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// A row is renderable only with a non-empty heading and message
    pub fn is_valid(&self) -> bool {
        !self.issue_heading.is_empty() && !self.message.is_empty()
    }
}

/// A message split into a leading clause and an emphasized trailing clause
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SplitMessage {
    /// Leading explanatory clause
    pub main_text: String,
    /// Trailing clause rendered emphasized on its own line
    pub highlighted_text: String,
}

/// Product priority bucket on the overview screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Per-product metrics the priority classifier ranks on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetric {
    pub asin: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub issue_count: u32,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub units_sold: u32,
}
