//! Common types for the shared crate
//!
//! Utility types used across the dashboard crates

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Top-level data category served by the backend
///
/// Ranking, Conversion, Inventory and Account carry per-product issue
/// payloads; Keyword and Reimbursement are dashboard read models. Each
/// category is fetched and cached independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ranking,
    Conversion,
    Inventory,
    Account,
    Keyword,
    Reimbursement,
}

impl Category {
    /// All categories, in dashboard display order
    pub const ALL: [Category; 6] = [
        Category::Ranking,
        Category::Conversion,
        Category::Inventory,
        Category::Account,
        Category::Keyword,
        Category::Reimbursement,
    ];

    /// Categories that produce issue rows
    pub const ISSUE_CATEGORIES: [Category; 4] = [
        Category::Ranking,
        Category::Conversion,
        Category::Inventory,
        Category::Account,
    ];

    /// Stable string form, used in API paths and cache keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ranking => "ranking",
            Category::Conversion => "conversion",
            Category::Inventory => "inventory",
            Category::Account => "account",
            Category::Keyword => "keyword",
            Category::Reimbursement => "reimbursement",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_str_round_trip() {
        for cat in Category::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }
}
