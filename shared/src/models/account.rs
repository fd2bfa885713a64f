//! Account category payload
//!
//! Account-level health issues arrive already flat; rows may have no ASIN.

use serde::{Deserialize, Serialize};

/// One account-level issue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountIssue {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub asin: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
