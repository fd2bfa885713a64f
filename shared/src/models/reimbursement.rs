//! Reimbursement view models

use serde::{Deserialize, Serialize};

/// Reimbursement totals by case state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReimbursementSummary {
    #[serde(default)]
    pub open_count: u32,
    #[serde(default)]
    pub open_amount: f64,
    #[serde(default)]
    pub approved_count: u32,
    #[serde(default)]
    pub approved_amount: f64,
    #[serde(default)]
    pub paid_count: u32,
    #[serde(default)]
    pub paid_amount: f64,
}

/// One reimbursement case
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReimbursementCase {
    pub case_id: String,
    #[serde(default)]
    pub asin: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    /// Unix milliseconds
    #[serde(default)]
    pub opened_at: i64,
}
