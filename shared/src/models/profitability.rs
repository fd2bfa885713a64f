//! Profitability view models

use serde::{Deserialize, Serialize};

/// Account-wide profitability summary for a date range
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitabilitySummary {
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub units_sold: u32,
    #[serde(default)]
    pub cogs: f64,
    #[serde(default)]
    pub amazon_fees: f64,
    #[serde(default)]
    pub ad_spend: f64,
    #[serde(default)]
    pub reimbursed: f64,
    #[serde(default)]
    pub net_profit: f64,
    /// Net margin in percent
    #[serde(default)]
    pub margin: f64,
}

/// Per-product profitability row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProfit {
    pub asin: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub units_sold: u32,
    #[serde(default)]
    pub net_profit: f64,
}
