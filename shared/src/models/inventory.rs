//! Inventory category payload
//!
//! Independent stock-health checks per product. The replenishment field is
//! polymorphic upstream: a single error object or an array of per-SKU
//! objects; [`OneOrMany`] decodes both forms.

use serde::{Deserialize, Serialize};

/// A field that arrives as either one record or an array of records
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Single(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// View both forms as a slice
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Single(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

/// One inventory check outcome
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryError {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(rename = "HowToSolve", default)]
    pub how_to_solve: Option<String>,
}

impl InventoryError {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("Error")
    }
}

/// Replenishment-risk record, one per SKU
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplenishmentError {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(rename = "HowToSolve", default)]
    pub how_to_solve: Option<String>,
    #[serde(rename = "recommendedReplenishmentQty", default)]
    pub recommended_replenishment_qty: Option<f64>,
    /// Legacy field carrying the quantity before the explicit one existed
    #[serde(default)]
    pub data: Option<f64>,
}

impl ReplenishmentError {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("Error")
    }

    /// Recommended quantity: explicit field first, then the legacy `data`
    pub fn recommended_qty(&self) -> Option<f64> {
        self.recommended_replenishment_qty.or(self.data)
    }
}

/// Per-product inventory payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryProduct {
    #[serde(default)]
    pub asin: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "ltsfErrorData", default)]
    pub ltsf: Option<InventoryError>,
    #[serde(rename = "unfulfillableErrorData", default)]
    pub unfulfillable: Option<InventoryError>,
    #[serde(rename = "strandedErrorData", default)]
    pub stranded: Option<InventoryError>,
    #[serde(rename = "inboundNonComplianceErrorData", default)]
    pub inbound_non_compliance: Option<InventoryError>,
    #[serde(rename = "replenishmentErrorData", default)]
    pub replenishment: Option<OneOrMany<ReplenishmentError>>,
}
