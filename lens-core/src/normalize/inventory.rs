//! Inventory normalizer
//!
//! Five independent checks per product: long-term storage fees,
//! unfulfillable inventory, stranded inventory, inbound non-compliance,
//! and replenishment risk. Replenishment arrives as one object or an array
//! of per-SKU objects; both forms pass through the same per-record mapper.

use super::push_valid;
use shared::models::{InventoryError, InventoryProduct, IssueRow, ReplenishmentError};

/// Convert one inventory payload into issue rows
pub fn normalize_inventory(product: &InventoryProduct) -> Vec<IssueRow> {
    let checks: [(&str, Option<&InventoryError>); 4] = [
        ("Long-Term Storage Fees", product.ltsf.as_ref()),
        ("Unfulfillable Inventory", product.unfulfillable.as_ref()),
        ("Stranded Inventory", product.stranded.as_ref()),
        ("Inbound Non-Compliance", product.inbound_non_compliance.as_ref()),
    ];

    let mut rows = Vec::new();
    for (check_label, check) in checks {
        if let Some(check) = check
            && check.is_error()
        {
            push_valid(
                &mut rows,
                IssueRow::new(
                    &product.asin,
                    product.sku.clone(),
                    product.title.clone(),
                    format!("Inventory | {}", check_label),
                    check.message.clone().unwrap_or_default(),
                    check.how_to_solve.clone().unwrap_or_default(),
                ),
            );
        }
    }

    if let Some(replenishment) = &product.replenishment {
        for record in replenishment.iter() {
            if record.is_error() {
                push_valid(&mut rows, replenishment_row(product, record));
            }
        }
    }

    rows
}

/// One row per replenishment record; the record's own SKU wins over the
/// product-level SKU
fn replenishment_row(product: &InventoryProduct, record: &ReplenishmentError) -> IssueRow {
    let sku = record.sku.clone().or_else(|| product.sku.clone());
    let mut row = IssueRow::new(
        &product.asin,
        sku,
        product.title.clone(),
        "Inventory | Replenishment Required",
        record.message.clone().unwrap_or_default(),
        record.how_to_solve.clone().unwrap_or_default(),
    );
    if let Some(qty) = record.recommended_qty() {
        row = row.with_extra("recommendedReplenishmentQty", serde_json::json!(qty));
    }
    row
}
