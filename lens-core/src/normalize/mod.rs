//! Per-category normalizers
//!
//! Each normalizer converts one product's payload into zero or more
//! [`IssueRow`]s. Missing nested fields short-circuit to "no row emitted";
//! a check reports an issue iff its `status` is exactly `"Error"`. Rows
//! that fail validation (empty heading or message) are dropped, never
//! rendered malformed.

mod account;
mod buybox;
mod conversion;
mod inventory;
mod ranking;

pub use account::normalize_account;
pub use buybox::{merge_buy_box, synthesize_buy_box_rows};
pub use conversion::normalize_conversion;
pub use inventory::normalize_inventory;
pub use ranking::normalize_ranking;

use shared::models::IssueRow;

/// Keep a candidate row only when it is renderable
pub(crate) fn push_valid(rows: &mut Vec<IssueRow>, row: IssueRow) {
    if row.is_valid() {
        rows.push(row);
    }
}
