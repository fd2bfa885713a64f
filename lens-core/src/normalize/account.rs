//! Account normalizer
//!
//! Account-level issues arrive already flat; normalization validates them
//! into rows. These rows may have no ASIN.

use shared::models::{AccountIssue, IssueRow};

/// Convert one account issue into at most one row
pub fn normalize_account(issue: &AccountIssue) -> Vec<IssueRow> {
    let row = IssueRow::new(
        issue.asin.clone().unwrap_or_default(),
        issue.sku.clone(),
        issue.title.clone(),
        &issue.heading,
        &issue.message,
        &issue.solution,
    );
    if row.is_valid() { vec![row] } else { Vec::new() }
}
