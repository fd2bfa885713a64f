//! Buy-box row synthesis
//!
//! Buy-box ownership arrives as a separate record stream joined by ASIN.
//! Records with 0% ownership or below 50% become synthesized rows, and any
//! conversion-derived buy-box rows are discarded in their favor — the
//! record stream is authoritative for buy-box state.

use super::push_valid;
use shared::format::{format_number, format_percent};
use shared::models::{BuyBoxRecord, IssueRow};

/// Synthesize issue rows from qualifying buy-box records
///
/// 0% ownership and 0 < pct < 50 qualify; 50% and above do not.
pub fn synthesize_buy_box_rows(records: &[BuyBoxRecord]) -> Vec<IssueRow> {
    let mut rows = Vec::new();
    for record in records {
        if record.buy_box_percentage == 0.0 {
            push_valid(
                &mut rows,
                IssueRow::new(
                    record.asin(),
                    record.sku.clone(),
                    record.title.clone(),
                    "Buy Box | No Buy Box",
                    format!(
                        "You do not own the Buy Box despite {} page views across {} sessions.",
                        format_number(record.page_views as u64),
                        format_number(record.sessions as u64),
                    ),
                    "Review your price, fulfillment method and seller metrics to win the Buy Box.",
                ),
            );
        } else if record.buy_box_percentage < 50.0 {
            push_valid(
                &mut rows,
                IssueRow::new(
                    record.asin(),
                    record.sku.clone(),
                    record.title.clone(),
                    "Buy Box | Low Buy Box Percentage",
                    format!(
                        "You own the Buy Box only {} of the time.",
                        format_percent(record.buy_box_percentage),
                    ),
                    "Review your price, fulfillment method and seller metrics to win the Buy Box.",
                ),
            );
        }
    }
    rows
}

/// Replace conversion-derived buy-box rows with synthesized ones
///
/// Any row whose heading contains "Buy Box" is discarded before the
/// synthesized rows are appended; synthesized rows always take precedence.
pub fn merge_buy_box(conversion_rows: Vec<IssueRow>, synthesized: Vec<IssueRow>) -> Vec<IssueRow> {
    let mut rows: Vec<IssueRow> = conversion_rows
        .into_iter()
        .filter(|row| !row.issue_heading.contains("Buy Box"))
        .collect();
    rows.extend(synthesized);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(asin: &str, pct: f64, page_views: u32, sessions: u32) -> BuyBoxRecord {
        BuyBoxRecord {
            child_asin: Some(asin.into()),
            buy_box_percentage: pct,
            page_views,
            sessions,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_percent_row() {
        let rows = synthesize_buy_box_rows(&[record("B001", 0.0, 1200, 300)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].issue_heading, "Buy Box | No Buy Box");
        assert_eq!(
            rows[0].message,
            "You do not own the Buy Box despite 1,200 page views across 300 sessions."
        );
    }

    #[test]
    fn test_low_percentage_row() {
        let rows = synthesize_buy_box_rows(&[record("B002", 32.4, 0, 0)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].issue_heading, "Buy Box | Low Buy Box Percentage");
        assert_eq!(rows[0].message, "You own the Buy Box only 32.4% of the time.");
    }

    #[test]
    fn test_fifty_percent_and_above_do_not_qualify() {
        let rows = synthesize_buy_box_rows(&[record("B003", 50.0, 10, 5), record("B004", 97.5, 10, 5)]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_synthesized_rows_take_precedence() {
        let conversion_rows = vec![
            IssueRow::new("B001", None, None, "Images | Issue", "few images", ""),
            IssueRow::new("B001", None, None, "Buy Box | Issue", "buy box suppressed", ""),
        ];
        let synthesized = synthesize_buy_box_rows(&[record("B001", 12.0, 100, 40)]);
        let merged = merge_buy_box(conversion_rows, synthesized);

        let buy_box_rows: Vec<_> = merged
            .iter()
            .filter(|r| r.issue_heading.contains("Buy Box"))
            .collect();
        assert_eq!(buy_box_rows.len(), 1);
        assert_eq!(buy_box_rows[0].issue_heading, "Buy Box | Low Buy Box Percentage");
        // Non-buy-box rows survive untouched
        assert_eq!(merged[0].issue_heading, "Images | Issue");
    }
}
