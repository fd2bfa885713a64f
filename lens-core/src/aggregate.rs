//! Aggregation
//!
//! Flattens per-product normalized rows into one display-ready sequence
//! per category. Concatenation order is input order: product array order,
//! then each product's own emission order. No sorting happens here.

use crate::normalize::{
    merge_buy_box, normalize_account, normalize_conversion, normalize_inventory,
    normalize_ranking, synthesize_buy_box_rows,
};
use shared::models::{
    AccountIssue, BuyBoxRecord, ConversionProduct, InventoryProduct, IssueRow, RankingProduct,
};

/// Flatten ranking payloads into rows
pub fn flatten_ranking(products: &[RankingProduct]) -> Vec<IssueRow> {
    products.iter().flat_map(normalize_ranking).collect()
}

/// Flatten conversion payloads and merge in synthesized buy-box rows
pub fn flatten_conversion(
    products: &[ConversionProduct],
    buy_box_records: &[BuyBoxRecord],
) -> Vec<IssueRow> {
    let rows = products.iter().flat_map(normalize_conversion).collect();
    merge_buy_box(rows, synthesize_buy_box_rows(buy_box_records))
}

/// Flatten inventory payloads into rows
pub fn flatten_inventory(products: &[InventoryProduct]) -> Vec<IssueRow> {
    products.iter().flat_map(normalize_inventory).collect()
}

/// Flatten account issues into rows
pub fn flatten_account(issues: &[AccountIssue]) -> Vec<IssueRow> {
    issues.iter().flat_map(normalize_account).collect()
}

/// Per-category issue counts
///
/// Each count is the length of that category's flattened row set, and the
/// grand total is their sum — never a separately fetched summary number
/// that could drift out of sync with the tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub ranking: usize,
    pub conversion: usize,
    pub inventory: usize,
    pub account: usize,
}

impl CategoryCounts {
    pub fn grand_total(&self) -> usize {
        self.ranking + self.conversion + self.inventory + self.account
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CheckResult, RankingChecks, SectionChecks, SourceError};

    fn ranking_product(asin: &str, message: &str) -> RankingProduct {
        RankingProduct {
            asin: asin.into(),
            data: Some(RankingChecks {
                title_result: Some(SectionChecks {
                    restricted_words: Some(CheckResult {
                        status: Some("Error".into()),
                        message: Some(message.into()),
                        how_to_solve: Some("Fix".into()),
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_flatten_preserves_product_order() {
        let products = vec![
            ranking_product("B001", "first"),
            ranking_product("B002", "second"),
            ranking_product("B003", "third"),
        ];
        let rows = flatten_ranking(&products);
        let asins: Vec<_> = rows.iter().map(|r| r.asin.as_str()).collect();
        assert_eq!(asins, vec!["B001", "B002", "B003"]);
    }

    #[test]
    fn test_flatten_conversion_applies_buy_box_precedence() {
        let products = vec![ConversionProduct {
            asin: "B001".into(),
            buy_box: Some(SourceError {
                status: Some("Error".into()),
                message: Some("suppressed".into()),
                ..Default::default()
            }),
            ..Default::default()
        }];
        let records = vec![BuyBoxRecord {
            child_asin: Some("B001".into()),
            buy_box_percentage: 20.0,
            ..Default::default()
        }];
        let rows = flatten_conversion(&products, &records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].issue_heading, "Buy Box | Low Buy Box Percentage");
    }

    #[test]
    fn test_grand_total_is_sum_of_parts() {
        let counts = CategoryCounts {
            ranking: 3,
            conversion: 2,
            inventory: 5,
            account: 1,
        };
        assert_eq!(counts.grand_total(), 11);
    }
}
