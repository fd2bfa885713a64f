//! Product priority classifier
//!
//! Ranks products (not issues) by a chosen metric and buckets the ranked
//! list into thirds. Boundaries are `ceil(n/3)` and `2 * ceil(n/3)`, so
//! with totals that are not a multiple of 3 the high and medium buckets
//! are never smaller than the low bucket.

use shared::models::{Priority, ProductMetric};

/// Metric the overview screen ranks products on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityMetric {
    IssueCount,
    Revenue,
    UnitsSold,
}

/// Rank products by the metric (descending, stable) and bucket into thirds
pub fn classify(
    products: &[ProductMetric],
    metric: PriorityMetric,
) -> Vec<(ProductMetric, Priority)> {
    let mut ranked: Vec<&ProductMetric> = products.iter().collect();
    // Stable sort: ties keep original array order
    match metric {
        PriorityMetric::IssueCount => ranked.sort_by(|a, b| b.issue_count.cmp(&a.issue_count)),
        PriorityMetric::Revenue => ranked.sort_by(|a, b| b.revenue.total_cmp(&a.revenue)),
        PriorityMetric::UnitsSold => ranked.sort_by(|a, b| b.units_sold.cmp(&a.units_sold)),
    }

    let first_boundary = ranked.len().div_ceil(3);
    let second_boundary = 2 * first_boundary;

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, product)| {
            let priority = if rank < first_boundary {
                Priority::High
            } else if rank < second_boundary {
                Priority::Medium
            } else {
                Priority::Low
            };
            (product.clone(), priority)
        })
        .collect()
}
