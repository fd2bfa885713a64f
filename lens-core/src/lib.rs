//! SellerLens transformation pipeline
//!
//! Pure, synchronous data shaping between the backend's heterogeneous
//! per-category payloads and the flat row sets the dashboard renders:
//! message splitting, per-category normalization, aggregation, product
//! priority classification, and CSV export. Nothing here performs I/O and
//! every function is safe to memoize.

mod aggregate;
mod export;
mod priority;
mod splitter;

pub mod normalize;

pub use aggregate::{
    CategoryCounts, flatten_account, flatten_conversion, flatten_inventory, flatten_ranking,
};
pub use export::issues_to_csv;
pub use priority::{PriorityMetric, classify};
pub use splitter::{matching_pattern, split_message};
