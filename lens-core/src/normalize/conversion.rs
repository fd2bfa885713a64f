//! Conversion normalizer
//!
//! Fixed source order: Images, Videos, Rating, Buy Box, A+ Content, Brand
//! Story. The sub-label comes from the source's own `type` field, default
//! "Issue". Buy-box rows emitted here may later be replaced by synthesized
//! rows from the buy-box record stream (see `buybox.rs`).

use super::push_valid;
use shared::models::{ConversionProduct, IssueRow, SourceError};

/// Convert one conversion payload into issue rows
pub fn normalize_conversion(product: &ConversionProduct) -> Vec<IssueRow> {
    let sources: [(&str, Option<&SourceError>); 6] = [
        ("Images", product.image.as_ref()),
        ("Videos", product.video.as_ref()),
        ("Rating", product.rating.as_ref()),
        ("Buy Box", product.buy_box.as_ref()),
        ("A+ Content", product.aplus.as_ref()),
        ("Brand Story", product.brand_story.as_ref()),
    ];

    let mut rows = Vec::new();
    for (source_label, source) in sources {
        let Some(source) = source else { continue };
        if !source.is_error() {
            continue;
        }
        let sub_label = source.kind.as_deref().unwrap_or("Issue");
        push_valid(
            &mut rows,
            IssueRow::new(
                &product.asin,
                product.sku.clone(),
                product.title.clone(),
                format!("{} | {}", source_label, sub_label),
                source.message.clone().unwrap_or_default(),
                source.how_to_solve.clone().unwrap_or_default(),
            ),
        );
    }
    rows
}
