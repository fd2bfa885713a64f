//! Conversion category payload
//!
//! A flat set of named error sources per product, plus the separate
//! buy-box record stream joined by ASIN.

use serde::{Deserialize, Serialize};

/// One named conversion error source
///
/// Note the `HowToSolve` casing differs from the ranking payload's
/// `HowTOSolve`; both are preserved as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceError {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(rename = "HowToSolve", default)]
    pub how_to_solve: Option<String>,
    /// Sub-label for the heading, defaults to "Issue" when absent
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl SourceError {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("Error")
    }
}

/// Per-product conversion payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionProduct {
    #[serde(default)]
    pub asin: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "imageResultErrorData", default)]
    pub image: Option<SourceError>,
    #[serde(rename = "videoResultErrorData", default)]
    pub video: Option<SourceError>,
    #[serde(rename = "ratingResultErrorData", default)]
    pub rating: Option<SourceError>,
    #[serde(rename = "buyBoxResultErrorData", default)]
    pub buy_box: Option<SourceError>,
    #[serde(rename = "aplusResultErrorData", default)]
    pub aplus: Option<SourceError>,
    #[serde(rename = "brandStoryResultErrorData", default)]
    pub brand_story: Option<SourceError>,
}

/// Buy-box ownership record, delivered as a separate array
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyBoxRecord {
    #[serde(default)]
    pub child_asin: Option<String>,
    #[serde(default)]
    pub parent_asin: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub buy_box_percentage: f64,
    #[serde(default)]
    pub page_views: u32,
    #[serde(default)]
    pub sessions: u32,
}

impl BuyBoxRecord {
    /// ASIN used to join against per-product rows: child first, then parent
    pub fn asin(&self) -> &str {
        self.child_asin
            .as_deref()
            .or(self.parent_asin.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_named_sources() {
        let json = r#"{
            "asin": "B003",
            "imageResultErrorData": {
                "status": "Error",
                "Message": "Listing has fewer than 5 images",
                "HowToSolve": "Add more product images",
                "type": "Low Image Count"
            }
        }"#;
        let product: ConversionProduct = serde_json::from_str(json).unwrap();
        let image = product.image.unwrap();
        assert!(image.is_error());
        assert_eq!(image.kind.as_deref(), Some("Low Image Count"));
        assert!(product.video.is_none());
    }

    #[test]
    fn test_buy_box_asin_join_key() {
        let child = BuyBoxRecord {
            child_asin: Some("B010".into()),
            parent_asin: Some("B000".into()),
            ..Default::default()
        };
        assert_eq!(child.asin(), "B010");

        let parent_only = BuyBoxRecord {
            parent_asin: Some("B000".into()),
            ..Default::default()
        };
        assert_eq!(parent_only.asin(), "B000");

        assert_eq!(BuyBoxRecord::default().asin(), "");
    }
}
