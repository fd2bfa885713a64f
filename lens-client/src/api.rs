//! Typed API surface
//!
//! Endpoint wrappers over the transport, one per backend resource. Paths
//! and query parameters follow the backend's REST conventions.

use crate::{ClientConfig, ClientResult, NetworkHttpClient, Transport};
use serde::de::DeserializeOwned;
use shared::PaginatedResponse;
use shared::models::{
    AccountIssue, BuyBoxRecord, ConversionProduct, InventoryProduct, KeywordRank, ProductMetric,
    ProfitabilitySummary, RankingProduct, ReimbursementSummary,
};
use std::sync::Arc;

/// Typed client for the analytics backend
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    /// Build a network-backed client from a configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            transport: Arc::new(NetworkHttpClient::new(config)?),
        })
    }

    /// Build a client over an arbitrary transport (used by tests)
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let value = self.transport.get_raw(path).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn fetch_ranking_page(
        &self,
        page: u32,
        limit: u32,
    ) -> ClientResult<PaginatedResponse<RankingProduct>> {
        self.get(&format!("api/issues/ranking?page={}&limit={}", page, limit))
            .await
    }

    pub async fn fetch_conversion_page(
        &self,
        page: u32,
        limit: u32,
    ) -> ClientResult<PaginatedResponse<ConversionProduct>> {
        self.get(&format!("api/issues/conversion?page={}&limit={}", page, limit))
            .await
    }

    /// Buy-box records for the account, joined to products by ASIN
    pub async fn fetch_buy_box_records(&self) -> ClientResult<Vec<BuyBoxRecord>> {
        self.get("api/issues/buy-box").await
    }

    pub async fn fetch_inventory_page(
        &self,
        page: u32,
        limit: u32,
    ) -> ClientResult<PaginatedResponse<InventoryProduct>> {
        self.get(&format!("api/issues/inventory?page={}&limit={}", page, limit))
            .await
    }

    pub async fn fetch_account_page(
        &self,
        page: u32,
        limit: u32,
    ) -> ClientResult<PaginatedResponse<AccountIssue>> {
        self.get(&format!("api/issues/account?page={}&limit={}", page, limit))
            .await
    }

    /// Per-product metrics for the overview priority ranking
    pub async fn fetch_product_metrics(&self) -> ClientResult<Vec<ProductMetric>> {
        self.get("api/overview/products").await
    }

    pub async fn fetch_profitability(
        &self,
        time_range: &str,
    ) -> ClientResult<ProfitabilitySummary> {
        self.get(&format!(
            "api/profitability?timeRange={}",
            urlencoding::encode(time_range)
        ))
        .await
    }

    pub async fn fetch_reimbursements(
        &self,
        time_range: &str,
    ) -> ClientResult<ReimbursementSummary> {
        self.get(&format!(
            "api/reimbursements?timeRange={}",
            urlencoding::encode(time_range)
        ))
        .await
    }

    pub async fn fetch_keyword_page(
        &self,
        page: u32,
        limit: u32,
    ) -> ClientResult<PaginatedResponse<KeywordRank>> {
        self.get(&format!("api/keywords?page={}&limit={}", page, limit))
            .await
    }
}
