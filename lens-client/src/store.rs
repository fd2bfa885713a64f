//! Category store
//!
//! Owns the transport, the freshness caches and the per-category
//! pagination trackers. Each issue category loads independently; a fetch
//! failure is scoped to its category and never clears rows already shown.
//! Stale cached rows stay visible while a refetch is in flight.

use crate::{
    ApiClient, ClientConfig, ClientError, ClientResult, FreshnessCache, LoadState, PageTracker,
};
use dashmap::DashMap;
use lens_core::{
    CategoryCounts, flatten_account, flatten_conversion, flatten_inventory, flatten_ranking,
};
use shared::models::{IssueRow, ProfitabilitySummary, ReimbursementSummary};
use shared::{Category, PageMeta};
use std::sync::Arc;

/// Client-side state container for the dashboard's category data
pub struct CategoryStore {
    api: ApiClient,
    page_size: u32,
    issues: FreshnessCache<Category, Vec<IssueRow>>,
    trackers: DashMap<Category, PageTracker<IssueRow>>,
    profitability: FreshnessCache<String, ProfitabilitySummary>,
    reimbursements: FreshnessCache<String, ReimbursementSummary>,
}

impl CategoryStore {
    /// Build a network-backed store from a configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_api(ApiClient::new(config)?, config))
    }

    /// Build a store over an existing API client (used by tests)
    pub fn with_api(api: ApiClient, config: &ClientConfig) -> Self {
        Self {
            api,
            page_size: config.page_size,
            issues: FreshnessCache::new(config.cache_ttl),
            trackers: DashMap::new(),
            profitability: FreshnessCache::new(config.dashboard_cache_ttl),
            reimbursements: FreshnessCache::new(config.dashboard_cache_ttl),
        }
    }

    // ========== Read side ==========

    /// Snapshot of the rows currently loaded for a category
    pub fn rows(&self, category: Category) -> Vec<IssueRow> {
        self.trackers
            .get(&category)
            .map(|t| t.rows().to_vec())
            .unwrap_or_default()
    }

    pub fn load_state(&self, category: Category) -> LoadState {
        self.trackers
            .get(&category)
            .map(|t| t.state())
            .unwrap_or(LoadState::Idle)
    }

    /// Category-scoped error from the last failed fetch, if any
    pub fn last_error(&self, category: Category) -> Option<String> {
        self.trackers
            .get(&category)
            .and_then(|t| t.error().map(String::from))
    }

    pub fn has_more(&self, category: Category) -> bool {
        self.trackers
            .get(&category)
            .map(|t| t.has_more())
            .unwrap_or(false)
    }

    /// Per-category issue counts over the loaded rows
    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            ranking: self.loaded_count(Category::Ranking),
            conversion: self.loaded_count(Category::Conversion),
            inventory: self.loaded_count(Category::Inventory),
            account: self.loaded_count(Category::Account),
        }
    }

    fn loaded_count(&self, category: Category) -> usize {
        self.trackers
            .get(&category)
            .map(|t| t.rows().len())
            .unwrap_or(0)
    }

    // ========== Load side ==========

    /// Load the first page of a category
    ///
    /// A no-op when the cached entry is still fresh or a fetch for this
    /// category is already in flight. A stale entry triggers a refetch
    /// while the stale rows remain readable.
    pub async fn load(&self, category: Category) -> ClientResult<()> {
        if self.issues.is_fresh(&category) && self.load_state(category) == LoadState::Loaded {
            tracing::debug!(category = %category, "cache fresh, skipping fetch");
            return Ok(());
        }
        if !self.issues.begin(category) {
            tracing::debug!(category = %category, "fetch already in flight");
            return Ok(());
        }

        let token = {
            let mut tracker = self.trackers.entry(category).or_default();
            tracker.begin_load()
        };
        let Some(token) = token else {
            self.issues.finish(&category);
            return Ok(());
        };

        let result = self.fetch_page(category, 1).await;
        let outcome = self.apply_result(category, token, result);
        self.issues.finish(&category);
        outcome
    }

    /// Load the next page of a category, appending in response order
    ///
    /// A no-op when everything is already loaded or a load is in flight.
    pub async fn load_more(&self, category: Category) -> ClientResult<()> {
        let begun = {
            let mut tracker = self.trackers.entry(category).or_default();
            tracker.begin_load_more().map(|token| (token, tracker.page() + 1))
        };
        let Some((token, next_page)) = begun else {
            return Ok(());
        };

        let result = self.fetch_page(category, next_page).await;
        self.apply_result(category, token, result)
    }

    /// Filter or category switch: drop loaded rows and fetch page 1 again
    pub async fn reload(&self, category: Category) -> ClientResult<()> {
        {
            let mut tracker = self.trackers.entry(category).or_default();
            tracker.reset();
        }
        self.issues.invalidate(&category);
        self.load(category).await
    }

    /// Load all issue categories concurrently
    ///
    /// Categories are independent: one failure does not affect the others.
    pub async fn load_all(&self) -> Vec<(Category, ClientResult<()>)> {
        let loads = Category::ISSUE_CATEGORIES
            .into_iter()
            .map(|category| async move { (category, self.load(category).await) });
        futures::future::join_all(loads).await
    }

    fn apply_result(
        &self,
        category: Category,
        token: u64,
        result: ClientResult<(Vec<IssueRow>, PageMeta)>,
    ) -> ClientResult<()> {
        let mut tracker = self.trackers.entry(category).or_default();
        match result {
            Ok((rows, meta)) => {
                tracker.complete(token, rows, meta);
                self.issues.insert(category, tracker.rows().to_vec());
                tracing::debug!(
                    category = %category,
                    loaded = tracker.rows().len(),
                    "category page loaded"
                );
                Ok(())
            }
            Err(err) => {
                tracker.fail(token, err.to_string());
                tracing::warn!(category = %category, error = %err, "category fetch failed");
                Err(err)
            }
        }
    }

    async fn fetch_page(
        &self,
        category: Category,
        page: u32,
    ) -> ClientResult<(Vec<IssueRow>, PageMeta)> {
        match category {
            Category::Ranking => {
                let resp = self.api.fetch_ranking_page(page, self.page_size).await?;
                Ok((flatten_ranking(&resp.data), resp.meta()))
            }
            Category::Conversion => {
                let (resp, records) = tokio::try_join!(
                    self.api.fetch_conversion_page(page, self.page_size),
                    self.api.fetch_buy_box_records(),
                )?;
                Ok((flatten_conversion(&resp.data, &records), resp.meta()))
            }
            Category::Inventory => {
                let resp = self.api.fetch_inventory_page(page, self.page_size).await?;
                Ok((flatten_inventory(&resp.data), resp.meta()))
            }
            Category::Account => {
                let resp = self.api.fetch_account_page(page, self.page_size).await?;
                Ok((flatten_account(&resp.data), resp.meta()))
            }
            Category::Keyword | Category::Reimbursement => Err(ClientError::Validation(format!(
                "category {} has no issue rows",
                category
            ))),
        }
    }

    // ========== Dashboard summaries ==========

    /// Profitability summary for a time range, cached with the dashboard
    /// TTL; a fetch failure falls back to a stale entry when one exists
    pub async fn profitability(&self, time_range: &str) -> ClientResult<Arc<ProfitabilitySummary>> {
        let key = time_range.to_string();
        if let Some(read) = self.profitability.read(&key)
            && read.is_fresh
        {
            return Ok(read.data);
        }
        match self.api.fetch_profitability(time_range).await {
            Ok(summary) => Ok(self.profitability.insert(key, summary)),
            Err(err) => match self.profitability.read(&key) {
                Some(stale) => {
                    tracing::warn!(error = %err, "profitability refetch failed, serving stale");
                    Ok(stale.data)
                }
                None => Err(err),
            },
        }
    }

    /// Reimbursement summary for a time range, same caching policy
    pub async fn reimbursements(
        &self,
        time_range: &str,
    ) -> ClientResult<Arc<ReimbursementSummary>> {
        let key = time_range.to_string();
        if let Some(read) = self.reimbursements.read(&key)
            && read.is_fresh
        {
            return Ok(read.data);
        }
        match self.api.fetch_reimbursements(time_range).await {
            Ok(summary) => Ok(self.reimbursements.insert(key, summary)),
            Err(err) => match self.reimbursements.read(&key) {
                Some(stale) => {
                    tracing::warn!(error = %err, "reimbursement refetch failed, serving stale");
                    Ok(stale.data)
                }
                None => Err(err),
            },
        }
    }
}
