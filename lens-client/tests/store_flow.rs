//! Category store flow against a scripted transport: pagination, cache
//! freshness, in-flight discipline and category-scoped failures.

use async_trait::async_trait;
use lens_client::{
    ApiClient, CategoryStore, ClientConfig, ClientError, ClientResult, LoadState, Transport,
};
use shared::Category;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Transport test double: canned responses keyed by path, plus a request log
struct MockTransport {
    responses: Mutex<HashMap<String, serde_json::Value>>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn respond(&self, path: &str, body: serde_json::Value) {
        self.responses.lock().unwrap().insert(path.to_string(), body);
    }

    fn unrespond(&self, path: &str) {
        self.responses.lock().unwrap().remove(path);
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn requests_for(&self, fragment: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.contains(fragment))
            .count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_raw(&self, path: &str) -> ClientResult<serde_json::Value> {
        self.requests.lock().unwrap().push(path.to_string());
        match self.responses.lock().unwrap().get(path) {
            Some(body) => Ok(body.clone()),
            None => Err(ClientError::NotFound(path.to_string())),
        }
    }
}

fn store_over(transport: &Arc<MockTransport>, ttl: Duration) -> CategoryStore {
    let config = ClientConfig::new("http://mock")
        .with_page_size(2)
        .with_cache_ttl(ttl);
    let api = ApiClient::with_transport(Arc::clone(transport) as Arc<dyn Transport>);
    CategoryStore::with_api(api, &config)
}

fn ranking_page(asins: &[&str], total: u64, page: u32) -> serde_json::Value {
    let data: Vec<serde_json::Value> = asins
        .iter()
        .map(|asin| {
            serde_json::json!({
                "asin": asin,
                "Title": "Widget",
                "data": {
                    "TitleResult": {
                        "RestictedWords": {
                            "status": "Error",
                            "Message": "The Characters used are: #, @",
                            "HowTOSolve": "Remove special characters"
                        }
                    }
                }
            })
        })
        .collect();
    serde_json::json!({"data": data, "total": total, "page": page, "limit": 2})
}

#[tokio::test]
async fn test_load_then_load_more_appends() {
    let transport = MockTransport::new();
    transport.respond("api/issues/ranking?page=1&limit=2", ranking_page(&["B001", "B002"], 3, 1));
    transport.respond("api/issues/ranking?page=2&limit=2", ranking_page(&["B003"], 3, 2));
    let store = store_over(&transport, Duration::from_secs(300));

    store.load(Category::Ranking).await.unwrap();
    assert_eq!(store.load_state(Category::Ranking), LoadState::Loaded);
    assert_eq!(store.rows(Category::Ranking).len(), 2);
    assert!(store.has_more(Category::Ranking));

    store.load_more(Category::Ranking).await.unwrap();
    let rows = store.rows(Category::Ranking);
    assert_eq!(rows.len(), 3);
    let asins: Vec<_> = rows.iter().map(|r| r.asin.as_str()).collect();
    assert_eq!(asins, vec!["B001", "B002", "B003"]);
    assert!(!store.has_more(Category::Ranking));

    // Exhausted: load_more must not issue another request
    let before = transport.request_count();
    store.load_more(Category::Ranking).await.unwrap();
    assert_eq!(transport.request_count(), before);
    assert_eq!(store.rows(Category::Ranking).len(), 3);
}

#[tokio::test]
async fn test_fresh_cache_skips_refetch() {
    let transport = MockTransport::new();
    transport.respond("api/issues/ranking?page=1&limit=2", ranking_page(&["B001"], 1, 1));
    let store = store_over(&transport, Duration::from_secs(300));

    store.load(Category::Ranking).await.unwrap();
    store.load(Category::Ranking).await.unwrap();
    assert_eq!(transport.requests_for("ranking"), 1);
}

#[tokio::test]
async fn test_stale_entry_triggers_refetch_but_stays_readable() {
    let transport = MockTransport::new();
    transport.respond("api/issues/ranking?page=1&limit=2", ranking_page(&["B001"], 1, 1));
    let store = store_over(&transport, Duration::ZERO);

    store.load(Category::Ranking).await.unwrap();
    assert_eq!(store.rows(Category::Ranking).len(), 1);

    // TTL zero: the entry is immediately stale, so a second load refetches
    store.load(Category::Ranking).await.unwrap();
    assert_eq!(transport.requests_for("ranking"), 2);
    assert_eq!(store.rows(Category::Ranking).len(), 1);
}

#[tokio::test]
async fn test_failure_is_scoped_and_keeps_rows() {
    let transport = MockTransport::new();
    transport.respond("api/issues/ranking?page=1&limit=2", ranking_page(&["B001", "B002"], 4, 1));
    // page 2 is not scripted: loading more will fail
    let store = store_over(&transport, Duration::from_secs(300));

    store.load(Category::Ranking).await.unwrap();
    let err = store.load_more(Category::Ranking).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));

    // Rows from page 1 survive; the error is recorded for this category only
    assert_eq!(store.rows(Category::Ranking).len(), 2);
    assert_eq!(store.load_state(Category::Ranking), LoadState::Loaded);
    assert!(store.last_error(Category::Ranking).is_some());
    assert!(store.last_error(Category::Inventory).is_none());
}

#[tokio::test]
async fn test_conversion_load_applies_buy_box_precedence() {
    let transport = MockTransport::new();
    transport.respond(
        "api/issues/conversion?page=1&limit=2",
        serde_json::json!({
            "data": [{
                "asin": "B010",
                "buyBoxResultErrorData": {
                    "status": "Error",
                    "Message": "Buy Box is suppressed",
                    "HowToSolve": "Check pricing"
                }
            }],
            "total": 1, "page": 1, "limit": 2
        }),
    );
    transport.respond(
        "api/issues/buy-box",
        serde_json::json!([{
            "childAsin": "B010",
            "buyBoxPercentage": 12.5,
            "pageViews": 40,
            "sessions": 10
        }]),
    );
    let store = store_over(&transport, Duration::from_secs(300));

    store.load(Category::Conversion).await.unwrap();
    let rows = store.rows(Category::Conversion);
    let buy_box: Vec<_> = rows
        .iter()
        .filter(|r| r.issue_heading.contains("Buy Box"))
        .collect();
    assert_eq!(buy_box.len(), 1);
    assert_eq!(buy_box[0].issue_heading, "Buy Box | Low Buy Box Percentage");
}

#[tokio::test]
async fn test_load_all_is_independent_per_category() {
    let transport = MockTransport::new();
    transport.respond("api/issues/ranking?page=1&limit=2", ranking_page(&["B001"], 1, 1));
    transport.respond(
        "api/issues/inventory?page=1&limit=2",
        serde_json::json!({
            "data": [{
                "asin": "B003",
                "strandedErrorData": {
                    "status": "Error",
                    "Message": "Listing is stranded",
                    "HowToSolve": "Relist"
                }
            }],
            "total": 1, "page": 1, "limit": 2
        }),
    );
    transport.respond(
        "api/issues/account?page=1&limit=2",
        serde_json::json!({
            "data": [{
                "heading": "Account | Late Shipment Rate",
                "message": "Late shipment rate is above 4%",
                "solution": "Ship on time"
            }],
            "total": 1, "page": 1, "limit": 2
        }),
    );
    // conversion is not scripted and will fail
    let store = store_over(&transport, Duration::from_secs(300));

    let results = store.load_all().await;
    let failed: Vec<_> = results
        .iter()
        .filter_map(|(c, r)| r.is_err().then_some(*c))
        .collect();
    assert_eq!(failed, vec![Category::Conversion]);

    let counts = store.counts();
    assert_eq!(counts.ranking, 1);
    assert_eq!(counts.inventory, 1);
    assert_eq!(counts.account, 1);
    assert_eq!(counts.conversion, 0);
    assert_eq!(counts.grand_total(), 3);
}

#[tokio::test]
async fn test_reload_replaces_rows() {
    let transport = MockTransport::new();
    transport.respond("api/issues/ranking?page=1&limit=2", ranking_page(&["B001", "B002"], 2, 1));
    let store = store_over(&transport, Duration::from_secs(300));

    store.load(Category::Ranking).await.unwrap();
    assert_eq!(store.rows(Category::Ranking).len(), 2);

    // Filter changed server-side: same path now returns a different slice
    transport.respond("api/issues/ranking?page=1&limit=2", ranking_page(&["B009"], 1, 1));
    store.reload(Category::Ranking).await.unwrap();

    let rows = store.rows(Category::Ranking);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].asin, "B009");
}

#[tokio::test]
async fn test_dashboard_summary_cached_within_ttl() {
    let transport = MockTransport::new();
    transport.respond(
        "api/profitability?timeRange=last30",
        serde_json::json!({"revenue": 1000.0, "unitsSold": 50, "netProfit": 250.0, "margin": 25.0}),
    );
    let store = store_over(&transport, Duration::from_secs(300));

    let summary = store.profitability("last30").await.unwrap();
    assert_eq!(summary.revenue, 1000.0);

    // Within the dashboard TTL the cached entry is served, no new request
    let before = transport.request_count();
    let summary = store.profitability("last30").await.unwrap();
    assert_eq!(summary.units_sold, 50);
    assert_eq!(transport.request_count(), before);
}

#[tokio::test]
async fn test_dashboard_summary_served_stale_on_failure() {
    let transport = MockTransport::new();
    transport.respond(
        "api/reimbursements?timeRange=last30",
        serde_json::json!({"openCount": 3, "openAmount": 120.5}),
    );
    let config = ClientConfig::new("http://mock")
        .with_page_size(2)
        .with_dashboard_cache_ttl(Duration::ZERO);
    let api = ApiClient::with_transport(Arc::clone(&transport) as Arc<dyn Transport>);
    let store = CategoryStore::with_api(api, &config);

    let summary = store.reimbursements("last30").await.unwrap();
    assert_eq!(summary.open_count, 3);

    // Entry immediately stale; the refetch fails, the stale entry is served
    transport.unrespond("api/reimbursements?timeRange=last30");
    let summary = store.reimbursements("last30").await.unwrap();
    assert_eq!(summary.open_amount, 120.5);

    // A range never fetched has nothing to fall back to
    assert!(store.reimbursements("last7").await.is_err());
}
