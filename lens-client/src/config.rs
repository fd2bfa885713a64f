//! Client configuration

use std::time::Duration;

/// Client configuration for connecting to the analytics backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://api.sellerlens.io")
    pub base_url: String,

    /// JWT token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Rows requested per page
    pub page_size: u32,

    /// Freshness TTL for category page data
    pub cache_ttl: Duration,

    /// Freshness TTL for dashboard summaries
    pub dashboard_cache_ttl: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            page_size: 10,
            cache_ttl: Duration::from_secs(5 * 60),
            dashboard_cache_ttl: Duration::from_secs(60 * 60),
        }
    }

    /// Set the JWT token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the category data freshness TTL
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Set the dashboard summary freshness TTL
    pub fn with_dashboard_cache_ttl(mut self, ttl: Duration) -> Self {
        self.dashboard_cache_ttl = ttl;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
