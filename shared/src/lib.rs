//! Shared types for the SellerLens dashboard
//!
//! Common types used across multiple crates including wire models for the
//! backend's category payloads, response structures, formatting helpers,
//! and utility types.

pub mod format;
pub mod models;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use response::{ApiResponse, PageMeta, PaginatedResponse};
pub use types::{Category, Timestamp};
