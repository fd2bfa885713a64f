//! Data models
//!
//! Wire shapes for the backend's per-category payloads plus the normalized
//! row type the pipeline emits. Field renames pin the backend's exact JSON
//! keys, including its historical misspellings; every nested field that may
//! be absent is an `Option`.

pub mod account;
pub mod conversion;
pub mod inventory;
pub mod issue;
pub mod keyword;
pub mod profitability;
pub mod ranking;
pub mod reimbursement;

// Re-exports
pub use account::*;
pub use conversion::*;
pub use inventory::*;
pub use issue::*;
pub use keyword::*;
pub use profitability::*;
pub use ranking::*;
pub use reimbursement::*;
