//! Error types for recstore
//!
//! Provides a unified error type for all operations.
//!
//! Note that a full page is NOT an error: [`crate::page::RecordPage::write`]
//! reports capacity exhaustion through [`crate::page::WriteOutcome::Full`],
//! since callers branch on it as routine control flow.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for recstore operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Index Errors
    // -------------------------------------------------------------------------
    #[error("Key not found")]
    KeyNotFound,

    #[error("Batch keys must be sorted and greater than keys currently in the index (max stored key {last_key}, first batch key {first_new_key})")]
    OrderViolation { last_key: i64, first_new_key: i64 },

    #[error("Invalid access: {0}")]
    InvalidAccess(String),

    // -------------------------------------------------------------------------
    // Page Errors
    // -------------------------------------------------------------------------
    #[error("Slot index {index} out of range (page holds {len} records)")]
    IndexOutOfRange { index: usize, len: usize },

    // -------------------------------------------------------------------------
    // Snapshot Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Snapshot corruption detected: {0}")]
    SnapshotCorruption(String),
}
