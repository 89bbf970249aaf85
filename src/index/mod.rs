//! OrderedIndex Module
//!
//! Sorted key index for primary-key lookups and range scans.
//!
//! ## Responsibilities
//! - Point lookup and upsert on an i64 key
//! - Monotonic bulk append for load-ordered ingest
//! - Half-open range scans, ordered by key
//! - Ordered iteration for outer-layer scans
//!
//! ## Data Structure Choice
//! A sorted `Vec<(i64, String)>` with binary search:
//! - Ordered keys (required for range scans)
//! - Simple and correct first, optimize later
//! - Future: a durable B+ tree behind the same contract, making the
//!   reserved [`crate::config::IndexConfig`] fields meaningful

mod ordered;

pub use ordered::OrderedIndex;

use std::collections::BTreeMap;

/// A single-key or range request against the index
///
/// The typed counterpart of subscript access on the index: a key selects one
/// value, a fully-bounded range selects an ordered map. A range missing
/// either bound is rejected with
/// [`InvalidAccess`](crate::error::StoreError::InvalidAccess).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Exact-match lookup of one key
    Key(i64),

    /// Half-open range `[start, stop)`; both bounds are required
    Range {
        start: Option<i64>,
        stop: Option<i64>,
    },
}

/// The result of a [`Selector`] lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Value of the selected key
    One(String),

    /// All entries in the selected range, ordered by key
    Many(BTreeMap<i64, String>),
}
