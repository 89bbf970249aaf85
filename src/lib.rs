//! # recstore
//!
//! An in-memory storage substrate for record-oriented databases:
//! - **OrderedIndex**: a sorted key index with point lookup, upsert,
//!   monotonic bulk append, and half-open range scans
//! - **RecordPage**: a fixed-capacity, append-mostly record page with
//!   in-place rid overwrite and slot-addressed reads
//! - Checksummed page snapshots for an outer persistence layer
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Table / Storage Manager                      │
//! │              (outer layer, not this crate)                   │
//! └──────────────┬──────────────────────────┬───────────────────┘
//!                │                          │
//!                ▼                          ▼
//!        ┌──────────────┐          ┌──────────────┐
//!        │ OrderedIndex │          │  RecordPage  │
//!        │ (sorted kv)  │          │ (slot store) │
//!        └──────────────┘          └──────┬───────┘
//!                                         │
//!                                         ▼
//!                                 ┌──────────────┐
//!                                 │   Snapshot   │
//!                                 │ (CRC frame)  │
//!                                 └──────────────┘
//! ```
//!
//! The two primitives are deliberately uncoupled: the index stores values
//! (e.g. encoded rids), not page pointers, and composing them into a table
//! is the outer layer's job. Every operation is synchronous and single
//! threaded; embedders serialize access per instance.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod index;
pub mod page;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StoreError};
pub use config::{IndexConfig, PAGE_RECORD_CAPACITY};
pub use index::{OrderedIndex, Selection, Selector};
pub use page::{Record, RecordPage, WriteOutcome};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of recstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
