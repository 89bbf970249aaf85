//! RecordPage Module
//!
//! Fixed-capacity physical storage unit for records.
//!
//! ## Responsibilities
//! - Append records up to a fixed capacity, assigning permanent slot indices
//! - In-place overwrite of the rid field (the only mutable field)
//! - Slot-addressed and bulk reads
//! - Checksummed binary snapshots for an outer persistence layer
//!
//! Pages never shrink: there is no delete or compaction here. Logical
//! deletion is layered above by rewriting the rid (tombstoning) without
//! relocating the physical record.

mod record_page;
mod snapshot;

pub use record_page::RecordPage;
pub use snapshot::{decode_page, encode_page};

use serde::{Deserialize, Serialize};

/// A fixed-shape record stored in a page
///
/// Only `rid` may change after the record is written; every other field is
/// frozen at write time. The bookkeeping fields are opaque to this crate and
/// interpreted by the outer table layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Rid of the previous version of this row; `None` for a base record
    pub indirection: Option<u64>,

    /// Record id: the single mutable field, used by outer layers e.g. to
    /// tombstone a logical row
    pub rid: u64,

    /// Creation time (unix millis), assigned by the caller
    pub timestamp: u64,

    /// Updated-columns bitmap, maintained by the outer table layer
    pub schema_encoding: u64,

    /// User column values
    pub columns: Vec<i64>,
}

impl Record {
    pub fn new(
        indirection: Option<u64>,
        rid: u64,
        timestamp: u64,
        schema_encoding: u64,
        columns: Vec<i64>,
    ) -> Self {
        Self {
            indirection,
            rid,
            timestamp,
            schema_encoding,
            columns,
        }
    }
}

/// Outcome of appending a record to a page
///
/// A full page is routine control flow, not an error: the caller is expected
/// to branch on `Full` and open a fresh page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Record stored at this slot index
    Slot(usize),

    /// Page at capacity; nothing was stored
    Full,
}

impl WriteOutcome {
    /// The assigned slot index, or `None` when the page was full
    pub fn slot(self) -> Option<usize> {
        match self {
            WriteOutcome::Slot(index) => Some(index),
            WriteOutcome::Full => None,
        }
    }

    /// True when the write was rejected for capacity
    pub fn is_full(self) -> bool {
        matches!(self, WriteOutcome::Full)
    }
}
