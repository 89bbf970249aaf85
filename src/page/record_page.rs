//! RecordPage implementation
//!
//! Vec-backed page with a hard record-count bound.

use std::fmt;

use crate::config::PAGE_RECORD_CAPACITY;
use crate::error::{Result, StoreError};

use super::{Record, WriteOutcome};

/// A fixed-capacity, append-mostly store of records
///
/// ## Invariants
/// - A record's slot index is assigned at write time and never changes; it
///   is the sole addressing handle for `overwrite_rid` and `read_index`.
/// - The page never holds more than `capacity` records; a write against a
///   full page returns [`WriteOutcome::Full`] without mutating state.
#[derive(Debug)]
pub struct RecordPage {
    /// Maximum record count, fixed at construction
    capacity: usize,

    /// Records in slot order (slot index = position)
    records: Vec<Record>,
}

impl RecordPage {
    /// Create an empty page with the given record capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: Vec::new(),
        }
    }

    /// True while at least one slot remains
    pub fn has_capacity(&self) -> bool {
        self.records.len() < self.capacity
    }

    /// Append a record at the next slot
    ///
    /// Returns the assigned slot index, or [`WriteOutcome::Full`] when the
    /// page is at capacity. A rejected write leaves the page untouched.
    pub fn write(&mut self, record: Record) -> WriteOutcome {
        if !self.has_capacity() {
            tracing::trace!(capacity = self.capacity, "write rejected, page full");
            return WriteOutcome::Full;
        }

        let slot = self.records.len();
        self.records.push(record);
        WriteOutcome::Slot(slot)
    }

    /// Replace the rid of the record at `index`
    ///
    /// The rid is the only field reachable through this contract; all other
    /// fields of the record stay frozen. Fails with `IndexOutOfRange` when
    /// the slot does not exist.
    pub fn overwrite_rid(&mut self, index: usize, new_rid: u64) -> Result<()> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;

        record.rid = new_rid;
        Ok(())
    }

    /// Copy of the record at `index`
    ///
    /// Fails with `IndexOutOfRange` when the slot does not exist.
    pub fn read_index(&self, index: usize) -> Result<Record> {
        self.records
            .get(index)
            .cloned()
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Copies of all records, in slot order
    pub fn read_all(&self) -> Vec<Record> {
        self.records.clone()
    }

    /// Number of records currently stored
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are stored
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The fixed record capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub(super) fn from_parts(capacity: usize, records: Vec<Record>) -> Self {
        Self { capacity, records }
    }
}

impl Default for RecordPage {
    fn default() -> Self {
        Self::new(PAGE_RECORD_CAPACITY)
    }
}

impl fmt::Display for RecordPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RecordPage({}/{} records)",
            self.records.len(),
            self.capacity
        )
    }
}
