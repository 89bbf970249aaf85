//! OrderedIndex implementation
//!
//! Sorted-vector index with binary search lookups.

use std::collections::BTreeMap;

use crate::config::IndexConfig;
use crate::error::{Result, StoreError};

use super::{Selection, Selector};

/// An ordered key-value index: i64 key → String value
///
/// ## Invariants
/// - The backing vector is strictly sorted ascending by key at all times,
///   with no duplicate keys.
/// - `batch_insert` only appends batches whose first key is strictly greater
///   than the current maximum, so an accepted batch preserves global order
///   provided the caller honors the sortedness precondition.
///
/// ## Concurrency
/// None built in. Each instance is exclusively owned by one logical caller;
/// an embedding layer must serialize mutations against readers itself.
pub struct OrderedIndex {
    /// Construction parameters, kept for a future durable backend
    config: IndexConfig,

    /// Sorted (key, value) pairs
    data: Vec<(i64, String)>,
}

impl OrderedIndex {
    /// Create an empty index
    ///
    /// The config's `index_path`, `order`, and `cache_size` are accepted for
    /// interface compatibility with a durable backend and left untouched;
    /// no file is opened or created.
    pub fn new(config: IndexConfig) -> Self {
        Self {
            config,
            data: Vec::new(),
        }
    }

    /// Insert a key-value pair, replacing the value if the key exists
    ///
    /// Upsert semantics: the key count grows only on a fresh key. Insertion
    /// position is found by binary search; a miss shifts the tail, so single
    /// inserts are O(n) worst case.
    pub fn insert(&mut self, key: i64, value: impl Into<String>) {
        let value = value.into();
        match self.data.binary_search_by_key(&key, |(k, _)| *k) {
            Ok(pos) => {
                tracing::trace!(key, "replacing value for existing key");
                self.data[pos].1 = value;
            }
            Err(pos) => {
                tracing::trace!(key, "inserting new key");
                self.data.insert(pos, (key, value));
            }
        }
    }

    /// Append a sorted batch of pairs past the current maximum key
    ///
    /// Precondition: `pairs` is sorted ascending by key with unique keys.
    /// Only the boundary is checked: when the index and the batch are both
    /// non-empty, the first batch key must be strictly greater than the
    /// current maximum, otherwise the call fails with `OrderViolation` and
    /// the index is left unmodified. The interior of the batch is trusted,
    /// not re-verified element by element.
    pub fn batch_insert(&mut self, pairs: Vec<(i64, String)>) -> Result<()> {
        if let (Some(&(last_key, _)), Some(&(first_new_key, _))) =
            (self.data.last(), pairs.first())
        {
            if first_new_key <= last_key {
                tracing::warn!(
                    last_key,
                    first_new_key,
                    "rejecting non-monotonic batch insert"
                );
                return Err(StoreError::OrderViolation {
                    last_key,
                    first_new_key,
                });
            }
        }

        tracing::debug!(count = pairs.len(), "appending batch to index tail");
        self.data.extend(pairs);
        Ok(())
    }

    /// Get the value for an exact key match
    ///
    /// O(log n) binary search. Fails with `KeyNotFound` when absent.
    pub fn get(&self, key: i64) -> Result<&str> {
        self.data
            .binary_search_by_key(&key, |(k, _)| *k)
            .map(|pos| self.data[pos].1.as_str())
            .map_err(|_| StoreError::KeyNotFound)
    }

    /// Return all entries with `start <= key < stop`, ordered by key
    ///
    /// Binary search locates the lower bound, then a forward scan collects
    /// entries until the upper bound is exceeded, O(log n + k) for k
    /// results. An empty interval yields an empty map.
    pub fn range_query(&self, start: i64, stop: i64) -> BTreeMap<i64, String> {
        let lower = self.data.partition_point(|(k, _)| *k < start);

        self.data[lower..]
            .iter()
            .take_while(|(k, _)| *k < stop)
            .map(|(k, v)| (*k, v.clone()))
            .collect()
    }

    /// Resolve a typed selector against the index
    ///
    /// `Selector::Key` maps to [`get`](Self::get); `Selector::Range` maps to
    /// [`range_query`](Self::range_query) and requires both bounds; a
    /// half-bounded range fails with `InvalidAccess`.
    pub fn lookup(&self, selector: Selector) -> Result<Selection> {
        match selector {
            Selector::Key(key) => Ok(Selection::One(self.get(key)?.to_string())),
            Selector::Range {
                start: Some(start),
                stop: Some(stop),
            } => Ok(Selection::Many(self.range_query(start, stop))),
            Selector::Range { .. } => Err(StoreError::InvalidAccess(
                "range selector must have both start and stop".to_string(),
            )),
        }
    }

    /// Number of stored keys
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// True when no keys are stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.data.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// The construction parameters this index was created with
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }
}

impl Default for OrderedIndex {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}
