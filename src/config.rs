//! Configuration for recstore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default record capacity of a page
///
/// Matches the physical layout the outer storage manager assumes when it
/// sizes page ranges.
pub const PAGE_RECORD_CAPACITY: usize = 512;

/// Construction parameters for an [`crate::index::OrderedIndex`]
///
/// All three fields exist for interface compatibility with a durable
/// balanced-tree index that could replace the in-memory implementation
/// without changing callers. The in-memory index accepts them and uses none:
///
/// - `index_path` is never opened, created, or written
/// - `order` would be the B+ tree fan-out of a durable backend
/// - `cache_size` would be its node cache budget
#[derive(Debug, Clone)]
pub struct IndexConfig {
    // -------------------------------------------------------------------------
    // Storage Configuration (reserved for a future durable backend)
    // -------------------------------------------------------------------------
    /// Backing file path. Unused by the in-memory index.
    pub index_path: PathBuf,

    // -------------------------------------------------------------------------
    // Tree Configuration (reserved for a future durable backend)
    // -------------------------------------------------------------------------
    /// B+ tree fan-out. Unused by the in-memory index.
    pub order: usize,

    /// Node cache budget, in entries. Unused by the in-memory index.
    pub cache_size: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from("./index.db"),
            order: 75,
            cache_size: 10_000,
        }
    }
}

impl IndexConfig {
    /// Create a new config builder
    pub fn builder() -> IndexConfigBuilder {
        IndexConfigBuilder::default()
    }
}

/// Builder for IndexConfig
#[derive(Default)]
pub struct IndexConfigBuilder {
    config: IndexConfig,
}

impl IndexConfigBuilder {
    /// Set the backing file path (reserved, unused in-memory)
    pub fn index_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.index_path = path.into();
        self
    }

    /// Set the B+ tree fan-out (reserved, unused in-memory)
    pub fn order(mut self, order: usize) -> Self {
        self.config.order = order;
        self
    }

    /// Set the node cache budget (reserved, unused in-memory)
    pub fn cache_size(mut self, cache_size: usize) -> Self {
        self.config.cache_size = cache_size;
        self
    }

    pub fn build(self) -> IndexConfig {
        self.config
    }
}
