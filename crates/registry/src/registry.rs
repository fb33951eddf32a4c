//! Insertion-ordered component storage
//!
//! The registry holds the fixed set of component records in memory and
//! exposes lookup by id plus iteration in insertion order. Insertion
//! order doubles as the stable tie-break for ranking, so it must be
//! preserved exactly.

use rustc_hash::FxHashMap;
use std::sync::Arc;
use uicatalog_core::{ComponentId, ComponentRecord, Error, Result};

/// Holds the immutable set of ComponentRecords
///
/// Mutation happens only during population (`add`); all read
/// operations are pure. Records are stored behind `Arc` so search
/// results can share them without copying.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    /// Records in insertion order
    records: Vec<Arc<ComponentRecord>>,

    /// Id -> insertion position
    by_id: FxHashMap<ComponentId, usize>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        ComponentRegistry::default()
    }

    /// Build a registry from an iterator of records
    ///
    /// Fails with `Error::DuplicateId` on the first id collision.
    pub fn from_records(records: impl IntoIterator<Item = ComponentRecord>) -> Result<Self> {
        let mut registry = ComponentRegistry::new();
        for record in records {
            registry.add(record)?;
        }
        Ok(registry)
    }

    /// Insert a record
    ///
    /// Fails with `Error::DuplicateId` if the id already exists; the
    /// registry remains usable after a failed add.
    pub fn add(&mut self, record: ComponentRecord) -> Result<()> {
        if self.by_id.contains_key(&record.id) {
            return Err(Error::DuplicateId(record.id));
        }
        let ordinal = self.records.len();
        self.by_id.insert(record.id.clone(), ordinal);
        self.records.push(Arc::new(record));
        Ok(())
    }

    /// Look up a record by id
    pub fn get(&self, id: &ComponentId) -> Result<Arc<ComponentRecord>> {
        self.by_id
            .get(id)
            .map(|&ordinal| self.records[ordinal].clone())
            .ok_or_else(|| Error::NotFound(id.clone()))
    }

    /// Check whether an id is present
    pub fn contains(&self, id: &ComponentId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Insertion position of an id, if present
    pub fn ordinal(&self, id: &ComponentId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Record at a given insertion position
    pub fn record_at(&self, ordinal: usize) -> Option<&Arc<ComponentRecord>> {
        self.records.get(ordinal)
    }

    /// Iterate all records in insertion order
    ///
    /// Each call produces a fresh iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ComponentRecord>> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the registry holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
