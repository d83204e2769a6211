//! Address Store
//!
//! A fixed set of address records, loaded once at startup and never written
//! again. The store is shared behind an `Arc` and only ever read, so lookups
//! need no locking.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::model::AddressRecord;

/// Dataset compiled into the binary; used unless a seed file is configured.
const EMBEDDED_SEED: &str = include_str!("../data/addresses.json");

/// Errors that can occur while loading seed data
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate address id in seed data: {0}")]
    DuplicateId(i64),
}

/// Read-only address lookup table.
#[derive(Debug, Default)]
pub struct AddressStore {
    records: HashMap<i64, AddressRecord>,
}

impl AddressStore {
    /// Store built from the embedded dataset.
    pub fn seeded() -> Result<Self, SeedError> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Store built from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let records: Vec<AddressRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Store built from a JSON seed file on disk.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        info!("Loaded {} addresses from {}", store.len(), path.display());
        Ok(store)
    }

    /// Store built from records; ids must be unique.
    pub fn from_records(records: impl IntoIterator<Item = AddressRecord>) -> Result<Self, SeedError> {
        let mut map = HashMap::new();
        for record in records {
            let id = record.address_id;
            if map.insert(id, record).is_some() {
                return Err(SeedError::DuplicateId(id));
            }
        }
        Ok(Self { records: map })
    }

    pub fn lookup(&self, address_id: i64) -> Option<&AddressRecord> {
        self.records.get(&address_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
