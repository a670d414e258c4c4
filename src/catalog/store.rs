//! In-memory catalog store
//!
//! Holds the searchable snapshot the matching core runs over. Upserts are
//! keyed by the upstream post id and are idempotent; the normalized-title
//! cache is recomputed on every write so it can never go stale. JSON
//! persistence backs the CLI's file catalog.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::entry::CatalogEntry;

/// Errors from catalog persistence.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The set of searchable entries, in ingestion order.
///
/// Iteration order is the tie-break order the matcher sees, so it is kept
/// stable: an upsert of an existing id updates in place without moving the
/// entry.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_id: HashMap<u64, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update an entry, keyed by `entry.id`. Returns true when
    /// an existing entry was replaced.
    pub fn upsert(&mut self, entry: CatalogEntry) -> bool {
        match self.by_id.get(&entry.id) {
            Some(&pos) => {
                debug!(id = entry.id, "catalog upsert: updating existing entry");
                self.entries[pos] = entry;
                true
            }
            None => {
                debug!(id = entry.id, "catalog upsert: inserting new entry");
                self.by_id.insert(entry.id, self.entries.len());
                self.entries.push(entry);
                false
            }
        }
    }

    /// Administrative delete. Returns true when the id was present.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.by_id.remove(&id) {
            Some(pos) => {
                self.entries.remove(pos);
                // Positions after the removed entry shift down by one
                for (i, e) in self.entries.iter().enumerate().skip(pos) {
                    self.by_id.insert(e.id, i);
                }
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<&CatalogEntry> {
        self.by_id.get(&id).map(|&pos| &self.entries[pos])
    }

    /// The immutable snapshot the search core runs over.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count entries per value of the given attribute key. Entries without
    /// the attribute are not counted.
    pub fn attribute_counts(&self, key: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for entry in &self.entries {
            if let Some(value) = entry.attribute(key) {
                *counts.entry(value.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Load a catalog from a JSON file. A missing file yields an empty
    /// catalog so first use of the CLI needs no setup step.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let data = fs::read_to_string(path)?;
        let mut entries: Vec<CatalogEntry> = serde_json::from_str(&data)?;
        // The normalized-title cache is not persisted
        for entry in &mut entries {
            entry.refresh_normalized();
        }
        let mut catalog = Self::new();
        for entry in entries {
            catalog.upsert(entry);
        }
        Ok(catalog)
    }

    /// Save the catalog as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, data)?;
        Ok(())
    }
}
