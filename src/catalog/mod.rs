//! Catalog of searchable title records
//!
//! The store side of the system: entries ingested from the upstream
//! channel feed, kept in memory and optionally persisted as JSON. The
//! search core never mutates a catalog; it receives `entries()` as an
//! immutable snapshot per call.

pub mod entry;
pub mod ingest;
pub mod store;

pub use entry::{CatalogEntry, ATTR_LANGUAGE, ATTR_YEAR};
pub use ingest::{entry_from_post, extract_language, extract_year};
pub use store::{Catalog, CatalogError};
