//! titleseek: staged title matching and ranking for media index bots
//!
//! Resolves free-text queries against a catalog of media titles the way
//! the channel-index bots do it: normalize, try an exact match, fall back
//! to substring containment, fall back to fuzzy similarity, then rank and
//! truncate. The catalog is handed in as an immutable snapshot per call;
//! the core performs no I/O and keeps no cross-call state.
//!
//! ```
//! use titleseek::catalog::entry_from_post;
//! use titleseek::search::SearchEngine;
//!
//! let ts = "2024-01-01T00:00:00Z".parse().unwrap();
//! let catalog = vec![entry_from_post(17, "Interstellar 2014 English", ts)];
//!
//! let engine = SearchEngine::new();
//! let results = engine.search("intrstellar", &catalog).unwrap();
//! assert_eq!(results[0].entry.id, 17);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod search;

pub use catalog::{Catalog, CatalogEntry};
pub use config::{SearchConfig, TieBreak};
pub use error::AppError;
pub use search::{AttributeFilter, MatchResult, MatchStage, SearchEngine};
