//! Search orchestration
//!
//! Ties normalization, staged matching, and ranking together behind one
//! entry point. A search is pure and synchronous: it runs over the
//! catalog snapshot it is handed, holds no state between calls, and is
//! therefore safe to invoke from any number of request handlers at once.

use tracing::debug;

use crate::catalog::CatalogEntry;
use crate::config::SearchConfig;
use crate::error::AppError;

use super::matcher::{match_catalog, MatchResult, Query};
use super::ranking::{rank, AttributeFilter};

/// Staged title search over a catalog snapshot.
pub struct SearchEngine {
    config: SearchConfig,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// Engine with the default configuration (limit 10, threshold 70).
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Engine with explicit tunables. Invalid configuration is rejected
    /// here, once, rather than on every search.
    pub fn with_config(config: SearchConfig) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Resolve a raw query against the catalog.
    ///
    /// An empty result is a first-class outcome, not an error; so is a
    /// query that normalizes to nothing.
    pub fn search<'a>(
        &self,
        raw_query: &str,
        catalog: &'a [CatalogEntry],
    ) -> Result<Vec<MatchResult<'a>>, AppError> {
        self.search_filtered(raw_query, catalog, None)
    }

    /// Resolve a raw query, optionally narrowing by an attribute before
    /// the limit is applied.
    pub fn search_filtered<'a>(
        &self,
        raw_query: &str,
        catalog: &'a [CatalogEntry],
        filter: Option<&AttributeFilter>,
    ) -> Result<Vec<MatchResult<'a>>, AppError> {
        let query = Query::new(raw_query);
        debug!(
            raw = %query.raw,
            normalized = %query.normalized,
            catalog_size = catalog.len(),
            "search started"
        );

        let hits = match_catalog(&query, catalog, self.config.fuzzy_threshold);
        let ranked = rank(hits, self.config.result_limit, filter, self.config.tie_break)?;

        debug!(results = ranked.len(), "search finished");
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry_from_post;
    use crate::config::TieBreak;
    use crate::search::matcher::MatchStage;
    use chrono::{DateTime, Utc};

    fn catalog(titles: &[(u64, &str)]) -> Vec<CatalogEntry> {
        let ts: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        titles
            .iter()
            .map(|(id, title)| entry_from_post(*id, title, ts))
            .collect()
    }

    #[test]
    fn test_search_end_to_end() {
        let engine = SearchEngine::new();
        let entries = catalog(&[
            (1, "Inception 2010"),
            (2, "The Dark Knight Rises"),
            (3, "Interstellar"),
        ]);

        let results = engine.search("inception 2010", &entries).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, 1);
        assert_eq!(results[0].stage, MatchStage::Exact);
    }

    #[test]
    fn test_search_respects_limit() {
        let config = SearchConfig {
            result_limit: 1,
            ..SearchConfig::default()
        };
        let engine = SearchEngine::with_config(config).unwrap();
        let entries = catalog(&[(1, "War Horse Extended"), (2, "War Horse")]);

        let results = engine.search("war hor", &entries).unwrap();
        // Both substring-match; the tighter title wins the single slot
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, 2);
    }

    #[test]
    fn test_search_filtered_by_language() {
        let engine = SearchEngine::new();
        let entries = catalog(&[
            (1, "Jawan 2023 Hindi"),
            (2, "Jawan 2023 Bengali"),
        ]);

        let filter = AttributeFilter::new("language", "bengali");
        let results = engine
            .search_filtered("jawan", &entries, Some(&filter))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, 2);
    }

    #[test]
    fn test_search_empty_query_yields_empty() {
        let engine = SearchEngine::new();
        let entries = catalog(&[(1, "Anything")]);
        assert!(engine.search("!!!", &entries).unwrap().is_empty());
    }

    #[test]
    fn test_search_empty_catalog() {
        let engine = SearchEngine::new();
        assert!(engine.search("anything", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = SearchConfig {
            result_limit: 0,
            ..SearchConfig::default()
        };
        assert!(SearchEngine::with_config(config).is_err());
    }

    #[test]
    fn test_recency_tie_break_config() {
        let config = SearchConfig {
            tie_break: TieBreak::Recency,
            ..SearchConfig::default()
        };
        let engine = SearchEngine::with_config(config).unwrap();

        let old = entry_from_post(1, "Heat", "2020-01-01T00:00:00Z".parse().unwrap());
        let new = entry_from_post(2, "Heat!", "2024-01-01T00:00:00Z".parse().unwrap());
        let entries = vec![old, new];

        let results = engine.search("heat", &entries).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].entry.id, 2);
    }
}
