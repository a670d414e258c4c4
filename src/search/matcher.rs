//! Staged catalog matching
//!
//! Resolves a free-text query against a catalog snapshot in three ordered
//! stages: exact normalized equality, normalized substring containment,
//! then partial-ratio fuzzy similarity. A later stage runs only when every
//! earlier stage produced zero results (first-hit-wins). Callers wanting
//! merge-across-stages semantics can invoke the stage functions directly.

use tracing::debug;

use super::fuzzy::partial_ratio;
use super::normalize::normalize;
use crate::catalog::CatalogEntry;

/// A free-text query with its cached normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub raw: String,
    pub normalized: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// A query that normalizes to nothing matches nothing; it would
    /// otherwise substring-match every title.
    pub fn is_degenerate(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Which strategy produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    Exact,
    Substring,
    Fuzzy,
}

/// One catalog entry that matched, with its 0-100 score and the stage
/// that produced it.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    pub entry: &'a CatalogEntry,
    pub score: u8,
    pub stage: MatchStage,
}

/// Stage 1: normalized title equals normalized query. All hits score 100.
pub fn exact_stage<'a>(query: &Query, catalog: &'a [CatalogEntry]) -> Vec<MatchResult<'a>> {
    catalog
        .iter()
        .filter(|entry| entry.normalized_title() == query.normalized)
        .map(|entry| MatchResult {
            entry,
            score: 100,
            stage: MatchStage::Exact,
        })
        .collect()
}

/// Stage 2: normalized query is a contiguous substring of the normalized
/// title. Tighter matches score higher: `100 * qlen / tlen`, clamped to
/// 1..=99 so a substring hit never outranks an exact one.
pub fn substring_stage<'a>(query: &Query, catalog: &'a [CatalogEntry]) -> Vec<MatchResult<'a>> {
    catalog
        .iter()
        .filter(|entry| entry.normalized_title().contains(&query.normalized))
        .map(|entry| {
            let qlen = query.normalized.len();
            let tlen = entry.normalized_title().len();
            let score = ((100 * qlen) / tlen).clamp(1, 99) as u8;
            MatchResult {
                entry,
                score,
                stage: MatchStage::Substring,
            }
        })
        .collect()
}

/// Stage 3: partial-ratio similarity between the raw query and the raw
/// title meets the threshold (inclusive). The similarity is the score.
pub fn fuzzy_stage<'a>(
    query: &Query,
    catalog: &'a [CatalogEntry],
    threshold: u8,
) -> Vec<MatchResult<'a>> {
    catalog
        .iter()
        .filter_map(|entry| {
            let score = partial_ratio(&query.raw, &entry.title);
            (score >= threshold).then_some(MatchResult {
                entry,
                score,
                stage: MatchStage::Fuzzy,
            })
        })
        .collect()
}

/// Run the staged lookup against a catalog snapshot.
///
/// Returns matches in catalog iteration order, unranked; degenerate
/// queries and empty catalogs yield an empty result, never an error.
pub fn match_catalog<'a>(
    query: &Query,
    catalog: &'a [CatalogEntry],
    fuzzy_threshold: u8,
) -> Vec<MatchResult<'a>> {
    if query.is_degenerate() {
        debug!(raw = %query.raw, "query normalizes to empty; skipping all stages");
        return Vec::new();
    }

    let exact = exact_stage(query, catalog);
    if !exact.is_empty() {
        debug!(hits = exact.len(), "exact stage matched");
        return exact;
    }

    let substring = substring_stage(query, catalog);
    if !substring.is_empty() {
        debug!(hits = substring.len(), "substring stage matched");
        return substring;
    }

    let fuzzy = fuzzy_stage(query, catalog, fuzzy_threshold);
    debug!(hits = fuzzy.len(), threshold = fuzzy_threshold, "fuzzy stage finished");
    fuzzy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::entry_from_post;
    use chrono::{DateTime, Utc};

    fn ts() -> DateTime<Utc> {
        "2024-01-01T00:00:00Z".parse().unwrap()
    }

    fn catalog(titles: &[(u64, &str)]) -> Vec<CatalogEntry> {
        titles
            .iter()
            .map(|(id, title)| entry_from_post(*id, title, ts()))
            .collect()
    }

    #[test]
    fn test_exact_match_ignores_case_and_punctuation() {
        let entries = catalog(&[(1, "Inception (2010)")]);
        let results = match_catalog(&Query::new("inception 2010"), &entries, 70);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, 1);
        assert_eq!(results[0].score, 100);
        assert_eq!(results[0].stage, MatchStage::Exact);
    }

    #[test]
    fn test_exact_short_circuits_substring() {
        // "Dune" matches id 1 exactly; id 2 would only substring-match,
        // so it must not appear
        let entries = catalog(&[(1, "Dune"), (2, "Dune Part Two")]);
        let results = match_catalog(&Query::new("dune"), &entries, 70);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, 1);
    }

    #[test]
    fn test_substring_fallback() {
        let entries = catalog(&[(2, "The Dark Knight Rises")]);
        let results = match_catalog(&Query::new("dark knight"), &entries, 70);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].stage, MatchStage::Substring);
        assert!(results[0].score > 0 && results[0].score < 100);
    }

    #[test]
    fn test_substring_score_formula() {
        // query "dark" (4) in "darkwaters" (10): 100 * 4 / 10 = 40
        let entries = catalog(&[(1, "Dark Waters")]);
        let results = match_catalog(&Query::new("dark"), &entries, 70);
        assert_eq!(results[0].score, 40);
    }

    #[test]
    fn test_substring_tighter_match_scores_higher() {
        let entries = catalog(&[(1, "War"), (2, "War Horse"), (3, "Charlie Wilsons War")]);
        let results = match_catalog(&Query::new("war h"), &entries, 70);
        // "warh" is a substring of "warhorse" only
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].entry.id, 2);

        let results = match_catalog(&Query::new("war"), &entries, 70);
        // Exact hit on id 1 wins outright
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].stage, MatchStage::Exact);
    }

    #[test]
    fn test_substring_score_decreases_with_title_length() {
        let entries = catalog(&[
            (1, "War Dogs"),
            (2, "War Horse Extended"),
            (3, "War Horse Extended Director Cut Edition"),
        ]);
        let results = match_catalog(&Query::new("war"), &entries, 70);
        assert_eq!(results.len(), 3);
        // Same catalog order as input; longer titles score strictly lower
        assert!(results[0].score > results[1].score);
        assert!(results[1].score > results[2].score);
    }

    #[test]
    fn test_fuzzy_fallback_tolerates_typo() {
        let entries = catalog(&[(3, "Interstellar")]);
        let results = match_catalog(&Query::new("intrstellar"), &entries, 70);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].stage, MatchStage::Fuzzy);
        assert!(results[0].score >= 70);
    }

    #[test]
    fn test_fuzzy_threshold_boundary_inclusive() {
        // partial_ratio("abcx", "abcd") == 75 exactly
        let entries = catalog(&[(1, "abcd")]);
        let query = Query::new("abcx");
        assert_eq!(fuzzy_stage(&query, &entries, 75).len(), 1);
        assert!(fuzzy_stage(&query, &entries, 76).is_empty());
    }

    #[test]
    fn test_no_stage_matches() {
        let entries = catalog(&[(4, "Unrelated Title")]);
        let results = match_catalog(&Query::new("xyz123"), &entries, 70);
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let results = match_catalog(&Query::new("anything"), &[], 70);
        assert!(results.is_empty());
    }

    #[test]
    fn test_degenerate_query_matches_nothing() {
        let entries = catalog(&[(1, "Anything At All")]);
        for q in ["", "?!", "   ", "---"] {
            assert!(match_catalog(&Query::new(q), &entries, 70).is_empty());
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let entries = catalog(&[(1, "Heat!"), (2, "Heat")]);
        let results = match_catalog(&Query::new("heat"), &entries, 70);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].entry.id, 1);
        assert_eq!(results[1].entry.id, 2);
    }
}
