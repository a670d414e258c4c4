//! Result ranking, filtering, and truncation
//!
//! Takes the matcher's unordered hits and produces the final bounded
//! result list: optional attribute narrowing, stable score-descending
//! sort, then the result-limit cut.

use crate::config::TieBreak;
use crate::error::{validate_limit, AppError};

use super::matcher::MatchResult;

/// Post-hoc attribute narrowing, e.g. language = "Hindi". The value
/// comparison is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeFilter {
    pub key: String,
    pub value: String,
}

impl AttributeFilter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn accepts(&self, result: &MatchResult<'_>) -> bool {
        result
            .entry
            .attribute(&self.key)
            .is_some_and(|v| v.eq_ignore_ascii_case(&self.value))
    }
}

/// Sort, filter, and truncate match results.
///
/// The sort is stable, so equal scores keep the matcher's catalog order
/// under [`TieBreak::CatalogOrder`]; [`TieBreak::Recency`] orders equal
/// scores newest-first instead. A zero limit is caller misuse and is
/// rejected; an empty output is a normal outcome.
pub fn rank<'a>(
    mut results: Vec<MatchResult<'a>>,
    limit: usize,
    filter: Option<&AttributeFilter>,
    tie_break: TieBreak,
) -> Result<Vec<MatchResult<'a>>, AppError> {
    validate_limit(limit)?;

    if let Some(filter) = filter {
        results.retain(|r| filter.accepts(r));
    }

    match tie_break {
        TieBreak::CatalogOrder => results.sort_by(|a, b| b.score.cmp(&a.score)),
        TieBreak::Recency => results.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.entry.published_at.cmp(&a.entry.published_at))
        }),
    }

    results.truncate(limit);
    Ok(results)
}
