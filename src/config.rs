//! Search configuration
//!
//! The core has exactly two tunables: the result limit and the fuzzy
//! threshold. They are explicit values handed to the engine, never ambient
//! globals; `from_env` exists only as a convenience for the CLI, matching
//! the `RESULTS_COUNT`-style environment knobs of the deployed bots.

use crate::error::{validate_limit, validate_threshold, AppError};

/// Default maximum number of results returned per search.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Default minimum partial-ratio similarity for the fuzzy stage.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 70;

/// Tie-break order among equal-score results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Keep catalog iteration order (stable sort).
    #[default]
    CatalogOrder,
    /// Newest publication time first among equal scores.
    Recency,
}

/// Tunables for one search engine instance.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Maximum number of results per search. Must be positive.
    pub result_limit: usize,
    /// Inclusive minimum similarity for the fuzzy stage, 0-100.
    pub fuzzy_threshold: u8,
    /// Tie-break among equal scores.
    pub tie_break: TieBreak,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            tie_break: TieBreak::default(),
        }
    }
}

impl SearchConfig {
    /// Reject structurally invalid configuration.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_limit(self.result_limit)?;
        validate_threshold(self.fuzzy_threshold)?;
        Ok(())
    }

    /// Read overrides from `TITLESEEK_RESULT_LIMIT` and
    /// `TITLESEEK_FUZZY_THRESHOLD`. Unset variables keep defaults;
    /// unparseable or out-of-range values are errors, not silent
    /// fallbacks.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("TITLESEEK_RESULT_LIMIT") {
            config.result_limit = raw.parse().map_err(|_| {
                AppError::InvalidInput(format!("TITLESEEK_RESULT_LIMIT is not a number: {raw}"))
            })?;
        }
        if let Ok(raw) = std::env::var("TITLESEEK_FUZZY_THRESHOLD") {
            config.fuzzy_threshold = raw.parse().map_err(|_| {
                AppError::InvalidInput(format!(
                    "TITLESEEK_FUZZY_THRESHOLD is not a number: {raw}"
                ))
            })?;
        }
        config.validate()?;
        Ok(config)
    }
}
