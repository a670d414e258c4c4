//! Error types and handling for the titleseek core and CLI

use serde::Serialize;
use std::fmt;

use crate::catalog::CatalogError;
use crate::search::fuzzy::MAX_SIMILARITY;

/// Application error types
///
/// Precondition violations are rejected with a typed error rather than
/// silently defaulted; silent defaults in earlier bot variants caused
/// duplicate-notification and double-counting bugs.
#[derive(Debug, Serialize)]
pub enum AppError {
    InvalidInput(String),
    InvalidLimit(usize),
    InvalidThreshold(u8),
    CatalogUnavailable(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::InvalidLimit(limit) => {
                write!(f, "Invalid result limit: {} (must be positive)", limit)
            }
            AppError::InvalidThreshold(t) => write!(
                f,
                "Invalid fuzzy threshold: {} (must be at most {})",
                t, MAX_SIMILARITY
            ),
            AppError::CatalogUnavailable(msg) => write!(f, "Catalog unavailable: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Stable machine-readable code for each error class
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::InvalidLimit(_) => "invalid_limit",
            AppError::InvalidThreshold(_) => "invalid_threshold",
            AppError::CatalogUnavailable(_) => "catalog_unavailable",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// True for caller-misuse errors (CLI exits 2 for these, 1 otherwise)
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            AppError::InvalidInput(_) | AppError::InvalidLimit(_) | AppError::InvalidThreshold(_)
        )
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::CatalogUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Validation functions
pub fn validate_limit(limit: usize) -> Result<(), AppError> {
    if limit == 0 {
        return Err(AppError::InvalidLimit(limit));
    }
    Ok(())
}

pub fn validate_threshold(threshold: u8) -> Result<(), AppError> {
    if threshold > MAX_SIMILARITY {
        return Err(AppError::InvalidThreshold(threshold));
    }
    Ok(())
}
