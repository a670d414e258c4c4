//! Staged title search: normalize, match, rank
//!
//! Pipeline: the query and every title are normalized, the matcher tries
//! exact / substring / fuzzy stages first-hit-wins, and the ranker sorts,
//! filters, and truncates. Pure in-memory computation over a caller-owned
//! snapshot.

pub mod engine;
pub mod fuzzy;
pub mod matcher;
pub mod normalize;
pub mod ranking;

pub use engine::SearchEngine;
pub use fuzzy::partial_ratio;
pub use matcher::{MatchResult, MatchStage, Query};
pub use normalize::normalize;
pub use ranking::{rank, AttributeFilter};
