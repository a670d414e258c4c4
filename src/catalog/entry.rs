//! Catalog record types
//!
//! One entry per indexed channel post. The upstream feed hands the store
//! the raw post text and numeric post id; the store derives everything
//! else.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::search::normalize;

/// Attribute key under which the detected language is stored.
pub const ATTR_LANGUAGE: &str = "language";

/// Attribute key under which the detected release year is stored.
pub const ATTR_YEAR: &str = "year";

/// A searchable title record.
///
/// `normalized_title` is derived from `title` and cached; it is never
/// persisted and is recomputed whenever the title changes, so the two can
/// not drift apart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Opaque upstream identifier (the channel post id). Unique within a
    /// catalog.
    pub id: u64,
    /// Raw title text as published upstream.
    pub title: String,
    /// Publication time of the upstream post.
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
    /// Free-form attributes (language, year, ...). Values are compared
    /// case-insensitively when filtering.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(skip)]
    pub(crate) normalized_title: String,
}

impl CatalogEntry {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        published_at: DateTime<Utc>,
        attributes: HashMap<String, String>,
    ) -> Self {
        let title = title.into();
        let normalized_title = normalize(&title);
        Self {
            id,
            title,
            published_at,
            attributes,
            normalized_title,
        }
    }

    /// Cached normalization of the title.
    pub fn normalized_title(&self) -> &str {
        &self.normalized_title
    }

    /// Look up an attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Recompute the cached normalization. Must be called after any
    /// mutation of `title`, including deserialization (serde skips the
    /// cache).
    pub(crate) fn refresh_normalized(&mut self) {
        self.normalized_title = normalize(&self.title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> DateTime<Utc> {
        "2024-01-01T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_new_caches_normalization() {
        let entry = CatalogEntry::new(1, "The Dark Knight (2008)", ts(), HashMap::new());
        assert_eq!(entry.normalized_title(), "thedarkknight2008");
    }

    #[test]
    fn test_refresh_after_title_change() {
        let mut entry = CatalogEntry::new(1, "Old Title", ts(), HashMap::new());
        entry.title = "New Title".to_string();
        entry.refresh_normalized();
        assert_eq!(entry.normalized_title(), "newtitle");
    }

    #[test]
    fn test_normalized_title_not_serialized() {
        let entry = CatalogEntry::new(7, "Dune", ts(), HashMap::new());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("normalized"));
    }

    #[test]
    fn test_attribute_lookup() {
        let mut attrs = HashMap::new();
        attrs.insert(ATTR_LANGUAGE.to_string(), "Hindi".to_string());
        let entry = CatalogEntry::new(2, "Movie", ts(), attrs);
        assert_eq!(entry.attribute(ATTR_LANGUAGE), Some("Hindi"));
        assert_eq!(entry.attribute(ATTR_YEAR), None);
    }
}
