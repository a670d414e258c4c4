//! Ingestion helpers
//!
//! Turns a raw channel post (id + caption text + publication time) into a
//! catalog entry, detecting the language and release year from the text.

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::entry::{CatalogEntry, ATTR_LANGUAGE, ATTR_YEAR};

/// Languages recognized in post captions, in priority order.
const KNOWN_LANGUAGES: &[&str] = &["Bengali", "Hindi", "English", "Tamil", "Telugu"];

fn year_regex() -> &'static Regex {
    static YEAR_RE: OnceLock<Regex> = OnceLock::new();
    YEAR_RE.get_or_init(|| Regex::new(r"\b(19|20)\d{2}\b").expect("valid year regex"))
}

/// Detect the first known language mentioned in the text,
/// case-insensitively.
pub fn extract_language(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    KNOWN_LANGUAGES
        .iter()
        .find(|lang| lower.contains(&lang.to_lowercase()))
        .copied()
}

/// Detect a four-digit release year (1900-2099) in the text.
pub fn extract_year(text: &str) -> Option<String> {
    year_regex().find(text).map(|m| m.as_str().to_string())
}

/// Build a catalog entry from a raw upstream post, populating the
/// `language` and `year` attributes when they can be detected.
pub fn entry_from_post(id: u64, text: &str, published_at: DateTime<Utc>) -> CatalogEntry {
    let mut attributes = HashMap::new();
    if let Some(lang) = extract_language(text) {
        attributes.insert(ATTR_LANGUAGE.to_string(), lang.to_string());
    }
    if let Some(year) = extract_year(text) {
        attributes.insert(ATTR_YEAR.to_string(), year);
    }
    CatalogEntry::new(id, text, published_at, attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> DateTime<Utc> {
        "2024-06-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_extract_language_case_insensitive() {
        assert_eq!(extract_language("Pathaan 2023 HINDI WEB-DL"), Some("Hindi"));
        assert_eq!(extract_language("Jawan (bengali dub)"), Some("Bengali"));
        assert_eq!(extract_language("Oppenheimer 2160p"), None);
    }

    #[test]
    fn test_extract_language_priority_order() {
        // First entry of the known list wins when several appear
        assert_eq!(
            extract_language("Dual audio Hindi Bengali"),
            Some("Bengali")
        );
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(
            extract_year("Inception 2010 1080p"),
            Some("2010".to_string())
        );
        assert_eq!(extract_year("Casablanca 1942"), Some("1942".to_string()));
        assert_eq!(extract_year("No year here"), None);
    }

    #[test]
    fn test_extract_year_ignores_resolutions() {
        // 2160 is inside "2160p", not a standalone year token
        assert_eq!(extract_year("Dune 2160p HDR"), None);
    }

    #[test]
    fn test_entry_from_post_attributes() {
        let entry = entry_from_post(42, "Kantara 2022 Hindi HDRip", ts());
        assert_eq!(entry.id, 42);
        assert_eq!(entry.attribute(ATTR_LANGUAGE), Some("Hindi"));
        assert_eq!(entry.attribute(ATTR_YEAR), Some("2022"));
        assert_eq!(entry.normalized_title(), "kantara2022hindihdrip");
    }

    #[test]
    fn test_entry_from_post_without_attributes() {
        let entry = entry_from_post(7, "Some Obscure Film", ts());
        assert!(entry.attributes.is_empty());
    }
}
