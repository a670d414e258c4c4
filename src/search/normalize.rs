//! Query and title normalization
//!
//! The single normalization contract shared by every comparison site.
//! Earlier variants of the bot re-implemented this per call site with
//! slightly different regexes, which was the main source of inconsistent
//! matching; everything now funnels through [`normalize`].

/// Normalize text for comparison: keep ASCII letters and digits only,
/// lowercased. Spaces are stripped, not collapsed.
///
/// Deliberately not locale-aware and not a slug function; the catalog
/// titles are channel post captions and the queries are typed by hand, so
/// punctuation and spacing carry no signal.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
