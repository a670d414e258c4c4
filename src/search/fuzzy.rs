//! Partial-ratio fuzzy similarity
//!
//! Best-aligned substring edit similarity on a 0-100 scale, the same
//! measure difflib-style matchers approximate. The shorter string slides
//! over every window of its own length in the longer one; the best window
//! wins. Levenshtein distance comes from the strsim crate.

use strsim::levenshtein;

/// Similarity scale ceiling. Scores are always in `0..=100`.
pub const MAX_SIMILARITY: u8 = 100;

/// Compute the partial-ratio similarity between two strings,
/// case-insensitively. Returns 0 when either side is empty.
///
/// Punctuation and spacing are significant here, unlike the
/// normalized-equality stages; typo tolerance is the whole point of this
/// measure, so the raw text is compared.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (needle, haystack) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let m = needle.len();
    let needle_str: String = needle.iter().collect();

    let mut best: u8 = 0;
    for start in 0..=(haystack.len() - m) {
        let window: String = haystack[start..start + m].iter().collect();
        let distance = levenshtein(&needle_str, &window);
        // 100 * (m - distance) / m, floored at 0
        let similarity = if distance >= m {
            0
        } else {
            ((m - distance) * MAX_SIMILARITY as usize / m) as u8
        };
        if similarity > best {
            best = similarity;
        }
        if best == MAX_SIMILARITY {
            break;
        }
    }

    best
}
