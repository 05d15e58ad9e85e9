//! Locale-aware name ordering and case-insensitive search.
//!
//! Ordering compares names first with accents and case removed (so "Bánh"
//! sorts with "Banh", before "Cà"), then by lowercase form, then by the
//! raw string so that the order is total.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Primary collation key: decomposed, marks stripped, lowercased.
fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' | 'Đ' => 'd',
            other => other,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Canonical composed lowercase form used for substring search.
fn fold(s: &str) -> String {
    s.nfc().collect::<String>().to_lowercase()
}

/// Compare two recipe names for display order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| fold(a).cmp(&fold(b)))
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring match. A blank term matches everything.
pub fn matches_search(name: &str, term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || fold(name).contains(&fold(term))
}
