//! Per-section article filter
//!
//! Titles are ordered the way a root-locale collator does it: base letters
//! first (accents and case folded away, so `Zöe` sits between `Zebra` and
//! `Zulu`), then accents, then case with lowercase first, then code point
//! order. The sort is stable, so identical titles keep their input order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::{Article, Collection, Section};

/// Articles filed under `section`, sorted by title
///
/// A label with no matching articles yields an empty list.
pub fn articles_in_section(collection: &Collection, section: &Section) -> Vec<Article> {
    let mut articles: Vec<Article> = collection
        .iter()
        .filter(|article| article.section().as_ref() == Some(section))
        .cloned()
        .collect();
    articles.sort_by(|a, b| compare_titles(&a.title, &b.title));
    articles
}

/// Locale-aware title comparison
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded_case(a).cmp(folded_case(b)))
        .then_with(|| {
            // Case-only difference: lowercase sorts first
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Decomposed, lowercased, combining marks dropped
fn base_letters(title: &str) -> impl Iterator<Item = char> + '_ {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Decomposed and lowercased; an unaccented letter sorts before its accented forms
fn folded_case(title: &str) -> impl Iterator<Item = char> + '_ {
    title.nfd().flat_map(char::to_lowercase)
}
