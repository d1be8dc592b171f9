//! Section index
//!
//! Derives the section labels present in a collection. Sections are never
//! stored; they are recomputed from the snapshot on every query.

use std::collections::BTreeSet;

use crate::models::{Collection, Section};

/// Distinct section labels of a collection in ascending lexical order
///
/// An empty collection yields no sections.
pub fn section_index(collection: &Collection) -> Vec<Section> {
    collection
        .iter()
        .filter_map(|article| article.section())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
