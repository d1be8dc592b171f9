//! Article data model
//!
//! An [`Article`] is a single encyclopedia entry. A [`Collection`] is an
//! immutable snapshot of every article in a session: mutations in
//! [`crate::mutator`] build a new snapshot and never touch the old one, so a
//! reader holding a `Collection` always sees a fully-formed set.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article identifier, unique within a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl ArticleId {
    /// Id assigned to the first article of an empty collection
    pub const FIRST: ArticleId = ArticleId(1);

    /// The id following this one, or None on overflow
    pub fn next(self) -> Option<ArticleId> {
        self.0.checked_add(1).map(ArticleId)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ArticleId {
    fn from(id: i64) -> Self {
        ArticleId(id)
    }
}

/// A single encyclopedia entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub contents: String,
    /// Last edit time, serialized as ISO-8601
    pub edited: DateTime<Utc>,
}

impl Article {
    /// Section label this article is filed under
    ///
    /// None only for an empty title, which a valid article never has.
    pub fn section(&self) -> Option<Section> {
        Section::of_title(&self.title)
    }
}

/// Title and contents for an article that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    #[serde(default)]
    pub contents: String,
}

impl ArticleDraft {
    pub fn new(title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contents: contents.into(),
        }
    }
}

/// Full replacement for an existing article
///
/// Every field except `id` overrides the stored article; `edited` is always
/// stamped by the mutator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: String,
    #[serde(default)]
    pub contents: String,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            contents: contents.into(),
        }
    }
}

/// Section label: the uppercased first character of a title
///
/// Uppercasing can expand a character (`ß` becomes `SS`), so the label is
/// kept as a string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section(String);

impl Section {
    /// Build a label from caller input, normalizing it to uppercase
    pub fn new(label: impl AsRef<str>) -> Self {
        Section(label.as_ref().to_uppercase())
    }

    /// Section a title belongs to, None for an empty title
    pub fn of_title(title: &str) -> Option<Section> {
        title
            .chars()
            .next()
            .map(|first| Section(first.to_uppercase().collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable, cheaply clonable snapshot of a session's articles
///
/// Insertion order is kept but carries no meaning for display; consumers
/// always re-sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    articles: Arc<Vec<Article>>,
}

impl Collection {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: Arc::new(articles),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    pub fn as_slice(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn position(&self, id: ArticleId) -> Option<usize> {
        self.articles.iter().position(|article| article.id == id)
    }

    pub fn contains(&self, id: ArticleId) -> bool {
        self.position(id).is_some()
    }

    /// Largest id in the collection
    pub fn max_id(&self) -> Option<ArticleId> {
        self.articles.iter().map(|article| article.id).max()
    }

    /// True if both snapshots share the same backing storage
    pub fn ptr_eq(&self, other: &Collection) -> bool {
        Arc::ptr_eq(&self.articles, &other.articles)
    }

    pub fn to_vec(&self) -> Vec<Article> {
        self.articles.as_ref().clone()
    }
}

impl From<Vec<Article>> for Collection {
    fn from(articles: Vec<Article>) -> Self {
        Collection::new(articles)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Collection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.articles.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<Article>::deserialize(deserializer).map(Collection::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(id: i64, title: &str) -> Article {
        Article {
            id: ArticleId(id),
            title: title.to_string(),
            contents: String::new(),
            edited: Utc.with_ymd_and_hms(2016, 11, 19, 22, 57, 32).unwrap(),
        }
    }

    #[test]
    fn test_section_of_title_uppercases_first_char() {
        assert_eq!(Section::of_title("dalek"), Some(Section::new("D")));
        assert_eq!(Section::of_title("Zygon").unwrap().as_str(), "Z");
        assert_eq!(Section::of_title(""), None);
    }

    #[test]
    fn test_section_expands_multichar_uppercase() {
        assert_eq!(Section::of_title("ßeta").unwrap().as_str(), "SS");
    }

    #[test]
    fn test_section_new_normalizes_case() {
        assert_eq!(Section::new("d"), Section::new("D"));
    }

    #[test]
    fn test_collection_lookup() {
        let c = Collection::new(vec![article(3, "Cyberman"), article(7, "Sontaran")]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.get(ArticleId(7)).unwrap().title, "Sontaran");
        assert_eq!(c.position(ArticleId(3)), Some(0));
        assert!(!c.contains(ArticleId(4)));
        assert_eq!(c.max_id(), Some(ArticleId(7)));
        assert_eq!(Collection::empty().max_id(), None);
    }

    #[test]
    fn test_collection_clone_shares_storage() {
        let c = Collection::new(vec![article(1, "Dalek")]);
        let snapshot = c.clone();
        assert!(c.ptr_eq(&snapshot));
    }

    #[test]
    fn test_article_json_shape() {
        let json = r#"{"id":4,"title":"Ood","contents":"Telepathic","edited":"2016-11-19T22:57:32.639Z"}"#;
        let a: Article = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, ArticleId(4));
        assert_eq!(a.section(), Some(Section::new("O")));

        let value = serde_json::to_value(&a).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["edited"], "2016-11-19T22:57:32.639Z");
    }

    #[test]
    fn test_id_next_overflow() {
        assert_eq!(ArticleId(5).next(), Some(ArticleId(6)));
        assert_eq!(ArticleId(i64::MAX).next(), None);
    }
}
