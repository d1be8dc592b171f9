//! Collection mutations
//!
//! Both operations are pure: they return a new [`Collection`] plus the
//! article that was written, and leave the argument untouched. Callers
//! replace their snapshot with the returned one.
//!
//! Cancelling an edit is not a mutation; the caller simply invokes neither.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::editor::can_save;
use crate::error::{Error, Result};
use crate::models::{Article, ArticleDraft, ArticleId, ArticleUpdate, Collection};
use crate::time;

/// Append a new article, stamped with the current time
///
/// The new id is one more than the largest id present; the first article of
/// an empty collection gets id 1.
pub fn add(collection: &Collection, draft: ArticleDraft) -> Result<(Collection, Article)> {
    add_at(collection, draft, time::now())
}

/// [`add`] with a caller-supplied timestamp
pub fn add_at(
    collection: &Collection,
    draft: ArticleDraft,
    edited: DateTime<Utc>,
) -> Result<(Collection, Article)> {
    if !can_save(&draft.title) {
        return Err(Error::EmptyTitle);
    }

    let id = next_id(collection)?;
    let article = Article {
        id,
        title: draft.title,
        contents: draft.contents,
        edited,
    };

    let mut articles = Vec::with_capacity(collection.len() + 1);
    articles.extend(collection.iter().cloned());
    articles.push(article.clone());

    debug!(id = %id, "Article added");
    Ok((Collection::new(articles), article))
}

/// Replace an existing article in place, stamped with the current time
///
/// Title and contents are replaced wholesale; the id never changes.
/// Fails with [`Error::ArticleNotFound`] if no article has `update.id`.
pub fn edit(collection: &Collection, update: ArticleUpdate) -> Result<(Collection, Article)> {
    edit_at(collection, update, time::now())
}

/// [`edit`] with a caller-supplied timestamp
pub fn edit_at(
    collection: &Collection,
    update: ArticleUpdate,
    edited: DateTime<Utc>,
) -> Result<(Collection, Article)> {
    let index = collection
        .position(update.id)
        .ok_or(Error::ArticleNotFound(update.id))?;

    if !can_save(&update.title) {
        return Err(Error::EmptyTitle);
    }

    let article = Article {
        id: update.id,
        title: update.title,
        contents: update.contents,
        edited,
    };

    let mut articles = collection.to_vec();
    articles[index] = article.clone();

    debug!(id = %article.id, "Article edited");
    Ok((Collection::new(articles), article))
}

fn next_id(collection: &Collection) -> Result<ArticleId> {
    match collection.max_id() {
        None => Ok(ArticleId::FIRST),
        Some(max) => max.next().ok_or(Error::IdExhausted),
    }
}
