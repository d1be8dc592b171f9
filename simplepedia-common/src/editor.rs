//! Article editor form
//!
//! Holds the title and contents being edited. In edit mode the form is
//! pre-loaded from an existing article; in create mode it starts blank.
//! The save action is available iff the trimmed title is non-empty.
//! Cancelling simply discards the form; nothing is written.

use crate::models::{Article, ArticleDraft, ArticleId, ArticleUpdate};

/// Whether a title allows saving; contents may be empty
pub fn can_save(title: &str) -> bool {
    !title.trim().is_empty()
}

/// What the editor hands back when save is pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// Create mode
    Created(ArticleDraft),
    /// Edit mode
    Updated(ArticleUpdate),
}

/// Title/contents form for creating or editing an article
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorForm {
    editing: Option<ArticleId>,
    title: String,
    contents: String,
}

impl EditorForm {
    /// Blank form for a new article
    pub fn create() -> Self {
        Self::default()
    }

    /// Form pre-loaded from `article`
    pub fn edit(article: &Article) -> Self {
        Self {
            editing: Some(article.id),
            title: article.title.clone(),
            contents: article.contents.clone(),
        }
    }

    pub fn editing(&self) -> Option<ArticleId> {
        self.editing
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.contents = contents.into();
    }

    pub fn can_save(&self) -> bool {
        can_save(&self.title)
    }

    /// Press save; None while the save control is disabled
    pub fn save(&self) -> Option<EditorOutcome> {
        if !self.can_save() {
            return None;
        }
        Some(match self.editing {
            Some(id) => EditorOutcome::Updated(ArticleUpdate::new(
                id,
                self.title.clone(),
                self.contents.clone(),
            )),
            None => EditorOutcome::Created(ArticleDraft::new(
                self.title.clone(),
                self.contents.clone(),
            )),
        })
    }
}
