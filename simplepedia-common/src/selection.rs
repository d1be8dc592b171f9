//! Selection state machine
//!
//! Tracks which section and which article the user is currently viewing.
//!
//! ```text
//!   NoSelection --choose_section--> SectionChosen --choose_article--> ArticleChosen
//!        ^                              ^    |                          |    |
//!        |                              |    +------ choose_section ----+    |
//!        +------------------------ clear (from any state) -------------------+
//! ```
//!
//! Choosing a section always discards the article, even when the same
//! section is chosen again. Any other change of the current article (a
//! click on a title, or a direct link handled by the router) re-derives the
//! section from the article's title.

use serde::{Deserialize, Serialize};

use crate::filter::articles_in_section;
use crate::models::{Article, ArticleId, Collection, Section};

/// Current position of the selection state machine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum SelectionState {
    /// Nothing selected
    #[default]
    NoSelection,
    /// A section is open but no article is shown
    SectionChosen { section: Section },
    /// An article is shown; `section` is always the article's own section
    ArticleChosen { section: Section, article: ArticleId },
}

/// Live selection controller
///
/// The controller holds article ids, not articles; resolve them against the
/// current [`Collection`] snapshot with [`SelectionController::current_article`].
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn current_section(&self) -> Option<&Section> {
        match &self.state {
            SelectionState::NoSelection => None,
            SelectionState::SectionChosen { section }
            | SelectionState::ArticleChosen { section, .. } => Some(section),
        }
    }

    pub fn current_article_id(&self) -> Option<ArticleId> {
        match &self.state {
            SelectionState::ArticleChosen { article, .. } => Some(*article),
            _ => None,
        }
    }

    /// Resolve the selected article against a snapshot
    ///
    /// None if nothing is selected or the article is not in `collection`.
    pub fn current_article<'c>(&self, collection: &'c Collection) -> Option<&'c Article> {
        self.current_article_id().and_then(|id| collection.get(id))
    }

    /// Articles listed for the current section, empty when no section is open
    pub fn visible_articles(&self, collection: &Collection) -> Vec<Article> {
        self.current_section()
            .map(|section| articles_in_section(collection, section))
            .unwrap_or_default()
    }

    /// Open a section, discarding any selected article
    pub fn choose_section(&mut self, section: Section) {
        self.state = SelectionState::SectionChosen { section };
    }

    /// Show an article, moving to its section if needed
    pub fn choose_article(&mut self, article: &Article) {
        // A titleless article is a caller contract violation; keep whatever
        // section is open rather than inventing one.
        let Some(section) = article.section().or_else(|| self.current_section().cloned()) else {
            self.state = SelectionState::NoSelection;
            return;
        };
        self.state = SelectionState::ArticleChosen {
            section,
            article: article.id,
        };
    }

    /// Entry point for externally driven changes (e.g. a direct link)
    ///
    /// `Some` behaves like [`choose_article`](Self::choose_article). `None`
    /// drops the article but keeps the open section.
    pub fn set_current_article(&mut self, article: Option<&Article>) {
        match article {
            Some(article) => self.choose_article(article),
            None => {
                self.state = match std::mem::take(&mut self.state) {
                    SelectionState::ArticleChosen { section, .. }
                    | SelectionState::SectionChosen { section } => {
                        SelectionState::SectionChosen { section }
                    }
                    SelectionState::NoSelection => SelectionState::NoSelection,
                };
            }
        }
    }

    /// Reset to `NoSelection`
    pub fn clear(&mut self) {
        self.state = SelectionState::NoSelection;
    }
}
