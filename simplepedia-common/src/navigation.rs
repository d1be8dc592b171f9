//! Navigation events and button bar
//!
//! The core emits these abstract events; translating them to and from URLs
//! is the router's job.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ArticleId;
use crate::selection::SelectionController;

/// User intent that changes what is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "id", rename_all = "snake_case")]
pub enum NavigationEvent {
    /// Show an article, or return to the index with None
    Select(Option<ArticleId>),
    /// Open the editor on an existing article
    Edit(ArticleId),
    /// Open a blank editor
    CreateNew,
    /// Leave the editor without saving
    Cancel,
}

/// Which buttons the bar below the article offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonBar {
    pub add: bool,
    pub edit: bool,
}

impl ButtonBar {
    /// "Add" is always offered; "Edit" only while an article is shown
    pub fn for_selection(selection: &SelectionController) -> Self {
        Self {
            add: true,
            edit: selection.current_article_id().is_some(),
        }
    }

    /// Event a button press produces
    pub fn press(&self, button: Button, selection: &SelectionController) -> Option<NavigationEvent> {
        match button {
            Button::Add if self.add => Some(NavigationEvent::CreateNew),
            Button::Edit if self.edit => selection.current_article_id().map(NavigationEvent::Edit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    Add,
    Edit,
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Button::Add => f.write_str("add"),
            Button::Edit => f.write_str("edit"),
        }
    }
}
