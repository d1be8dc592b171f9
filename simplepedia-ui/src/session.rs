//! Browser session state
//!
//! A [`Session`] owns the collection snapshot, the selection controller, the
//! open editor form and the route history. It is the only writer of the
//! collection: every save replaces the snapshot with the one the mutator
//! returns.

use simplepedia_common::editor::{EditorForm, EditorOutcome};
use simplepedia_common::mutator;
use simplepedia_common::navigation::{Button, ButtonBar, NavigationEvent};
use simplepedia_common::{
    Article, ArticleDraft, ArticleId, ArticleUpdate, Collection, Error, Result, Section,
    SelectionController,
};
use tracing::{debug, info};

use crate::route::Route;

/// Routes kept for "back" navigation
const HISTORY_LIMIT: usize = 64;

#[derive(Debug, Clone, Default)]
pub struct Session {
    collection: Collection,
    selection: SelectionController,
    route: Route,
    history: Vec<Route>,
    /// Some exactly while the route is an editor route
    editor: Option<EditorForm>,
}

impl Session {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            ..Default::default()
        }
    }

    /// Current snapshot; cheap to clone and safe to hold across writes
    pub fn collection(&self) -> Collection {
        self.collection.clone()
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn editor(&self) -> Option<&EditorForm> {
        self.editor.as_ref()
    }

    pub fn current_article(&self) -> Option<&Article> {
        self.selection.current_article(&self.collection)
    }

    pub fn article(&self, id: ArticleId) -> Result<Article> {
        self.collection
            .get(id)
            .cloned()
            .ok_or(Error::ArticleNotFound(id))
    }

    pub fn buttons(&self) -> ButtonBar {
        ButtonBar::for_selection(&self.selection)
    }

    pub fn choose_section(&mut self, section: Section) {
        debug!(section = %section, "Section chosen");
        self.selection.choose_section(section);
        self.go(Route::Index);
    }

    pub fn choose_article(&mut self, id: ArticleId) -> Result<Article> {
        let article = self.article(id)?;
        self.selection.choose_article(&article);
        self.go(Route::Article(id));
        Ok(article)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.go(Route::Index);
    }

    /// Press save on `form`
    ///
    /// A form whose save control is disabled is refused with
    /// [`Error::EmptyTitle`].
    pub fn save(&mut self, form: &EditorForm) -> Result<Article> {
        match form.save().ok_or(Error::EmptyTitle)? {
            EditorOutcome::Created(draft) => self.save_new(draft),
            EditorOutcome::Updated(update) => self.save_existing(update),
        }
    }

    /// Add an article and show it
    pub fn save_new(&mut self, draft: ArticleDraft) -> Result<Article> {
        let (collection, article) = mutator::add(&self.collection, draft)?;
        self.collection = collection;
        info!(id = %article.id, title = %article.title, "Article created");

        self.selection.set_current_article(Some(&article));
        self.go(Route::Article(article.id));
        Ok(article)
    }

    /// Replace an existing article and show it
    ///
    /// An unknown id is returned as [`Error::ArticleNotFound`]; it is never
    /// turned into an add.
    pub fn save_existing(&mut self, update: ArticleUpdate) -> Result<Article> {
        let (collection, article) = mutator::edit(&self.collection, update)?;
        self.collection = collection;
        info!(id = %article.id, title = %article.title, "Article updated");

        self.selection.set_current_article(Some(&article));
        self.go(Route::Article(article.id));
        Ok(article)
    }

    /// Press a button on the bar
    pub fn press(&mut self, button: Button) -> Result<Route> {
        let event = self
            .buttons()
            .press(button, &self.selection)
            .ok_or_else(|| Error::ButtonDisabled(button.to_string()))?;
        self.navigate(event)
    }

    /// Apply a navigation event and return the route it leads to
    ///
    /// Editor-opening events are only accepted while the matching button is
    /// enabled. Cancel outside the editor leaves everything as it is.
    pub fn navigate(&mut self, event: NavigationEvent) -> Result<Route> {
        match event {
            NavigationEvent::Select(Some(id)) => {
                self.choose_article(id)?;
            }
            NavigationEvent::Select(None) => {
                self.selection.set_current_article(None);
                self.go(Route::Index);
            }
            NavigationEvent::Edit(id) => {
                self.require_enabled(Button::Edit, event)?;
                self.open_route(Route::Edit(id))?;
            }
            NavigationEvent::CreateNew => {
                self.require_enabled(Button::Add, event)?;
                self.open_route(Route::Create)?;
            }
            NavigationEvent::Cancel => self.cancel_editor()?,
        }
        Ok(self.route)
    }

    /// Open a direct link
    ///
    /// An unknown article id leaves the session untouched.
    pub fn open_route(&mut self, route: Route) -> Result<()> {
        self.apply_route(route)?;
        self.go(route);
        Ok(())
    }

    fn require_enabled(&self, button: Button, event: NavigationEvent) -> Result<()> {
        if self.buttons().press(button, &self.selection) == Some(event) {
            Ok(())
        } else {
            Err(Error::ButtonDisabled(button.to_string()))
        }
    }

    /// Discard the open form and return to the route the editor was opened from
    fn cancel_editor(&mut self) -> Result<()> {
        if !self.route.is_editor() {
            return Ok(());
        }
        let previous = self.history.last().copied().unwrap_or_default();
        self.apply_route(previous)?;
        self.history.pop();
        self.route = previous;
        debug!("Editor cancelled, back to {}", previous);
        Ok(())
    }

    fn apply_route(&mut self, route: Route) -> Result<()> {
        match route {
            Route::Index => {
                self.selection.set_current_article(None);
                self.editor = None;
            }
            Route::Article(id) => {
                let article = self.article(id)?;
                self.selection.set_current_article(Some(&article));
                self.editor = None;
            }
            Route::Edit(id) => {
                let article = self.article(id)?;
                self.selection.set_current_article(Some(&article));
                self.editor = Some(EditorForm::edit(&article));
            }
            Route::Create => {
                self.editor = Some(EditorForm::create());
            }
        }
        Ok(())
    }

    fn go(&mut self, route: Route) {
        if !route.is_editor() {
            self.editor = None;
        }
        if route == self.route {
            return;
        }
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(self.route);
        self.route = route;
    }
}
