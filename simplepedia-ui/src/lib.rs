//! simplepedia-ui library - encyclopedia browser service
//!
//! Owns the browser session (collection + selection) and exposes it over a
//! JSON API. Page rendering happens in the client.

use std::sync::Arc;

use axum::Router;
use simplepedia_common::events::{EventBus, PediaEvent};
use simplepedia_common::{time, Article, Collection};
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod route;
pub mod session;

use session::Session;

/// Events buffered per SSE subscriber
pub const EVENT_BUS_CAPACITY: usize = 100;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Single session; handlers mutate it under the write lock, one at a time
    pub session: Arc<RwLock<Session>>,
    /// Broadcast of collection and selection changes
    pub events: EventBus,
}

impl AppState {
    /// Create new application state from the seed collection
    pub fn new(collection: Collection) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new(collection))),
            events: EventBus::new(EVENT_BUS_CAPACITY),
        }
    }

    /// Current collection snapshot
    pub async fn snapshot(&self) -> Collection {
        self.session.read().await.collection()
    }

    pub(crate) fn publish_selection(&self, session: &Session) {
        self.events.emit_lossy(PediaEvent::SelectionChanged {
            section: session.selection().current_section().cloned(),
            article_id: session.selection().current_article_id(),
            timestamp: time::now(),
        });
    }

    pub(crate) fn publish_save(&self, session: &Session, article: &Article, created: bool) {
        let timestamp = time::now();
        self.events.emit_lossy(PediaEvent::ArticleSaved {
            article_id: article.id,
            created,
            timestamp,
        });
        self.events.emit_lossy(PediaEvent::CollectionChanged {
            article_count: session.collection().len(),
            timestamp,
        });
        self.publish_selection(session);
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let api = Router::new()
        .route("/api/sections", get(api::list_sections))
        .route("/api/sections/:label/articles", get(api::list_section_articles))
        .route("/api/articles", get(api::list_articles).post(api::create_article))
        .route("/api/articles/:id", get(api::get_article).put(api::update_article))
        .route(
            "/api/selection",
            get(api::get_selection).delete(api::clear_selection),
        )
        .route("/api/selection/section", post(api::choose_section))
        .route("/api/selection/article", post(api::choose_article))
        .route("/api/navigate", post(api::navigate))
        .route("/api/route", get(api::open_route))
        .route("/api/buttons", get(api::get_buttons).post(api::press_button))
        .route("/api/editor", get(api::get_editor))
        .route("/api/events", get(api::event_stream));

    Router::new()
        .merge(api)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
