//! Selection endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use simplepedia_common::navigation::ButtonBar;
use simplepedia_common::{Article, ArticleId, Section, SelectionState};

use crate::api::ApiError;
use crate::route::Route;
use crate::session::Session;
use crate::AppState;

/// Everything the index bar and article view need to render
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub selection: SelectionState,
    pub route: Route,
    /// Articles of the open section, in display order
    pub titles: Vec<TitleEntry>,
    pub article: Option<Article>,
    pub buttons: ButtonBar,
}

#[derive(Debug, Serialize)]
pub struct TitleEntry {
    pub id: ArticleId,
    pub title: String,
}

impl SelectionResponse {
    pub fn from_session(session: &Session) -> Self {
        let collection = session.collection();
        let titles = session
            .selection()
            .visible_articles(&collection)
            .into_iter()
            .map(|article| TitleEntry {
                id: article.id,
                title: article.title,
            })
            .collect();

        Self {
            selection: session.selection().state().clone(),
            route: session.route(),
            titles,
            article: session.current_article().cloned(),
            buttons: session.buttons(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChooseSectionRequest {
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct ChooseArticleRequest {
    pub id: i64,
}

/// GET /api/selection
pub async fn get_selection(State(state): State<AppState>) -> Json<SelectionResponse> {
    let session = state.session.read().await;
    Json(SelectionResponse::from_session(&session))
}

/// POST /api/selection/section
pub async fn choose_section(
    State(state): State<AppState>,
    Json(request): Json<ChooseSectionRequest>,
) -> Json<SelectionResponse> {
    let mut session = state.session.write().await;
    session.choose_section(Section::new(request.label));
    state.publish_selection(&session);
    Json(SelectionResponse::from_session(&session))
}

/// POST /api/selection/article
pub async fn choose_article(
    State(state): State<AppState>,
    Json(request): Json<ChooseArticleRequest>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let mut session = state.session.write().await;
    session.choose_article(ArticleId(request.id))?;
    state.publish_selection(&session);
    Ok(Json(SelectionResponse::from_session(&session)))
}

/// DELETE /api/selection
pub async fn clear_selection(State(state): State<AppState>) -> Json<SelectionResponse> {
    let mut session = state.session.write().await;
    session.clear_selection();
    state.publish_selection(&session);
    Json(SelectionResponse::from_session(&session))
}
