//! Navigation endpoints
//!
//! The front end reports route changes and button presses here; the
//! session translates them into selection changes.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use simplepedia_common::editor::EditorForm;
use simplepedia_common::navigation::{Button, ButtonBar, NavigationEvent};
use simplepedia_common::ArticleId;
use tracing::debug;

use crate::api::selection::SelectionResponse;
use crate::api::ApiError;
use crate::route::Route;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub route: Route,
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct PressRequest {
    pub button: Button,
}

/// The open editor form, as the editor page renders it
#[derive(Debug, Serialize)]
pub struct EditorResponse {
    /// None in create mode
    pub editing: Option<ArticleId>,
    pub title: String,
    pub contents: String,
    pub can_save: bool,
}

impl From<&EditorForm> for EditorResponse {
    fn from(form: &EditorForm) -> Self {
        Self {
            editing: form.editing(),
            title: form.title().to_string(),
            contents: form.contents().to_string(),
            can_save: form.can_save(),
        }
    }
}

/// POST /api/navigate
pub async fn navigate(
    State(state): State<AppState>,
    Json(event): Json<NavigationEvent>,
) -> Result<Json<NavigateResponse>, ApiError> {
    let mut session = state.session.write().await;
    let route = session.navigate(event)?;
    debug!("Navigation {:?} -> {}", event, route);
    state.publish_selection(&session);
    Ok(Json(NavigateResponse { route }))
}

/// GET /api/route?path=/articles/12
///
/// Opens a direct link and returns the resulting selection.
pub async fn open_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let route = Route::parse(&query.path).ok_or_else(|| ApiError::UnknownRoute(query.path.clone()))?;

    let mut session = state.session.write().await;
    session.open_route(route)?;
    state.publish_selection(&session);
    Ok(Json(SelectionResponse::from_session(&session)))
}

/// GET /api/buttons
pub async fn get_buttons(State(state): State<AppState>) -> Json<ButtonBar> {
    Json(state.session.read().await.buttons())
}

/// POST /api/buttons
///
/// A press on a disabled button is 409 and changes nothing.
pub async fn press_button(
    State(state): State<AppState>,
    Json(request): Json<PressRequest>,
) -> Result<Json<NavigateResponse>, ApiError> {
    let mut session = state.session.write().await;
    let route = session.press(request.button)?;
    debug!("Button {} -> {}", request.button, route);
    state.publish_selection(&session);
    Ok(Json(NavigateResponse { route }))
}

/// GET /api/editor
///
/// The form the editor is showing, or null outside the editor.
pub async fn get_editor(State(state): State<AppState>) -> Json<Option<EditorResponse>> {
    let session = state.session.read().await;
    Json(session.editor().map(EditorResponse::from))
}
