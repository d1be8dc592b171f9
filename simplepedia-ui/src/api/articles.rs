//! Article read and save endpoints
//!
//! Saves go through an [`EditorForm`] filled from the request body and
//! select the written article, mirroring the editor returning to the
//! article view.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use simplepedia_common::editor::EditorForm;
use simplepedia_common::{Article, ArticleId, Collection, Error};

use crate::api::ApiError;
use crate::AppState;

/// Body of POST and PUT requests
#[derive(Debug, Deserialize)]
pub struct ArticleBody {
    pub title: String,
    #[serde(default)]
    pub contents: String,
}

impl ArticleBody {
    fn fill(self, form: &mut EditorForm) {
        form.set_title(self.title);
        form.set_contents(self.contents);
    }
}

/// GET /api/articles
pub async fn list_articles(State(state): State<AppState>) -> Json<Collection> {
    Json(state.snapshot().await)
}

/// GET /api/articles/:id
pub async fn get_article(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Article>, ApiError> {
    let Path(id) = path?;
    let id = ArticleId(id);
    state
        .snapshot()
        .await
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::Core(Error::ArticleNotFound(id)))
}

/// POST /api/articles
pub async fn create_article(
    State(state): State<AppState>,
    Json(body): Json<ArticleBody>,
) -> Result<(StatusCode, Json<Article>), ApiError> {
    let mut form = EditorForm::create();
    body.fill(&mut form);

    let mut session = state.session.write().await;
    let article = session.save(&form)?;
    state.publish_save(&session, &article, true);
    Ok((StatusCode::CREATED, Json(article)))
}

/// PUT /api/articles/:id
///
/// An unknown id is 404; it is never turned into an add.
pub async fn update_article(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Json(body): Json<ArticleBody>,
) -> Result<Json<Article>, ApiError> {
    let Path(id) = path?;
    let mut session = state.session.write().await;
    let mut form = EditorForm::edit(&session.article(ArticleId(id))?);
    body.fill(&mut form);

    let article = session.save(&form)?;
    state.publish_save(&session, &article, false);
    Ok(Json(article))
}
