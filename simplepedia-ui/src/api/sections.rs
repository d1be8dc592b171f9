//! Section browsing

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use simplepedia_common::filter::articles_in_section;
use simplepedia_common::sections::section_index;
use simplepedia_common::{Article, Section};
use tracing::debug;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SectionsResponse {
    pub sections: Vec<Section>,
}

#[derive(Debug, Serialize)]
pub struct SectionArticlesResponse {
    pub section: Section,
    pub articles: Vec<Article>,
}

/// GET /api/sections
pub async fn list_sections(State(state): State<AppState>) -> Json<SectionsResponse> {
    let collection = state.snapshot().await;
    let sections = section_index(&collection);
    debug!("Listing {} sections", sections.len());
    Json(SectionsResponse { sections })
}

/// GET /api/sections/:label/articles
///
/// An unknown label yields an empty list.
pub async fn list_section_articles(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> Json<SectionArticlesResponse> {
    let section = Section::new(label);
    let collection = state.snapshot().await;
    let articles = articles_in_section(&collection, &section);
    Json(SectionArticlesResponse { section, articles })
}
