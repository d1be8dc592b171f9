//! Integration tests for simplepedia-ui API endpoints
//!
//! Drives the router in-process with `oneshot`; each test gets a fresh
//! session seeded from the same fixture.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use simplepedia_common::seed::parse_seed;
use simplepedia_ui::{build_router, AppState};
use tower::util::ServiceExt; // for `oneshot` method

const SEED: &str = r#"[
    {"id": 1, "title": "Dalek", "contents": "Exterminate", "edited": "2016-11-19T22:57:32.639Z"},
    {"id": 2, "title": "Dominators", "contents": "Conquer", "edited": "2016-11-19T22:57:32.639Z"},
    {"id": 3, "title": "Ood", "contents": "Sing", "edited": "2016-11-19T22:57:32.639Z"}
]"#;

/// Test helper: state and router over the fixture
fn setup() -> (AppState, axum::Router) {
    let state = AppState::new(parse_seed(SEED).expect("fixture should parse"));
    let app = build_router(state.clone());
    (state, app)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (_, app) = setup();
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "simplepedia-ui");
    assert!(body["version"].is_string());
}

// =============================================================================
// Sections
// =============================================================================

#[tokio::test]
async fn test_sections_listed_sorted() {
    let (_, app) = setup();
    let response = app.oneshot(get("/api/sections")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["sections"], json!(["D", "O"]));
}

#[tokio::test]
async fn test_section_articles_sorted_by_title() {
    let (_, app) = setup();
    let response = app.oneshot(get("/api/sections/d/articles")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["section"], "D");
    let titles: Vec<&str> = body["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Dalek", "Dominators"]);
}

#[tokio::test]
async fn test_unknown_section_is_empty_not_error() {
    let (_, app) = setup();
    let response = app.oneshot(get("/api/sections/Q/articles")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["articles"], json!([]));
}

// =============================================================================
// Articles
// =============================================================================

#[tokio::test]
async fn test_get_article_and_not_found() {
    let (_, app) = setup();
    let response = app.clone().oneshot(get("/api/articles/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["title"], "Ood");
    assert_eq!(body["edited"], "2016-11-19T22:57:32.639Z");

    let response = app.oneshot(get("/api/articles/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn test_create_article_assigns_next_id_and_selects_it() {
    let (state, app) = setup();
    let request = with_json(
        "POST",
        "/api/articles",
        json!({"title": "White Robot", "contents": "Silent white beings from the land of fiction."}),
    );
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["id"], 4);
    assert_eq!(body["title"], "White Robot");

    assert_eq!(state.snapshot().await.len(), 4);
    let session = state.session.read().await;
    assert_eq!(session.selection().current_article_id().map(|id| id.0), Some(4));
}

#[tokio::test]
async fn test_create_article_with_blank_title_rejected() {
    let (state, app) = setup();
    let request = with_json("POST", "/api/articles", json!({"title": "   ", "contents": "x"}));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.snapshot().await.len(), 3);
}

#[tokio::test]
async fn test_update_article_replaces_in_place() {
    let (state, app) = setup();
    let request = with_json("PUT", "/api/articles/2", json!({"title": "New Title", "contents": "X"}));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["title"], "New Title");

    let collection = state.snapshot().await;
    assert_eq!(collection.len(), 3);
    assert_eq!(collection.as_slice()[1].title, "New Title");
    assert_eq!(collection.as_slice()[0].title, "Dalek");
}

#[tokio::test]
async fn test_update_unknown_article_is_not_found() {
    let (state, app) = setup();
    let request = with_json("PUT", "/api/articles/42", json!({"title": "Ghost", "contents": ""}));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(state.snapshot().await.len(), 3);
}

// =============================================================================
// Selection and navigation
// =============================================================================

#[tokio::test]
async fn test_choose_section_then_article() {
    let (_, app) = setup();

    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/selection/section", json!({"label": "D"})))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["selection"]["state"], "SectionChosen");
    assert_eq!(body["titles"].as_array().unwrap().len(), 2);
    assert_eq!(body["buttons"]["edit"], false);

    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/selection/article", json!({"id": 3})))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["selection"]["state"], "ArticleChosen");
    assert_eq!(body["selection"]["section"], "O");
    assert_eq!(body["article"]["title"], "Ood");
    assert_eq!(body["route"], "/articles/3");
    assert_eq!(body["buttons"]["edit"], true);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/selection")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["selection"]["state"], "NoSelection");
    assert!(body["article"].is_null());
}

#[tokio::test]
async fn test_direct_link_opens_article() {
    let (_, app) = setup();
    let response = app
        .clone()
        .oneshot(get("/api/route?path=/articles/2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["selection"]["section"], "D");
    assert_eq!(body["article"]["id"], 2);

    let response = app.oneshot(get("/api/route?path=/nowhere")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_navigate_edit_then_cancel() {
    let (state, app) = setup();

    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/navigate", json!({"event": "select", "id": 1})))
        .await
        .unwrap();
    assert_eq!(extract_json(response.into_body()).await["route"], "/articles/1");

    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/navigate", json!({"event": "edit", "id": 1})))
        .await
        .unwrap();
    assert_eq!(extract_json(response.into_body()).await["route"], "/articles/1/edit");

    let response = app
        .oneshot(with_json("POST", "/api/navigate", json!({"event": "cancel"})))
        .await
        .unwrap();
    assert_eq!(extract_json(response.into_body()).await["route"], "/articles/1");

    assert_eq!(state.snapshot().await.len(), 3);
}

#[tokio::test]
async fn test_buttons_follow_selection() {
    let (_, app) = setup();
    let response = app.clone().oneshot(get("/api/buttons")).await.unwrap();
    assert_eq!(extract_json(response.into_body()).await, json!({"add": true, "edit": false}));

    app.clone()
        .oneshot(with_json("POST", "/api/selection/article", json!({"id": 1})))
        .await
        .unwrap();

    let response = app.oneshot(get("/api/buttons")).await.unwrap();
    assert_eq!(extract_json(response.into_body()).await, json!({"add": true, "edit": true}));
}

#[tokio::test]
async fn test_saves_are_broadcast() {
    let (state, app) = setup();
    let mut rx = state.events.subscribe();

    app.oneshot(with_json("POST", "/api/articles", json!({"title": "Axos", "contents": ""})))
        .await
        .unwrap();

    let first = rx.recv().await.unwrap();
    assert_eq!(first.event_type(), "ArticleSaved");
    let second = rx.recv().await.unwrap();
    assert_eq!(second.event_type(), "CollectionChanged");
}

#[tokio::test]
async fn test_cancel_on_article_page_keeps_selection() {
    let (_, app) = setup();
    for id in [1, 2] {
        app.clone()
            .oneshot(with_json("POST", "/api/navigate", json!({"event": "select", "id": id})))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/navigate", json!({"event": "cancel"})))
        .await
        .unwrap();
    assert_eq!(extract_json(response.into_body()).await["route"], "/articles/2");

    let response = app.oneshot(get("/api/selection")).await.unwrap();
    assert_eq!(extract_json(response.into_body()).await["article"]["id"], 2);
}

#[tokio::test]
async fn test_navigate_edit_refused_with_nothing_selected() {
    let (_, app) = setup();
    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/navigate", json!({"event": "edit", "id": 3})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert!(extract_json(response.into_body()).await["error"].is_string());

    let response = app.oneshot(get("/api/editor")).await.unwrap();
    assert!(extract_json(response.into_body()).await.is_null());
}

#[tokio::test]
async fn test_press_edit_opens_preloaded_editor() {
    let (_, app) = setup();
    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/buttons", json!({"button": "edit"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    app.clone()
        .oneshot(with_json("POST", "/api/selection/article", json!({"id": 3})))
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/buttons", json!({"button": "edit"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_json(response.into_body()).await["route"], "/articles/3/edit");

    let response = app.oneshot(get("/api/editor")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["editing"], 3);
    assert_eq!(body["title"], "Ood");
    assert_eq!(body["contents"], "Sing");
    assert_eq!(body["can_save"], true);
}

#[tokio::test]
async fn test_press_add_opens_blank_editor() {
    let (_, app) = setup();
    let response = app
        .clone()
        .oneshot(with_json("POST", "/api/buttons", json!({"button": "add"})))
        .await
        .unwrap();
    assert_eq!(extract_json(response.into_body()).await["route"], "/edit");

    let response = app.oneshot(get("/api/editor")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert!(body["editing"].is_null());
    assert_eq!(body["title"], "");
    assert_eq!(body["can_save"], false);
}

#[tokio::test]
async fn test_non_numeric_article_id_is_json_error() {
    let (_, app) = setup();
    let response = app.clone().oneshot(get("/api/articles/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(extract_json(response.into_body()).await["error"].is_string());

    let request = with_json("PUT", "/api/articles/abc", json!({"title": "X", "contents": ""}));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(extract_json(response.into_body()).await["error"].is_string());
}
