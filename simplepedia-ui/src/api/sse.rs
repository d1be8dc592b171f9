//! Server-Sent Events for collection and selection changes

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, Sse},
};
use futures::stream::Stream;

use crate::AppState;

/// GET /api/events - SSE event stream
///
/// Streams `ConnectionStatus` on connect, then every `PediaEvent`.
pub async fn event_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    simplepedia_common::sse::event_bus_sse_stream(&state.events, "simplepedia-ui")
}
