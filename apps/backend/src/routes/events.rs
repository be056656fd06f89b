//! Server-sent event stream of session notifications

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tokio_stream::{Stream, StreamExt};

use crate::AppState;

/// GET /api/events
pub async fn stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let events = BroadcastStream::new(state.game.subscribe()).filter_map(|message| match message {
        Ok(event) => match Event::default().event(event.kind()).json_data(&event) {
            Ok(sse_event) => Some(Ok(sse_event)),
            Err(e) => {
                tracing::warn!("Failed to encode {} event: {}", event.kind(), e);
                None
            }
        },
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::warn!("Event subscriber lagged, skipped {} events", skipped);
            None
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
