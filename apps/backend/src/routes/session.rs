//! Session endpoints

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/session
pub async fn show(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.game.snapshot())
}

/// POST /api/session/start
/// Starts a round; a no-op while one is running
pub async fn start(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.game.start())
}

/// POST /api/session/guess
pub async fn guess(
    State(state): State<AppState>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<GuessResponse>> {
    if request.text.chars().count() > MAX_GUESS_CHARS {
        return Err(ApiError::BadRequest(format!(
            "guess longer than {} characters",
            MAX_GUESS_CHARS
        )));
    }

    let (outcome, snapshot) = state.game.submit_guess(&request.text);
    Ok(Json(GuessResponse { outcome, snapshot }))
}

/// POST /api/session/reset
pub async fn reset(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.game.reset())
}
