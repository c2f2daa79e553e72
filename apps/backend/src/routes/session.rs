//! Review session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{AnswerRequest, FinishSessionResponse, SessionSnapshot, StartSessionRequest};
use crate::AppState;

/// POST /api/sessions
pub async fn start(
    State(state): State<AppState>,
    Json(payload): Json<StartSessionRequest>,
) -> Result<Json<SessionSnapshot>> {
    let snapshot = state.sessions.start(&state.store, payload.deck_id).await?;
    Ok(Json(snapshot))
}

/// GET /api/sessions/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>> {
    let snapshot = state.sessions.snapshot(session_id).await?;
    Ok(Json(snapshot))
}

/// POST /api/sessions/{id}/answer
///
/// Called exactly once per round by whichever activity is showing. The
/// display payload is for the end-of-round screen only.
pub async fn answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<SessionSnapshot>> {
    if let Some(display_payload) = &payload.display_payload {
        tracing::debug!(session_id = %session_id, display = %display_payload, "round display payload");
    }
    let snapshot = state.sessions.answer(session_id, payload.correct).await?;
    Ok(Json(snapshot))
}

/// POST /api/sessions/{id}/skip
pub async fn skip(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>> {
    let snapshot = state.sessions.skip(session_id).await?;
    Ok(Json(snapshot))
}

/// POST /api/sessions/{id}/finish
pub async fn finish(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<FinishSessionResponse>> {
    let response = state.sessions.finish(&state.store, session_id).await?;
    Ok(Json(response))
}

/// DELETE /api/sessions/{id}
pub async fn abandon(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode> {
    state.sessions.abandon(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
