//! Deck endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Card, CreateDeckRequest, Deck, DeckSummary};
use crate::AppState;

/// POST /api/decks
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateDeckRequest>,
) -> Result<Json<Deck>> {
    let deck = state.store.create_deck(payload.name, payload.cards).await;
    tracing::info!(deck_id = %deck.id, cards = deck.cards.len(), "deck created");
    Ok(Json(deck))
}

/// GET /api/decks
pub async fn list(State(state): State<AppState>) -> Json<Vec<DeckSummary>> {
    let now = Utc::now();
    let decks = state.store.list_decks().await;
    Json(decks.iter().map(|d| d.summarize(now)).collect())
}

/// GET /api/decks/{id}/cards
pub async fn cards(
    State(state): State<AppState>,
    Path(deck_id): Path<Uuid>,
) -> Result<Json<Vec<Card>>> {
    let cards = state.store.get_cards(deck_id).await?;
    Ok(Json(cards))
}
