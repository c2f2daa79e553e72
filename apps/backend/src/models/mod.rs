//! Deck entities and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// Re-export shared types from review-core
pub use review_core::types::{ActivityKind, Card, CardContent, WrongQueueState};
pub use review_core::{RoundPlan, SessionState};

// === Store Entity Types ===

/// A deck of cards held by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub id: Uuid,
    pub name: String,
    pub cards: Vec<Card>,
    pub created_at: DateTime<Utc>,
}

impl Deck {
    /// Summarize for deck listings.
    pub fn summarize(&self, now: DateTime<Utc>) -> DeckSummary {
        let due_count = self
            .cards
            .iter()
            .filter(|c| !c.wrong_queue.flagged && now >= c.next_review_date)
            .count();
        let wrong_queue_count = self.cards.iter().filter(|c| c.wrong_queue.flagged).count();
        DeckSummary {
            id: self.id,
            name: self.name.clone(),
            card_count: self.cards.len(),
            due_count,
            wrong_queue_count,
        }
    }
}

// === Request Types ===

/// POST /api/decks
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDeckRequest {
    pub name: String,
    pub cards: Vec<NewCard>,
}

/// Card content as imported; the store assigns ids and learning state.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCard {
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub media: HashMap<String, String>,
}

impl NewCard {
    pub fn into_content(self) -> CardContent {
        CardContent {
            front: self.front,
            back: self.back,
            phonetic: self.phonetic,
            media: self.media,
        }
    }
}

/// POST /api/sessions
#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionRequest {
    pub deck_id: Uuid,
}

/// POST /api/sessions/{id}/answer
///
/// `display_payload` is whatever the activity wants shown on the
/// end-of-round screen; the scheduler never inspects it.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub correct: bool,
    #[serde(default)]
    pub display_payload: Option<serde_json::Value>,
}

// === Response Types ===

/// Deck listing entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckSummary {
    pub id: Uuid,
    pub name: String,
    pub card_count: usize,
    pub due_count: usize,
    pub wrong_queue_count: usize,
}

/// Card content shown to an activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardView {
    pub id: i64,
    pub front: String,
    pub back: String,
    pub phonetic: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub media: HashMap<String, String>,
}

impl CardView {
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.id,
            front: card.content.front.clone(),
            back: card.content.back.clone(),
            phonetic: card.content.phonetic.clone(),
            media: card.content.media.clone(),
        }
    }
}

/// The round a session is currently showing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundView {
    pub round_number: u32,
    pub activity: ActivityKind,
    pub is_optional: bool,
    pub card: CardView,
}

/// Session state returned by every session endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub deck_id: Uuid,
    pub state: SessionState,
    pub current_round: u32,
    pub total_rounds: usize,
    pub lives: u32,
    pub complete: bool,
    /// None once every round has an outcome.
    pub round: Option<RoundView>,
}

/// POST /api/sessions/{id}/finish
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishSessionResponse {
    pub updated_cards: Vec<Card>,
}
