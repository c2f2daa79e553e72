//! In-memory card store.
//!
//! The scheduler's only persistence boundary: one read at session start,
//! one batch write at session end. Decks live in a `RwLock`-guarded map,
//! which also gives write-back the deck-level exclusivity the session
//! layer relies on.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{Deck, NewCard};
use review_core::Card;

/// Deck table behind a read-write lock
#[derive(Clone, Default)]
pub struct DeckStore {
    decks: Arc<RwLock<HashMap<Uuid, Deck>>>,
}

impl DeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from imported card content. Card ids are assigned
    /// sequentially within the deck; every card starts due immediately.
    pub async fn create_deck(&self, name: String, new_cards: Vec<NewCard>) -> Deck {
        let now = Utc::now();
        let cards = new_cards
            .into_iter()
            .enumerate()
            .map(|(i, c)| Card::new(i as i64 + 1, c.into_content(), now))
            .collect();
        let deck = Deck {
            id: Uuid::new_v4(),
            name,
            cards,
            created_at: now,
        };
        self.decks.write().await.insert(deck.id, deck.clone());
        deck
    }

    /// List all decks.
    pub async fn list_decks(&self) -> Vec<Deck> {
        let mut decks: Vec<Deck> = self.decks.read().await.values().cloned().collect();
        decks.sort_by_key(|d| d.created_at);
        decks
    }

    /// All cards of a deck. A missing deck is a surfaced error.
    pub async fn get_cards(&self, deck_id: Uuid) -> Result<Vec<Card>> {
        let decks = self.decks.read().await;
        let deck = decks
            .get(&deck_id)
            .ok_or_else(|| ApiError::NotFound(format!("Deck {deck_id} not found")))?;
        Ok(deck.cards.clone())
    }

    /// Write back full card snapshots after a session. Each patch
    /// replaces the stored card with the same id; a patch for an unknown
    /// card is an error and nothing is written.
    pub async fn update_cards(&self, deck_id: Uuid, patches: &[Card]) -> Result<()> {
        let mut decks = self.decks.write().await;
        let deck = decks
            .get_mut(&deck_id)
            .ok_or_else(|| ApiError::NotFound(format!("Deck {deck_id} not found")))?;

        for patch in patches {
            if !deck.cards.iter().any(|c| c.id == patch.id) {
                return Err(ApiError::NotFound(format!(
                    "Card {} not found in deck {deck_id}",
                    patch.id
                )));
            }
        }
        for patch in patches {
            if let Some(card) = deck.cards.iter_mut().find(|c| c.id == patch.id) {
                *card = patch.clone();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn new_card(front: &str) -> NewCard {
        NewCard {
            front: front.to_string(),
            back: "back".to_string(),
            phonetic: String::new(),
            media: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn create_deck_assigns_sequential_ids() {
        let store = DeckStore::new();
        let deck = store
            .create_deck("es".to_string(), vec![new_card("uno"), new_card("dos")])
            .await;
        let ids: Vec<i64> = deck.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn get_cards_for_missing_deck_is_not_found() {
        let store = DeckStore::new();
        let err = store.get_cards(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_cards_replaces_matching_snapshots() {
        let store = DeckStore::new();
        let deck = store
            .create_deck("es".to_string(), vec![new_card("uno"), new_card("dos")])
            .await;

        let mut patch = deck.cards[0].clone();
        patch.ease_factor = 1.6;
        store.update_cards(deck.id, &[patch]).await.unwrap();

        let cards = store.get_cards(deck.id).await.unwrap();
        assert_eq!(cards[0].ease_factor, 1.6);
        assert_eq!(cards[1].ease_factor, review_core::DEFAULT_EASE_FACTOR);
    }

    #[tokio::test]
    async fn update_with_unknown_card_writes_nothing() {
        let store = DeckStore::new();
        let deck = store
            .create_deck("es".to_string(), vec![new_card("uno")])
            .await;

        let mut known = deck.cards[0].clone();
        known.ease_factor = 1.6;
        let mut unknown = deck.cards[0].clone();
        unknown.id = 99;

        let err = store.update_cards(deck.id, &[known, unknown]).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));

        let cards = store.get_cards(deck.id).await.unwrap();
        assert_eq!(cards[0].ease_factor, review_core::DEFAULT_EASE_FACTOR);
    }
}
