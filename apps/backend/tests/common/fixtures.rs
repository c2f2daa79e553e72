//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Create a deck creation request body with `num_cards` cards.
pub fn create_deck_request(name: &str, num_cards: usize) -> serde_json::Value {
    let cards: Vec<serde_json::Value> = (1..=num_cards)
        .map(|i| {
            json!({
                "front": format!("palabra {i}"),
                "back": format!("word {i}"),
                "phonetic": format!("pa-la-bra {i}"),
            })
        })
        .collect();
    json!({ "name": name, "cards": cards })
}

/// Create a session start request body.
pub fn start_session_request(deck_id: Uuid) -> serde_json::Value {
    json!({ "deck_id": deck_id })
}

/// Create an answer request body.
pub fn answer_request(correct: bool) -> serde_json::Value {
    json!({ "correct": correct })
}

/// Create an answer request body with a display payload attached.
pub fn answer_request_with_payload(correct: bool) -> serde_json::Value {
    json!({
        "correct": correct,
        "display_payload": { "chosen": "word 1", "expected": "word 1" }
    })
}
