//! Common test utilities and fixtures for integration tests.
//!
//! The backend holds all state in memory, so tests spin up a fresh
//! [`AppState`] per test with no external services.

pub mod fixtures;

use axum_test::TestServer;
use uuid::Uuid;

use wordpet_backend::{app, AppState};

/// Fresh application state wrapped in a test server.
pub struct TestContext {
    pub server: TestServer,
}

impl TestContext {
    pub fn new() -> Self {
        let state = AppState::new();
        let server = TestServer::new(app(state)).expect("failed to build test server");
        Self { server }
    }

    /// Create a deck with `num_cards` cards, all due immediately, and
    /// return its id.
    pub async fn create_deck(&self, name: &str, num_cards: usize) -> Uuid {
        let response = self
            .server
            .post("/api/decks")
            .json(&fixtures::create_deck_request(name, num_cards))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        body["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("deck id in response")
    }

    /// Start a session over a deck and return its id.
    pub async fn start_session(&self, deck_id: Uuid) -> Uuid {
        let response = self
            .server
            .post("/api/sessions")
            .json(&fixtures::start_session_request(deck_id))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        body["session_id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("session id in response")
    }

    /// Answer every remaining round of a session with `correct`.
    pub async fn answer_all(&self, session_id: Uuid, correct: bool) {
        loop {
            let response = self
                .server
                .get(&format!("/api/sessions/{session_id}"))
                .await;
            response.assert_status_ok();
            let body: serde_json::Value = response.json();
            if body["complete"].as_bool().unwrap() {
                return;
            }
            self.server
                .post(&format!("/api/sessions/{session_id}/answer"))
                .json(&fixtures::answer_request(correct))
                .await
                .assert_status_ok();
        }
    }
}
