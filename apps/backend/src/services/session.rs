//! Session registry: active review sessions keyed by id.
//!
//! One session per deck at a time. A session enters the registry when
//! due selection succeeds and leaves it when its write-back succeeds or
//! the client abandons it; an abandoned session writes nothing.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{CardView, FinishSessionResponse, RoundView, SessionSnapshot};
use crate::store::DeckStore;
use review_core::{Card, Session, SessionState};

/// A running session plus what the routes need to describe it.
struct ActiveSession {
    deck_id: Uuid,
    session: Session,
    /// Selected cards by id, for building round views.
    cards: HashMap<i64, Card>,
    /// Evaluation result awaiting a successful write-back. Kept so a
    /// failed write-back can be retried without re-evaluating.
    pending_patches: Option<Vec<Card>>,
}

/// Registry of active sessions
#[derive(Clone, Default)]
pub struct SessionService {
    sessions: Arc<RwLock<HashMap<Uuid, ActiveSession>>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session over a deck: one read of the card store, then
    /// due selection and round-table construction.
    pub async fn start(&self, store: &DeckStore, deck_id: Uuid) -> Result<SessionSnapshot> {
        let cards = store.get_cards(deck_id).await?;

        let mut sessions = self.sessions.write().await;
        if sessions.values().any(|s| s.deck_id == deck_id) {
            return Err(ApiError::Conflict(format!(
                "Deck {deck_id} already has an active session"
            )));
        }

        let session = Session::start(&cards, Utc::now())?;
        let cards_by_id = session
            .selection()
            .iter()
            .map(|c| (c.id, c.clone()))
            .collect();

        let id = Uuid::new_v4();
        let active = ActiveSession {
            deck_id,
            session,
            cards: cards_by_id,
            pending_patches: None,
        };
        let snapshot = snapshot_of(id, &active);
        sessions.insert(id, active);

        tracing::info!(session_id = %id, deck_id = %deck_id, rounds = snapshot.total_rounds, "session started");
        Ok(snapshot)
    }

    /// Current state of a session.
    pub async fn snapshot(&self, session_id: Uuid) -> Result<SessionSnapshot> {
        let sessions = self.sessions.read().await;
        let active = get(&sessions, session_id)?;
        Ok(snapshot_of(session_id, active))
    }

    /// Record the open round's outcome and advance.
    pub async fn answer(&self, session_id: Uuid, correct: bool) -> Result<SessionSnapshot> {
        let mut sessions = self.sessions.write().await;
        let active = get_mut(&mut sessions, session_id)?;
        if active.session.is_complete() {
            return Err(ApiError::Conflict(
                "Session has no open round; finish it".to_string(),
            ));
        }
        active.session.answer(correct)?;
        Ok(snapshot_of(session_id, active))
    }

    /// Skip the open round: scored wrong, costs a life.
    pub async fn skip(&self, session_id: Uuid) -> Result<SessionSnapshot> {
        let mut sessions = self.sessions.write().await;
        let active = get_mut(&mut sessions, session_id)?;
        if active.session.is_complete() {
            return Err(ApiError::Conflict(
                "Session has no open round; finish it".to_string(),
            ));
        }
        active.session.skip()?;
        Ok(snapshot_of(session_id, active))
    }

    /// Evaluate the session and write the patched cards back.
    ///
    /// Evaluation happens once; if the write-back fails the patches are
    /// kept and a later call retries the write with the same result set.
    /// The session leaves the registry only after a successful write.
    pub async fn finish(
        &self,
        store: &DeckStore,
        session_id: Uuid,
    ) -> Result<FinishSessionResponse> {
        let mut sessions = self.sessions.write().await;
        let active = get_mut(&mut sessions, session_id)?;

        let patches = match active.pending_patches.clone() {
            Some(patches) => patches,
            None => {
                let patches = active.session.evaluate(Utc::now())?;
                active.pending_patches = Some(patches.clone());
                patches
            }
        };

        store.update_cards(active.deck_id, &patches).await?;
        let deck_id = active.deck_id;
        sessions.remove(&session_id);

        tracing::info!(session_id = %session_id, deck_id = %deck_id, cards = patches.len(), "session evaluated and written back");
        Ok(FinishSessionResponse {
            updated_cards: patches,
        })
    }

    /// Abandon a session. Nothing is written; the deck frees up.
    pub async fn abandon(&self, session_id: Uuid) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions
            .remove(&session_id)
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(format!("Session {session_id} not found")))
    }
}

fn get(sessions: &HashMap<Uuid, ActiveSession>, id: Uuid) -> Result<&ActiveSession> {
    sessions
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Session {id} not found")))
}

fn get_mut(sessions: &mut HashMap<Uuid, ActiveSession>, id: Uuid) -> Result<&mut ActiveSession> {
    sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("Session {id} not found")))
}

fn snapshot_of(id: Uuid, active: &ActiveSession) -> SessionSnapshot {
    let session = &active.session;
    let round = match session.state() {
        // The cards map covers the whole selection, so every plan's
        // card id resolves.
        SessionState::InProgress => session.current().ok().and_then(|plan| {
            active.cards.get(&plan.card_id).map(|card| RoundView {
                round_number: session.current_round(),
                activity: plan.activity,
                is_optional: plan.is_optional,
                card: CardView::from_card(card),
            })
        }),
        SessionState::Evaluated => None,
    };

    SessionSnapshot {
        session_id: id,
        deck_id: active.deck_id,
        state: session.state(),
        current_round: session.current_round(),
        total_rounds: session.total_rounds(),
        lives: session.lives(),
        complete: session.is_complete(),
        round,
    }
}
