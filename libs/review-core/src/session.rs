//! The session orchestrator: drives rounds and applies SRS updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};
use crate::ledger::SessionLedger;
use crate::rounds::{build_round_table, RoundPlan, RoundTable};
use crate::select::select;
use crate::srs::{update_optional, update_regular, verdict};
use crate::types::{Card, DueSelection};

/// Lives a session starts with. Skipping a round costs one.
pub const STARTING_LIVES: u32 = 3;

/// Where a session is in its lifecycle. A session only exists once due
/// selection succeeded, so "not started" has no representation here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    InProgress,
    Evaluated,
}

/// One review session over a deck.
///
/// Owns the due selection, the round table, the outcome ledger, and the
/// round cursor. Advances only on an explicit answer or skip; there is
/// no timer. Terminal after [`Session::evaluate`].
#[derive(Debug, Clone)]
pub struct Session {
    selection: DueSelection,
    round_table: RoundTable,
    ledger: SessionLedger,
    current_round: u32,
    lives: u32,
    state: SessionState,
}

impl Session {
    /// Start a session over a deck's cards.
    ///
    /// Runs due selection and builds the round table. Fails with
    /// [`SessionError::InsufficientDueCards`] when the deck cannot
    /// sustain a session.
    pub fn start(cards: &[Card], now: DateTime<Utc>) -> Result<Self> {
        let selection = select(cards, now)?;
        let round_table = build_round_table(&selection.regular_due, &selection.wrong_queue);
        Ok(Self {
            selection,
            round_table,
            ledger: SessionLedger::new(),
            current_round: 1,
            lives: STARTING_LIVES,
            state: SessionState::InProgress,
        })
    }

    /// The plan for the round currently open.
    ///
    /// Fails with [`SessionError::MissingRoundMapping`] once all rounds
    /// are complete or the session is evaluated.
    pub fn current(&self) -> Result<&RoundPlan> {
        if self.state == SessionState::Evaluated {
            return Err(SessionError::AlreadyEvaluated);
        }
        self.round_table
            .get(self.current_round)
            .ok_or(SessionError::MissingRoundMapping {
                round: self.current_round,
            })
    }

    /// Record the current round's outcome and advance.
    ///
    /// The activity showing the round reports exactly one boolean; a
    /// round can never receive a second outcome because the cursor moves
    /// past it.
    pub fn answer(&mut self, correct: bool) -> Result<()> {
        // Ensure the cursor points at a real round before recording.
        self.current()?;
        self.ledger.record(self.current_round, correct)?;
        self.current_round += 1;
        Ok(())
    }

    /// Skip the current round. Scored as a wrong answer and costs a
    /// life, then advances.
    pub fn skip(&mut self) -> Result<()> {
        self.answer(false)?;
        self.lives = self.lives.saturating_sub(1);
        Ok(())
    }

    /// True once every round has an outcome.
    pub fn is_complete(&self) -> bool {
        self.current_round as usize > self.round_table.len()
    }

    /// Evaluate the session: aggregate each selected card's outcomes,
    /// apply the matching SRS update, and return the patched cards for
    /// write-back.
    ///
    /// Normally called once all rounds are complete, but callable on a
    /// cut-short session too: cards with missing outcomes fail their
    /// verdict, so a partial session never advances a card's schedule.
    /// The session is terminal afterwards; a second call fails with
    /// [`SessionError::AlreadyEvaluated`].
    pub fn evaluate(&mut self, now: DateTime<Utc>) -> Result<Vec<Card>> {
        if self.state == SessionState::Evaluated {
            return Err(SessionError::AlreadyEvaluated);
        }
        self.state = SessionState::Evaluated;

        let mut patched = Vec::with_capacity(
            self.selection.regular_due.len() + self.selection.wrong_queue.len(),
        );
        for card in &self.selection.regular_due {
            let outcomes = self.ledger.outcomes_for(&self.round_table, card.id);
            patched.push(update_regular(card, verdict(&outcomes), now));
        }
        for card in &self.selection.wrong_queue {
            let outcomes = self.ledger.outcomes_for(&self.round_table, card.id);
            patched.push(update_optional(card, verdict(&outcomes)));
        }
        Ok(patched)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 1-based number of the open round. One past the end once all
    /// rounds are answered.
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn total_rounds(&self) -> usize {
        self.round_table.len()
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn selection(&self) -> &DueSelection {
        &self.selection
    }
}
