//! Per-round outcome ledger for one session.

use std::collections::BTreeMap;

use crate::error::{Result, SessionError};
use crate::rounds::RoundTable;

/// Accumulates one boolean outcome per round. Lives exactly as long as
/// its session and is discarded after evaluation.
#[derive(Debug, Clone, Default)]
pub struct SessionLedger {
    outcomes: BTreeMap<u32, bool>,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a round. Each round gets exactly one
    /// outcome; a second report is rejected.
    pub fn record(&mut self, round: u32, outcome: bool) -> Result<()> {
        if self.outcomes.contains_key(&round) {
            return Err(SessionError::DuplicateOutcome { round });
        }
        self.outcomes.insert(round, outcome);
        Ok(())
    }

    /// The recorded outcome of a round, if any.
    pub fn outcome(&self, round: u32) -> Option<bool> {
        self.outcomes.get(&round).copied()
    }

    /// All recorded outcomes for a card's rounds, in round order.
    ///
    /// Rounds with no recorded outcome are omitted, so a card the
    /// session never reached yields an empty list. Callers treat that as
    /// "not yet evaluated", not as success.
    pub fn outcomes_for(&self, table: &RoundTable, card_id: i64) -> Vec<bool> {
        table
            .iter()
            .filter(|(_, plan)| plan.card_id == card_id)
            .filter_map(|(round, _)| self.outcome(round))
            .collect()
    }
}
