//! Review-session scheduler for the wordpet flashcard app.
//!
//! Provides:
//! - Due-set selection (regular-due vs. wrong-queue, with session caps)
//! - Deterministic round sequencing over the mini-game activity kinds
//! - A per-round outcome ledger
//! - Spaced-repetition state updates applied at session end
//! - The session orchestrator tying the above together
//!
//! Everything here is pure and synchronous; reading and writing card
//! rows is the embedding application's job.

pub mod error;
pub mod ledger;
pub mod rounds;
pub mod select;
pub mod session;
pub mod srs;
pub mod types;

pub use error::{Result, SessionError};
pub use ledger::SessionLedger;
pub use rounds::{build_round_table, RoundPlan, RoundTable};
pub use select::{select, MAX_REGULAR_DUE, MAX_WRONG_QUEUE, MIN_REGULAR_DUE};
pub use session::{Session, SessionState, STARTING_LIVES};
pub use srs::{update_optional, update_regular, verdict, MIN_EASE_FACTOR};
pub use types::{ActivityKind, Card, CardContent, DueSelection, WrongQueueState, DEFAULT_EASE_FACTOR};
