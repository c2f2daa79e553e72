//! Error types for review-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while running a review session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Fewer than the minimum number of regular-due cards; the session
    /// never starts.
    #[error("not enough due cards to start a session: {available} available, 3 required")]
    InsufficientDueCards { available: usize },

    /// A round number outside the built table was addressed. Unreachable
    /// through the public API; an invariant violation if it surfaces.
    #[error("no round mapping for round {round}")]
    MissingRoundMapping { round: u32 },

    /// A second outcome was reported for a round that already has one.
    #[error("round {round} already has a recorded outcome")]
    DuplicateOutcome { round: u32 },

    /// The session was already evaluated; it is terminal.
    #[error("session has already been evaluated")]
    AlreadyEvaluated,
}
