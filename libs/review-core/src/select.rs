//! Due-set selection: which cards a session reviews.

use chrono::{DateTime, Utc};

use crate::error::{Result, SessionError};
use crate::types::{Card, DueSelection};

/// A session needs at least this many regular-due cards.
pub const MIN_REGULAR_DUE: usize = 3;
/// At most this many regular-due cards per session.
pub const MAX_REGULAR_DUE: usize = 5;
/// At most this many wrong-queue cards per session.
pub const MAX_WRONG_QUEUE: usize = 2;

/// Partition a deck into the cards this session will review.
///
/// Regular-due cards are those not in the wrong queue whose
/// `next_review_date` has passed, soonest due first. Wrong-queue cards
/// are always eligible once flagged, stalest (`last_review_date`) first.
/// Both lists are truncated to their session caps.
///
/// Fails with [`SessionError::InsufficientDueCards`] when fewer than
/// [`MIN_REGULAR_DUE`] regular cards are due; the count reported is the
/// pre-truncation total.
pub fn select(cards: &[Card], now: DateTime<Utc>) -> Result<DueSelection> {
    let mut regular_due: Vec<Card> = cards
        .iter()
        .filter(|c| !c.wrong_queue.flagged && now >= c.next_review_date)
        .cloned()
        .collect();

    if regular_due.len() < MIN_REGULAR_DUE {
        return Err(SessionError::InsufficientDueCards {
            available: regular_due.len(),
        });
    }

    // Soonest due first.
    regular_due.sort_by_key(|c| c.next_review_date);
    regular_due.truncate(MAX_REGULAR_DUE);

    let mut wrong_queue: Vec<Card> = cards
        .iter()
        .filter(|c| c.wrong_queue.flagged)
        .cloned()
        .collect();

    // Stalest first.
    wrong_queue.sort_by_key(|c| c.last_review_date);
    wrong_queue.truncate(MAX_WRONG_QUEUE);

    Ok(DueSelection {
        regular_due,
        wrong_queue,
    })
}
