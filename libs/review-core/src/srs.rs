//! Spaced-repetition state updates applied at session end.

use chrono::{DateTime, Duration, Utc};

use crate::types::{Card, WrongQueueState};

/// Lower bound on the ease factor. There is no upper bound: repeated
/// success grows the ease without a cap.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Ease adjustment per review, up on success and down on failure.
const EASE_STEP: f64 = 0.1;

/// Aggregate a card's recorded round outcomes into a single verdict.
///
/// A card with no recorded outcomes fails the verdict. A session cut
/// short before reaching a card must not advance its schedule, so the
/// empty list counts as "not all correct" rather than being skipped.
pub fn verdict(outcomes: &[bool]) -> bool {
    !outcomes.is_empty() && outcomes.iter().all(|&o| o)
}

/// Update a regular-due card after its three rounds.
///
/// All rounds correct: the completed interval is stretched by the ease
/// factor (never below one day), the ease grows by [`EASE_STEP`], and
/// the streak advances. Any wrong or skipped round: the card drops into
/// the wrong queue due immediately, the ease shrinks by [`EASE_STEP`]
/// (floored at [`MIN_EASE_FACTOR`]), and the streak resets.
pub fn update_regular(card: &Card, all_correct: bool, now: DateTime<Utc>) -> Card {
    let mut updated = card.clone();

    if all_correct {
        let completed_days = interval_days(card.last_review_date, card.next_review_date);
        let new_interval_days = ((completed_days as f64) * card.ease_factor).round().max(1.0) as i64;
        updated.last_review_date = now;
        updated.next_review_date = now + Duration::days(new_interval_days);
        updated.ease_factor = card.ease_factor + EASE_STEP;
        updated.consecutive_correct = card.consecutive_correct + 1;
    } else {
        updated.wrong_queue = WrongQueueState::entered();
        updated.last_review_date = now;
        updated.next_review_date = now;
        updated.ease_factor = (card.ease_factor - EASE_STEP).max(MIN_EASE_FACTOR);
        updated.consecutive_correct = 0;
    }

    updated.ease_factor = normalize_ease(updated.ease_factor);
    updated
}

/// Update a wrong-queue card after its single round.
///
/// A wrong answer leaves the card untouched; it cannot regress further.
/// A correct answer advances the promotion counter, and the third in a
/// row clears the flag. Leaving the queue does not recompute
/// `next_review_date`: the card re-enters regular rotation with whatever
/// date it already had, possibly already due.
pub fn update_optional(card: &Card, all_correct: bool) -> Card {
    let mut updated = card.clone();

    if all_correct {
        if card.wrong_queue.promotion_counter >= 2 {
            updated.wrong_queue = WrongQueueState::default();
        } else {
            updated.wrong_queue.promotion_counter = card.wrong_queue.promotion_counter + 1;
        }
    }

    updated.ease_factor = normalize_ease(updated.ease_factor);
    updated
}

/// Whole days between two review dates, rounded up.
fn interval_days(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let seconds = (to - from).num_seconds();
    (seconds as f64 / 86_400.0).ceil() as i64
}

/// Keep the stored ease at two decimal places so repeated float
/// arithmetic does not leak noise into persisted rows.
fn normalize_ease(ease: f64) -> f64 {
    (ease * 100.0).round() / 100.0
}
