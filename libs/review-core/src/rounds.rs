//! Round sequencing: mapping selected cards to an ordered round table.

use serde::{Deserialize, Serialize};

use crate::select::{MAX_REGULAR_DUE, MAX_WRONG_QUEUE};
use crate::types::ActivityKind::*;
use crate::types::{ActivityKind, Card};

/// Each regular-due card gets this many rounds.
pub const ROUNDS_PER_REGULAR_CARD: usize = 3;

/// Activity triple per regular-due card, keyed by the card's position in
/// the selection. A fixed table rather than a random draw: learners see
/// different mini-games across sessions because their due cards shift
/// position, and sequences stay reproducible.
const REGULAR_TRIPLES: [[ActivityKind; ROUNDS_PER_REGULAR_CARD]; MAX_REGULAR_DUE] = [
    [MultipleChoice, Listening, Matching],
    [TypeAnswer, FillInBlank, WordScramble],
    [PictureChoice, TrueFalse, FlashcardFlip],
    [MultipleChoice, FillInBlank, FlashcardFlip],
    [Matching, FillInBlank, PictureChoice],
];

/// Wrong-queue rounds use fixed activities by queue position.
const WRONG_QUEUE_ACTIVITIES: [ActivityKind; MAX_WRONG_QUEUE] = [MultipleChoice, Listening];

/// One planned round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPlan {
    pub card_id: i64,
    pub activity: ActivityKind,
    /// True iff the round comes from a wrong-queue card.
    pub is_optional: bool,
}

/// The ordered round plan for one session. Built once at session start
/// and immutable afterwards; rounds are numbered 1..=len.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTable {
    rounds: Vec<RoundPlan>,
}

impl RoundTable {
    /// Look up a round by its 1-based number.
    pub fn get(&self, round: u32) -> Option<&RoundPlan> {
        if round == 0 {
            return None;
        }
        self.rounds.get(round as usize - 1)
    }

    /// Total number of rounds.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Iterate rounds in order as `(round_number, plan)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &RoundPlan)> {
        self.rounds
            .iter()
            .enumerate()
            .map(|(i, plan)| (i as u32 + 1, plan))
    }
}

/// Build the round table for a session.
///
/// Regular-due cards come first, card-major: three consecutive rounds
/// per card, activities drawn from the position-keyed lookup table.
/// Wrong-queue cards follow with one round each. Positions past the
/// session caps are ignored; the selector never produces them.
pub fn build_round_table(regular_due: &[Card], wrong_queue: &[Card]) -> RoundTable {
    let mut rounds =
        Vec::with_capacity(regular_due.len() * ROUNDS_PER_REGULAR_CARD + wrong_queue.len());

    for (position, card) in regular_due.iter().take(MAX_REGULAR_DUE).enumerate() {
        for activity in REGULAR_TRIPLES[position] {
            rounds.push(RoundPlan {
                card_id: card.id,
                activity,
                is_optional: false,
            });
        }
    }

    for (position, card) in wrong_queue.iter().take(MAX_WRONG_QUEUE).enumerate() {
        rounds.push(RoundPlan {
            card_id: card.id,
            activity: WRONG_QUEUE_ACTIVITIES[position],
            is_optional: true,
        });
    }

    RoundTable { rounds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardContent;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn cards(ids: &[i64]) -> Vec<Card> {
        let now = Utc::now();
        ids.iter()
            .map(|&id| Card::new(id, CardContent::new("q", "a"), now))
            .collect()
    }

    #[test]
    fn three_regular_cards_get_nine_rounds_with_table_activities() {
        let regular = cards(&[10, 20, 30]);
        let table = build_round_table(&regular, &[]);

        assert_eq!(table.len(), 9);
        let plans: Vec<(u32, i64, usize)> = table
            .iter()
            .map(|(n, p)| (n, p.card_id, p.activity.to_index()))
            .collect();
        assert_eq!(
            plans,
            vec![
                (1, 10, 0),
                (2, 10, 1),
                (3, 10, 2),
                (4, 20, 3),
                (5, 20, 4),
                (6, 20, 5),
                (7, 30, 6),
                (8, 30, 7),
                (9, 30, 8),
            ]
        );
        assert!(table.iter().all(|(_, p)| !p.is_optional));
    }

    #[test]
    fn round_count_is_three_per_regular_plus_one_per_wrong() {
        for r in 3..=5usize {
            for w in 0..=2usize {
                let regular = cards(&(0..r as i64).collect::<Vec<_>>());
                let wrong = cards(&(100..100 + w as i64).collect::<Vec<_>>());
                let table = build_round_table(&regular, &wrong);
                assert_eq!(table.len(), 3 * r + w);
                // Contiguous numbering from 1.
                let numbers: Vec<u32> = table.iter().map(|(n, _)| n).collect();
                assert_eq!(numbers, (1..=(3 * r + w) as u32).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn wrong_queue_rounds_come_last_and_are_optional() {
        let regular = cards(&[1, 2, 3]);
        let wrong = cards(&[50, 60]);
        let table = build_round_table(&regular, &wrong);

        let round_10 = table.get(10).unwrap();
        assert_eq!(round_10.card_id, 50);
        assert_eq!(round_10.activity, ActivityKind::MultipleChoice);
        assert!(round_10.is_optional);

        let round_11 = table.get(11).unwrap();
        assert_eq!(round_11.card_id, 60);
        assert_eq!(round_11.activity, ActivityKind::Listening);
        assert!(round_11.is_optional);
    }

    #[test]
    fn lookup_outside_the_table_is_none() {
        let table = build_round_table(&cards(&[1, 2, 3]), &[]);
        assert!(!table.is_empty());
        assert!(table.get(0).is_none());
        assert!(table.get(10).is_none());
    }

    #[test]
    fn empty_inputs_build_an_empty_table() {
        let table = build_round_table(&[], &[]);
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.get(1).is_none());
    }
}
