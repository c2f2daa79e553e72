//! Core types for the review scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default ease factor for a freshly imported card.
pub const DEFAULT_EASE_FACTOR: f64 = 1.5;

/// Display-only card content. The scheduler passes this through to
/// activities untouched and never branches on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardContent {
    pub front: String,
    pub back: String,
    pub phonetic: String,
    /// Image/audio URLs and anything else the import pipeline attaches.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub media: HashMap<String, String>,
}

impl CardContent {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            phonetic: String::new(),
            media: HashMap::new(),
        }
    }
}

/// Wrong-queue state of a card.
///
/// A card enters the queue with a zeroed counter after a failed regular
/// review. While flagged, correct answers advance the counter; the third
/// one clears the flag and resets the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WrongQueueState {
    pub flagged: bool,
    pub promotion_counter: u8,
}

impl WrongQueueState {
    /// State for a card that just failed a regular review.
    pub fn entered() -> Self {
        Self {
            flagged: true,
            promotion_counter: 0,
        }
    }
}

/// A flashcard with its persisted learning state.
///
/// `content` is opaque payload; the five scheduling fields below it are
/// the only ones the scheduler reads or writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub content: CardContent,
    pub last_review_date: DateTime<Utc>,
    pub next_review_date: DateTime<Utc>,
    pub ease_factor: f64,
    pub consecutive_correct: u32,
    pub wrong_queue: WrongQueueState,
}

impl Card {
    /// Create a card due immediately, as deck import does.
    pub fn new(id: i64, content: CardContent, now: DateTime<Utc>) -> Self {
        Self {
            id,
            content,
            last_review_date: now,
            next_review_date: now,
            ease_factor: DEFAULT_EASE_FACTOR,
            consecutive_correct: 0,
            wrong_queue: WrongQueueState::default(),
        }
    }
}

/// Mini-game kinds an activity round can use.
///
/// The discriminant order is load-bearing: the round sequencer's lookup
/// tables address these by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    MultipleChoice,
    Listening,
    Matching,
    TypeAnswer,
    FillInBlank,
    WordScramble,
    PictureChoice,
    TrueFalse,
    FlashcardFlip,
}

impl ActivityKind {
    /// Stable index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Self::MultipleChoice => 0,
            Self::Listening => 1,
            Self::Matching => 2,
            Self::TypeAnswer => 3,
            Self::FillInBlank => 4,
            Self::WordScramble => 5,
            Self::PictureChoice => 6,
            Self::TrueFalse => 7,
            Self::FlashcardFlip => 8,
        }
    }

    /// Create from stable index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::MultipleChoice),
            1 => Some(Self::Listening),
            2 => Some(Self::Matching),
            3 => Some(Self::TypeAnswer),
            4 => Some(Self::FillInBlank),
            5 => Some(Self::WordScramble),
            6 => Some(Self::PictureChoice),
            7 => Some(Self::TrueFalse),
            8 => Some(Self::FlashcardFlip),
            _ => None,
        }
    }
}

/// The two card subsets a session draws from, computed once at start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueSelection {
    /// Cards due for a regular review, soonest due first. 3 to 5 entries.
    pub regular_due: Vec<Card>,
    /// Wrong-queue cards, stalest first. 0 to 2 entries.
    pub wrong_queue: Vec<Card>,
}

impl DueSelection {
    /// All selected cards in evaluation order: regular first, then wrong-queue.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.regular_due.iter().chain(self.wrong_queue.iter())
    }
}
