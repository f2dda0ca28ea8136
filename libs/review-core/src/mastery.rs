//! Practice-list items: review-mode selection and mastery bookkeeping.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::note::Note;
use crate::types::{FlashcardData, Rating, ReviewMode};

/// Highest mastery level an item can reach.
pub const MAX_MASTERY: u8 = 5;

/// A note placed in a practice list, as returned by the review queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeListItem {
    pub id: i64,
    pub note_id: i64,
    pub note: Note,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub last_reviewed: Option<NaiveDateTime>,
    pub mastery_level: u8,
}

/// Lower mastery gets more help.
pub fn review_mode_for(mastery_level: u8) -> ReviewMode {
    match mastery_level {
        0..=1 => ReviewMode::FirstLetterHint,
        2..=3 => ReviewMode::LengthHint,
        _ => ReviewMode::TranslationRecall,
    }
}

/// Mastery level after a review with `rating`.
pub fn next_mastery(level: u8, rating: Rating) -> u8 {
    match rating {
        Rating::Easy => level.saturating_add(2).min(MAX_MASTERY),
        Rating::Good => level.saturating_add(1).min(MAX_MASTERY),
        Rating::Again => level.saturating_sub(1),
    }
}

impl PracticeListItem {
    pub fn review_mode(&self) -> ReviewMode {
        review_mode_for(self.mastery_level)
    }

    /// Card presented for this item.
    pub fn to_flashcard(&self) -> FlashcardData {
        FlashcardData {
            id: self.id,
            question: self.note.question_text(),
            answer: self.note.answer_text().to_string(),
            mode: self.review_mode(),
        }
    }

    /// Apply a review result; returns the new mastery level.
    pub fn record_review(&mut self, rating: Rating, now: DateTime<Utc>) -> u8 {
        self.review_count += 1;
        self.last_reviewed = Some(now.naive_utc());
        self.mastery_level = next_mastery(self.mastery_level.min(MAX_MASTERY), rating);
        self.mastery_level
    }
}

/// Order items for review: weakest first, then least recently reviewed,
/// never-reviewed items ahead of everything else at the same level.
pub fn order_review_queue(mut items: Vec<PracticeListItem>, limit: usize) -> Vec<PracticeListItem> {
    items.sort_by(|a, b| {
        a.mastery_level
            .cmp(&b.mastery_level)
            .then_with(|| a.last_reviewed.cmp(&b.last_reviewed))
    });
    items.truncate(limit);
    items
}
