//! Flashcard review engine shared by WordNest front ends.
//!
//! Provides:
//! - Answer model (character map, hints, canonical answer)
//! - Input state machine for hint modes and translation-recall
//! - Render contract for masked answers
//! - Practice-list item to card derivation and mastery bookkeeping
//! - Review session driving one card at a time into a rating sink

pub mod answer;
pub mod engine;
pub mod error;
pub mod mastery;
pub mod matching;
pub mod note;
pub mod render;
pub mod session;
pub mod types;

pub use answer::{AnswerModel, CharKind, CharacterDetail};
pub use engine::{reduce, Effect, Engine, Event, Key};
pub use error::{EngineError, NoteError, Result, SessionError};
pub use mastery::{order_review_queue, review_mode_for, PracticeListItem};
pub use matching::{compare_answers, MatchResult};
pub use note::{Note, NoteAnalysis, NoteType};
pub use render::{render, AnswerView, Cell, Tone};
pub use session::{RatingSink, ReviewOutcome, ReviewSession, SessionUpdate};
pub use types::{
    FlashcardData, Rating, ReviewMode, ReviewSettings, ReviewStatus, SettingsOverrides,
    ERROR_THRESHOLD,
};
