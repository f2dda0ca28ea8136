//! Input state machine for a single card.
//!
//! Every card mode is a reducer over explicit state: `transition` takes the
//! current state and an [`Event`] and returns the next state plus an optional
//! [`Effect`] for the caller to carry out. Nothing here touches timers or
//! input devices; adapters translate raw input into events and perform the
//! effects.

pub mod masked;
pub mod recall;

use serde::{Deserialize, Serialize};

use crate::answer::{is_typeable, AnswerModel};
use crate::error::EngineError;
use crate::types::{FlashcardData, Rating, ReviewMode, ReviewSettings, ReviewStatus};

pub use masked::{MaskedCard, MaskedState};
pub use recall::{RecallCard, RecallState};

/// A key press as seen by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    /// Anything else (arrows, function keys, ...). Always inert.
    Other,
}

/// Input accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Key(Key),
    /// Explicit "Show Answer" button.
    ShowAnswer,
    /// Explicit "Check" button (translation-recall).
    Check,
    /// Rating button pressed on a finished card.
    Rate(Rating),
    /// The incorrect-answer delay scheduled by [`Effect::ScheduleReset`] ran out.
    ResetElapsed,
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

/// Work the caller has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// The card is finished; hand the rating to the scheduler.
    Completed(Rating),
    /// Send [`Event::ResetElapsed`] after the delay.
    ScheduleReset { delay_ms: u64 },
}

/// Rating implied by a key press in a terminal status.
///
/// `Enter` and `1` mean the positive choice shown for the status: `easy`
/// after a correct answer, `again` after a reveal.
pub fn rating_for_key(status: ReviewStatus, key: Key) -> Option<Rating> {
    match (status, key) {
        (ReviewStatus::Correct, Key::Enter | Key::Char('1')) => Some(Rating::Easy),
        (ReviewStatus::Correct, Key::Char('2')) => Some(Rating::Good),
        (ReviewStatus::Revealed, Key::Enter | Key::Char('1')) => Some(Rating::Again),
        _ => None,
    }
}

/// Whether the key types into a masked answer.
pub fn is_typing_key(key: Key) -> bool {
    matches!(key, Key::Char(c) if is_typeable(c))
}

/// Engine for one card, picked by review mode.
#[derive(Debug, Clone)]
pub enum Engine {
    Masked(MaskedCard),
    Recall(RecallCard),
}

impl Engine {
    /// Build fresh state for a card.
    pub fn new(card: &FlashcardData, settings: &ReviewSettings) -> Result<Self, EngineError> {
        match card.mode {
            mode if mode.is_masked() => {
                Ok(Self::Masked(MaskedCard::new(&card.answer, mode, settings)))
            }
            ReviewMode::TranslationRecall => {
                Ok(Self::Recall(RecallCard::new(&card.answer, settings)))
            }
            mode => Err(EngineError::UnsupportedMode(mode)),
        }
    }

    /// Feed one event into the card, returning the resulting effect.
    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        match self {
            Self::Masked(card) => card.apply(event),
            Self::Recall(card) => card.apply(event),
        }
    }

    pub fn status(&self) -> ReviewStatus {
        match self {
            Self::Masked(card) => card.state().status,
            Self::Recall(card) => card.state().status,
        }
    }

    /// Accepted characters (masked) or the current text (recall).
    pub fn user_input(&self) -> &str {
        match self {
            Self::Masked(card) => &card.state().user_input,
            Self::Recall(card) => &card.state().input,
        }
    }

    /// Rejected keystrokes (masked) or wrong submissions (recall).
    pub fn error_count(&self) -> u32 {
        match self {
            Self::Masked(card) => card.state().error_count,
            Self::Recall(card) => card.state().attempts,
        }
    }

    pub fn shake_count(&self) -> u32 {
        match self {
            Self::Masked(card) => card.state().shake_count,
            Self::Recall(card) => card.state().shake_count,
        }
    }

    /// Rating already emitted for this card, if any.
    pub fn completed(&self) -> Option<Rating> {
        match self {
            Self::Masked(card) => card.state().completed,
            Self::Recall(card) => card.state().completed,
        }
    }

    /// Answer model for masked cards.
    pub fn answer_model(&self) -> Option<&AnswerModel> {
        match self {
            Self::Masked(card) => Some(card.model()),
            Self::Recall(_) => None,
        }
    }
}

/// Stateless form of [`Engine::apply`].
pub fn reduce(mut engine: Engine, event: Event) -> (Engine, Option<Effect>) {
    let effect = engine.apply(event);
    (engine, effect)
}
