//! Character-by-character typing against a masked answer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{is_typing_key, rating_for_key, Effect, Event, Key};
use crate::answer::{fold, is_typeable, AnswerModel};
use crate::types::{Rating, ReviewMode, ReviewSettings, ReviewStatus};

/// Mutable part of a masked card.
///
/// `user_input` only ever holds accepted characters in canonical form, so it
/// is always a prefix of the canonical answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedState {
    pub user_input: String,
    pub status: ReviewStatus,
    pub error_count: u32,
    pub shake_count: u32,
    pub completed: Option<Rating>,
}

impl MaskedState {
    /// Number of accepted characters.
    pub fn cursor(&self) -> usize {
        self.user_input.chars().count()
    }
}

/// A hint-mode card: the immutable answer model plus its current state.
#[derive(Debug, Clone)]
pub struct MaskedCard {
    model: AnswerModel,
    error_threshold: u32,
    forgiving_hints: bool,
    state: MaskedState,
}

impl MaskedCard {
    pub fn new(answer: &str, mode: ReviewMode, settings: &ReviewSettings) -> Self {
        let mut card = Self {
            model: AnswerModel::build(answer, mode),
            error_threshold: settings.error_threshold.max(1),
            forgiving_hints: settings.forgiving_hints,
            state: MaskedState::default(),
        };
        let mut initial = MaskedState::default();
        card.fill_auto(&mut initial);
        card.state = initial;
        card
    }

    pub fn model(&self) -> &AnswerModel {
        &self.model
    }

    pub fn state(&self) -> &MaskedState {
        &self.state
    }

    /// Apply an event to the stored state.
    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        let (next, effect) = self.transition(&self.state, event);
        self.state = next;
        effect
    }

    /// Compute the state following `event` without mutating anything.
    pub fn transition(&self, state: &MaskedState, event: Event) -> (MaskedState, Option<Effect>) {
        let mut next = state.clone();
        if next.completed.is_some() {
            return (next, None);
        }

        let effect = match (next.status, event) {
            (ReviewStatus::Typing, Event::Key(Key::Backspace)) => {
                self.backspace(&mut next);
                None
            }
            (ReviewStatus::Typing, Event::Key(key)) if is_typing_key(key) => {
                if let Key::Char(c) = key {
                    self.keystroke(&mut next, c);
                }
                None
            }
            (ReviewStatus::Typing, Event::ShowAnswer) => {
                self.reveal(&mut next);
                None
            }
            (status, Event::Key(key)) if status.is_terminal() => {
                rating_for_key(status, key).map(|rating| complete(&mut next, rating))
            }
            (status, Event::Rate(rating)) if status.is_terminal() => {
                Some(complete(&mut next, rating))
            }
            _ => None,
        };

        (next, effect)
    }

    /// Whether the engine fills this canonical position on its own.
    ///
    /// Characters no typing key produces are always filled; hints are filled
    /// when the forgiving-hint policy is on.
    fn is_auto(&self, index: usize) -> bool {
        match self.model.letter(index) {
            Some(detail) => {
                !is_typeable(detail.original_char) || (self.forgiving_hints && detail.is_hint)
            }
            None => false,
        }
    }

    fn fill_auto(&self, state: &mut MaskedState) {
        let mut cursor = state.cursor();
        while cursor < self.model.len() && self.is_auto(cursor) {
            if let Some(c) = self.model.char_at(cursor) {
                state.user_input.push(c);
            }
            cursor += 1;
        }
        if !self.model.is_empty() && cursor == self.model.len() {
            info!(status = "correct", "answer complete");
            state.status = ReviewStatus::Correct;
        }
    }

    fn keystroke(&self, state: &mut MaskedState, key: char) {
        let cursor = state.cursor();
        let Some(expected) = self.model.char_at(cursor) else {
            return;
        };

        if fold(key) == expected {
            debug!(%key, cursor, "accepted keystroke");
            state.user_input.push(expected);
            self.fill_auto(state);
            return;
        }

        // Digits double as rating keys, so a wrong one is never a mistake.
        if key.is_ascii_digit() {
            return;
        }

        state.error_count += 1;
        state.shake_count += 1;
        debug!(%key, cursor, errors = state.error_count, "rejected keystroke");
        if state.error_count >= self.error_threshold {
            self.reveal(state);
        }
    }

    /// Drop the last typed character together with any auto-filled ones after it.
    fn backspace(&self, state: &mut MaskedState) {
        let cursor = state.cursor();
        if let Some(last_typed) = (0..cursor).rev().find(|&i| !self.is_auto(i)) {
            state.user_input = state.user_input.chars().take(last_typed).collect();
        }
    }

    fn reveal(&self, state: &mut MaskedState) {
        info!(errors = state.error_count, status = "revealed", "answer revealed");
        state.user_input = self.model.canonical();
        state.status = ReviewStatus::Revealed;
    }
}

fn complete(state: &mut MaskedState, rating: Rating) -> Effect {
    info!(rating = rating.as_str(), "card rated");
    state.completed = Some(rating);
    Effect::Completed(rating)
}
