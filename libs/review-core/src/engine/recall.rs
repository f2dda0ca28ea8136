//! Translation-recall: free typing, checked as a whole on submit.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{rating_for_key, Effect, Event, Key};
use crate::matching::compare_answers;
use crate::types::{Rating, ReviewSettings, ReviewStatus};

/// Mutable part of a translation-recall card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallState {
    pub input: String,
    pub status: ReviewStatus,
    /// Wrong submissions so far.
    pub attempts: u32,
    pub shake_count: u32,
    pub completed: Option<Rating>,
}

#[derive(Debug, Clone)]
pub struct RecallCard {
    answer: String,
    max_attempts: u32,
    reset_delay_ms: u64,
    state: RecallState,
}

impl RecallCard {
    pub fn new(answer: &str, settings: &ReviewSettings) -> Self {
        Self {
            answer: answer.trim().to_string(),
            max_attempts: settings.recall_max_attempts.max(1),
            reset_delay_ms: settings.recall_reset_delay_ms,
            state: RecallState::default(),
        }
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> &RecallState {
        &self.state
    }

    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        let (next, effect) = self.transition(&self.state, event);
        self.state = next;
        effect
    }

    /// Compute the state following `event` without mutating anything.
    pub fn transition(&self, state: &RecallState, event: Event) -> (RecallState, Option<Effect>) {
        let mut next = state.clone();
        if next.completed.is_some() {
            return (next, None);
        }

        let effect = match (next.status, event) {
            (ReviewStatus::Typing, Event::Key(Key::Char(c))) if !c.is_control() => {
                next.input.push(c);
                None
            }
            (ReviewStatus::Typing, Event::Key(Key::Backspace)) => {
                next.input.pop();
                None
            }
            (ReviewStatus::Typing, Event::Key(Key::Enter) | Event::Check) => self.check(&mut next),
            (ReviewStatus::Typing, Event::ShowAnswer) => {
                self.reveal(&mut next);
                None
            }
            (ReviewStatus::Incorrect, Event::ResetElapsed) => {
                next.input.clear();
                next.status = ReviewStatus::Typing;
                None
            }
            (status, Event::Key(key)) if status.is_terminal() => {
                rating_for_key(status, key).map(|rating| {
                    info!(rating = rating.as_str(), "card rated");
                    next.completed = Some(rating);
                    Effect::Completed(rating)
                })
            }
            (status, Event::Rate(rating)) if status.is_terminal() => {
                info!(rating = rating.as_str(), "card rated");
                next.completed = Some(rating);
                Some(Effect::Completed(rating))
            }
            _ => None,
        };

        (next, effect)
    }

    fn check(&self, state: &mut RecallState) -> Option<Effect> {
        if state.input.trim().is_empty() {
            return None;
        }

        let result = compare_answers(&state.input, &self.answer);
        if result.is_correct {
            info!(status = "correct", "recall answer accepted");
            state.status = ReviewStatus::Correct;
            return None;
        }

        state.attempts += 1;
        state.shake_count += 1;
        debug!(
            attempts = state.attempts,
            typed = %result.typed_normalized,
            "recall answer rejected"
        );

        if state.attempts >= self.max_attempts {
            self.reveal(state);
            None
        } else {
            state.status = ReviewStatus::Incorrect;
            Some(Effect::ScheduleReset {
                delay_ms: self.reset_delay_ms,
            })
        }
    }

    fn reveal(&self, state: &mut RecallState) {
        info!(attempts = state.attempts, status = "revealed", "answer revealed");
        state.input = self.answer.clone();
        state.status = ReviewStatus::Revealed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RECALL_RESET_DELAY_MS;

    fn card(answer: &str) -> RecallCard {
        RecallCard::new(answer, &ReviewSettings::default())
    }

    fn type_str(card: &mut RecallCard, text: &str) {
        for c in text.chars() {
            card.apply(Key::Char(c).into());
        }
    }

    #[test]
    fn typing_is_unconstrained_and_never_judged() {
        let mut card = card("a piece of cake");
        type_str(&mut card, "x? 1 2 #");
        assert_eq!(card.state().input, "x? 1 2 #");
        assert_eq!(card.state().status, ReviewStatus::Typing);
        assert_eq!(card.state().attempts, 0);
    }

    #[test]
    fn backspace_edits_text() {
        let mut card = card("apple");
        type_str(&mut card, "appel");
        card.apply(Key::Backspace.into());
        card.apply(Key::Backspace.into());
        type_str(&mut card, "le");
        assert_eq!(card.state().input, "apple");
    }

    #[test]
    fn check_accepts_case_and_padding_differences() {
        let mut card = card("A piece of cake");
        type_str(&mut card, "  a PIECE of cake ");
        assert_eq!(card.apply(Event::Check), None);
        assert_eq!(card.state().status, ReviewStatus::Correct);
    }

    #[test]
    fn enter_submits() {
        let mut card = card("apple");
        type_str(&mut card, "apple");
        card.apply(Key::Enter.into());
        assert_eq!(card.state().status, ReviewStatus::Correct);
    }

    #[test]
    fn first_miss_flashes_then_resets() {
        let mut card = card("apple");
        type_str(&mut card, "pear");
        assert_eq!(
            card.apply(Event::Check),
            Some(Effect::ScheduleReset {
                delay_ms: RECALL_RESET_DELAY_MS
            })
        );
        assert_eq!(card.state().status, ReviewStatus::Incorrect);
        assert_eq!(card.state().attempts, 1);
        assert_eq!(card.state().shake_count, 1);

        type_str(&mut card, "zzz");
        card.apply(Event::Check);
        assert_eq!(card.state().input, "pear");
        assert_eq!(card.state().attempts, 1);

        card.apply(Event::ResetElapsed);
        assert_eq!(card.state().status, ReviewStatus::Typing);
        assert_eq!(card.state().input, "");
    }

    #[test]
    fn second_miss_reveals() {
        let mut card = card("apple");
        type_str(&mut card, "pear");
        card.apply(Event::Check);
        card.apply(Event::ResetElapsed);
        type_str(&mut card, "plum");
        assert_eq!(card.apply(Event::Check), None);
        assert_eq!(card.state().status, ReviewStatus::Revealed);
        assert_eq!(card.state().input, "apple");
        assert_eq!(card.state().attempts, 2);
    }

    #[test]
    fn empty_submission_is_ignored() {
        let mut card = card("apple");
        type_str(&mut card, "   ");
        card.apply(Event::Check);
        assert_eq!(card.state().status, ReviewStatus::Typing);
        assert_eq!(card.state().attempts, 0);
    }

    #[test]
    fn reset_outside_incorrect_is_ignored() {
        let mut card = card("apple");
        type_str(&mut card, "app");
        card.apply(Event::ResetElapsed);
        assert_eq!(card.state().input, "app");
    }

    #[test]
    fn digits_type_while_typing_and_rate_when_finished() {
        let mut card = card("apple");
        type_str(&mut card, "apple");
        card.apply(Event::Check);
        assert_eq!(
            card.apply(Key::Char('2').into()),
            Some(Effect::Completed(Rating::Good))
        );
        assert_eq!(card.apply(Key::Enter.into()), None);
    }

    #[test]
    fn show_answer_then_again() {
        let mut card = card("apple");
        card.apply(Event::ShowAnswer);
        assert_eq!(card.state().status, ReviewStatus::Revealed);
        assert_eq!(
            card.apply(Key::Char('1').into()),
            Some(Effect::Completed(Rating::Again))
        );
    }
}
