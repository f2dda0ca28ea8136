//! Shared helpers for review-core integration tests.

#![allow(dead_code)]

pub mod fixtures;

use chrono::{DateTime, TimeZone, Utc};
use review_core::{Engine, Event, FlashcardData, Key, RatingSink, ReviewOutcome, ReviewSettings};

/// Fixed clock for sessions.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

/// Engine with default settings.
pub fn engine(card: &FlashcardData) -> Engine {
    Engine::new(card, &ReviewSettings::default()).unwrap()
}

/// Send every character of `text` as a key press.
pub fn type_keys(engine: &mut Engine, text: &str) {
    for c in text.chars() {
        engine.apply(Event::Key(Key::Char(c)));
    }
}

/// Sink that keeps everything it is given.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub outcomes: Vec<ReviewOutcome>,
}

impl RatingSink for RecordingSink {
    type Error = std::convert::Infallible;

    fn record(&mut self, outcome: &ReviewOutcome) -> Result<(), Self::Error> {
        self.outcomes.push(outcome.clone());
        Ok(())
    }
}
