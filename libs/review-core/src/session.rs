//! Review session: feeds one card at a time through the engine and hands
//! ratings to a sink.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::{Effect, Engine, Event};
use crate::error::{Result, SessionError};
use crate::types::{FlashcardData, Rating, ReviewSettings, ReviewStatus};

/// Result of finishing one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub card_id: i64,
    pub rating: Rating,
    pub error_count: u32,
    /// Whether the answer had to be revealed.
    pub revealed: bool,
    pub time_taken_ms: i64,
    pub reviewed_at: DateTime<Utc>,
}

/// Where finished reviews go (usually the scheduler's API).
pub trait RatingSink {
    type Error: fmt::Display;

    fn record(&mut self, outcome: &ReviewOutcome) -> std::result::Result<(), Self::Error>;
}

/// What happened after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// The current card absorbed the event.
    Unchanged,
    /// Deliver [`Event::ResetElapsed`] for `card_id` after the delay.
    ScheduleReset { card_id: i64, delay_ms: u64 },
    /// The card was rated and recorded; the next card is active.
    Advanced(ReviewOutcome),
    /// The last card was rated and recorded.
    Finished(ReviewOutcome),
}

#[derive(Debug, Clone)]
struct ActiveCard {
    card: FlashcardData,
    engine: Engine,
    presented_at: DateTime<Utc>,
}

/// Sequential review over a queue of cards.
///
/// Exactly one card is live at a time. Its engine is built when the card is
/// presented and dropped once its rating is recorded; nothing carries over.
/// A rating the sink failed to record stays pending and the card stays
/// finished until [`ReviewSession::retry_pending`] succeeds.
pub struct ReviewSession<S> {
    settings: ReviewSettings,
    queue: Vec<FlashcardData>,
    index: usize,
    active: Option<ActiveCard>,
    pending: Option<ReviewOutcome>,
    outcomes: Vec<ReviewOutcome>,
    sink: S,
}

impl<S: RatingSink> ReviewSession<S> {
    /// Start a session; cards whose mode has no engine are skipped.
    pub fn new(
        queue: Vec<FlashcardData>,
        settings: ReviewSettings,
        sink: S,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let mut session = Self {
            settings,
            queue: Vec::new(),
            index: 0,
            active: None,
            pending: None,
            outcomes: Vec::new(),
            sink,
        };
        session.restart(queue, now)?;
        Ok(session)
    }

    /// Replace the queue and start over from its first card.
    pub fn restart(&mut self, queue: Vec<FlashcardData>, now: DateTime<Utc>) -> Result<()> {
        self.queue = queue
            .into_iter()
            .filter(|card| {
                let supported = card.mode.is_supported();
                if !supported {
                    warn!(
                        card_id = card.id,
                        mode = card.mode.as_str(),
                        "skipping card with unsupported mode"
                    );
                }
                supported
            })
            .collect();
        self.index = 0;
        self.pending = None;
        self.outcomes.clear();
        self.present(now)?;
        info!(cards = self.queue.len(), "review session started");
        Ok(())
    }

    fn present(&mut self, now: DateTime<Utc>) -> Result<()> {
        self.active = match self.queue.get(self.index) {
            Some(card) => Some(ActiveCard {
                engine: Engine::new(card, &self.settings)?,
                card: card.clone(),
                presented_at: now,
            }),
            None => None,
        };
        Ok(())
    }

    /// Card currently under review.
    pub fn current(&self) -> Option<&FlashcardData> {
        self.active.as_ref().map(|a| &a.card)
    }

    pub fn engine(&self) -> Option<&Engine> {
        self.active.as_ref().map(|a| &a.engine)
    }

    /// One-based position of the current card and queue length.
    pub fn progress(&self) -> (usize, usize) {
        ((self.index + 1).min(self.queue.len()), self.queue.len())
    }

    pub fn outcomes(&self) -> &[ReviewOutcome] {
        &self.outcomes
    }

    /// Rating that was emitted but not yet recorded.
    pub fn pending(&self) -> Option<&ReviewOutcome> {
        self.pending.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.active.is_none() && self.pending.is_none()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Feed an event addressed to `card_id`.
    pub fn handle(
        &mut self,
        card_id: i64,
        event: Event,
        now: DateTime<Utc>,
    ) -> Result<SessionUpdate> {
        let active = self.active.as_mut().ok_or(SessionError::NoActiveCard)?;
        if active.card.id != card_id {
            return Err(SessionError::CardMismatch {
                expected: active.card.id,
                got: card_id,
            });
        }

        match active.engine.apply(event) {
            None => Ok(SessionUpdate::Unchanged),
            Some(Effect::ScheduleReset { delay_ms }) => {
                Ok(SessionUpdate::ScheduleReset { card_id, delay_ms })
            }
            Some(Effect::Completed(rating)) => {
                let outcome = ReviewOutcome {
                    card_id,
                    rating,
                    error_count: active.engine.error_count(),
                    revealed: active.engine.status() == ReviewStatus::Revealed,
                    time_taken_ms: (now - active.presented_at).num_milliseconds().max(0),
                    reviewed_at: now,
                };
                self.pending = Some(outcome);
                self.flush(now)
            }
        }
    }

    /// Feed an event to whichever card is current.
    pub fn handle_current(&mut self, event: Event, now: DateTime<Utc>) -> Result<SessionUpdate> {
        let card_id = self.current().map(|c| c.id).ok_or(SessionError::NoActiveCard)?;
        self.handle(card_id, event, now)
    }

    /// Try again to record a rating the sink rejected.
    pub fn retry_pending(&mut self, now: DateTime<Utc>) -> Result<SessionUpdate> {
        if self.pending.is_none() {
            return Ok(SessionUpdate::Unchanged);
        }
        self.flush(now)
    }

    fn flush(&mut self, now: DateTime<Utc>) -> Result<SessionUpdate> {
        let Some(outcome) = self.pending.take() else {
            return Ok(SessionUpdate::Unchanged);
        };

        if let Err(err) = self.sink.record(&outcome) {
            warn!(card_id = outcome.card_id, error = %err, "failed to record rating");
            let card_id = outcome.card_id;
            self.pending = Some(outcome);
            return Err(SessionError::Sink {
                card_id,
                message: err.to_string(),
            });
        }

        info!(
            card_id = outcome.card_id,
            rating = outcome.rating.as_str(),
            time_taken_ms = outcome.time_taken_ms,
            "rating recorded"
        );
        self.outcomes.push(outcome.clone());
        self.index += 1;
        self.present(now)?;

        if self.active.is_some() {
            Ok(SessionUpdate::Advanced(outcome))
        } else {
            info!(reviewed = self.outcomes.len(), "review session complete");
            Ok(SessionUpdate::Finished(outcome))
        }
    }
}
