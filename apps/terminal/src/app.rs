//! Review app state: the session plus the timer it asked for.

use std::io::Write;
use std::time::{Duration, Instant};

use chrono::Utc;
use review_core::{Event, ReviewSession, SessionError, SessionUpdate};
use tracing::{debug, warn};

use crate::input::Command;
use crate::sink::JsonLinesSink;

/// Pending `ResetElapsed` delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTimer {
    pub card_id: i64,
    pub due: Instant,
}

pub struct App<W: Write> {
    pub session: ReviewSession<JsonLinesSink<W>>,
    pub reset: Option<ResetTimer>,
    /// Message shown under the card, e.g. a failed save.
    pub notice: Option<String>,
    /// Set after a quit was refused because a rating is unsaved.
    pub quit_armed: bool,
    pub should_quit: bool,
}

impl<W: Write> App<W> {
    pub fn new(session: ReviewSession<JsonLinesSink<W>>) -> Self {
        Self {
            session,
            reset: None,
            notice: None,
            quit_armed: false,
            should_quit: false,
        }
    }

    pub fn on_command(&mut self, command: Command, now: Instant) {
        match command {
            Command::Quit => self.quit(),
            Command::Retry => {
                let result = self.session.retry_pending(Utc::now());
                self.on_result(result, now);
            }
            Command::Engine(_) if self.session.is_complete() => self.should_quit = true,
            Command::Engine(event) => {
                let result = self.session.handle_current(event, Utc::now());
                self.on_result(result, now);
            }
        }
    }

    /// Quit, except that the first attempt with an unsaved rating only warns.
    fn quit(&mut self) {
        match self.session.pending() {
            Some(outcome) if !self.quit_armed => {
                self.quit_armed = true;
                self.notice = Some(format!(
                    "Rating for card {} is not saved. Ctrl-R retries, quit again to discard it.",
                    outcome.card_id
                ));
            }
            Some(outcome) => {
                warn!(
                    card_id = outcome.card_id,
                    rating = outcome.rating.as_str(),
                    "quit with unsaved rating"
                );
                self.should_quit = true;
            }
            None => self.should_quit = true,
        }
    }

    /// Fire the reset timer once it is due.
    pub fn on_tick(&mut self, now: Instant) {
        let Some(timer) = self.reset else {
            return;
        };
        if now < timer.due {
            return;
        }
        self.reset = None;
        let result = self.session.handle(timer.card_id, Event::ResetElapsed, Utc::now());
        self.on_result(result, now);
    }

    /// How long the event loop may block before the next tick matters.
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.reset {
            Some(timer) => timer.due.saturating_duration_since(now).min(idle),
            None => idle,
        }
    }

    fn on_result(&mut self, result: Result<SessionUpdate, SessionError>, now: Instant) {
        match result {
            Ok(SessionUpdate::Unchanged) => {}
            Ok(SessionUpdate::ScheduleReset { card_id, delay_ms }) => {
                self.reset = Some(ResetTimer {
                    card_id,
                    due: now + Duration::from_millis(delay_ms),
                });
            }
            Ok(SessionUpdate::Advanced(_) | SessionUpdate::Finished(_)) => {
                self.reset = None;
                self.notice = None;
                self.quit_armed = false;
            }
            Err(err @ SessionError::Sink { .. }) => {
                self.notice = Some(format!("{err}. Press Ctrl-R to retry."));
            }
            Err(err @ (SessionError::CardMismatch { .. } | SessionError::NoActiveCard)) => {
                debug!(error = %err, "dropped stale event");
            }
            Err(err) => {
                warn!(error = %err, "review session error");
                self.notice = Some(err.to_string());
            }
        }
    }
}
