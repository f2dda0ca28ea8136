//! Records ratings as JSON lines, applying mastery bookkeeping locally.

use std::collections::HashMap;
use std::io::{self, Write};

use chrono::{DateTime, Utc};
use review_core::{PracticeListItem, Rating, RatingSink, ReviewOutcome};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no practice-list item for card {0}")]
    UnknownItem(i64),
}

/// One line of the results file.
#[derive(Debug, Serialize)]
pub struct ReviewRecord {
    pub item_id: i64,
    pub rating: Rating,
    pub new_mastery_level: u8,
    pub review_count: u32,
    pub error_count: u32,
    pub revealed: bool,
    pub time_taken_ms: i64,
    pub reviewed_at: DateTime<Utc>,
}

pub struct JsonLinesSink<W> {
    writer: W,
    items: HashMap<i64, PracticeListItem>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W, items: impl IntoIterator<Item = PracticeListItem>) -> Self {
        Self {
            writer,
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    pub fn item(&self, id: i64) -> Option<&PracticeListItem> {
        self.items.get(&id)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> RatingSink for JsonLinesSink<W> {
    type Error = SinkError;

    fn record(&mut self, outcome: &ReviewOutcome) -> Result<(), SinkError> {
        let item = self
            .items
            .get(&outcome.card_id)
            .ok_or(SinkError::UnknownItem(outcome.card_id))?;

        // Bookkeeping is applied to a copy so a failed write can be retried.
        let mut updated = item.clone();
        let new_mastery_level = updated.record_review(outcome.rating, outcome.reviewed_at);
        let record = ReviewRecord {
            item_id: updated.id,
            rating: outcome.rating,
            new_mastery_level,
            review_count: updated.review_count,
            error_count: outcome.error_count,
            revealed: outcome.revealed,
            time_taken_ms: outcome.time_taken_ms,
            reviewed_at: outcome.reviewed_at,
        };

        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        self.items.insert(updated.id, updated);
        Ok(())
    }
}
