//! Error types for review-core.

use thiserror::Error;

use crate::types::ReviewMode;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors raised when building an engine for a card.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("review mode {} has no engine", .0.as_str())]
    UnsupportedMode(ReviewMode),
}

/// Errors raised while converting server notes into cards.
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("unknown note type: {0}")]
    UnknownType(String),

    #[error("malformed {kind} analysis for note {note_id}: {source}")]
    MalformedAnalysis {
        note_id: i64,
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by a review session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no active card")]
    NoActiveCard,

    #[error("event for card {got} but card {expected} is active")]
    CardMismatch { expected: i64, got: i64 },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to record rating for card {card_id}: {message}")]
    Sink { card_id: i64, message: String },
}
