//! Core types for the review engine.

use serde::{Deserialize, Serialize};

/// Number of rejected keystrokes before a hint-mode card reveals itself.
pub const ERROR_THRESHOLD: u32 = 3;

/// Number of wrong submissions allowed in translation-recall mode.
pub const RECALL_MAX_ATTEMPTS: u32 = 2;

/// Delay before an incorrect translation-recall attempt resets to typing.
pub const RECALL_RESET_DELAY_MS: u64 = 1000;

/// Default number of items pulled into a review session.
pub const QUEUE_LIMIT: usize = 20;

/// Rating handed back to the scheduler once a card is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Again,
    Good,
    Easy,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Again => "again",
            Self::Good => "good",
            Self::Easy => "easy",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "again" => Some(Self::Again),
            "good" => Some(Self::Good),
            "easy" => Some(Self::Easy),
            _ => None,
        }
    }
}

/// How a card is presented and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewMode {
    /// Masked answer with the first letter of every word shown.
    FirstLetterHint,
    /// Masked answer showing only its shape.
    LengthHint,
    /// Free text answer checked as a whole.
    TranslationRecall,
    /// Reserved. No engine exists for it.
    AiCloze,
}

impl ReviewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstLetterHint => "first-letter-hint",
            Self::LengthHint => "length-hint",
            Self::TranslationRecall => "translation-recall",
            Self::AiCloze => "ai-cloze",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first-letter-hint" => Some(Self::FirstLetterHint),
            "length-hint" => Some(Self::LengthHint),
            "translation-recall" => Some(Self::TranslationRecall),
            "ai-cloze" => Some(Self::AiCloze),
            _ => None,
        }
    }

    /// Whether the answer is typed character by character against a mask.
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::FirstLetterHint | Self::LengthHint)
    }

    /// Whether an engine exists for the mode.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::AiCloze)
    }
}

/// Status of the card currently under review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Typing,
    /// Transient state after a wrong translation-recall submission.
    Incorrect,
    Correct,
    Revealed,
}

impl Default for ReviewStatus {
    fn default() -> Self {
        Self::Typing
    }
}

impl ReviewStatus {
    /// Terminal statuses wait for a rating and never return to typing.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Correct | Self::Revealed)
    }
}

/// A single card handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardData {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub mode: ReviewMode,
}

/// Tunable review policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSettings {
    pub error_threshold: u32,
    pub recall_max_attempts: u32,
    pub recall_reset_delay_ms: u64,
    /// Auto-accept first-letter hints instead of requiring them to be typed.
    pub forgiving_hints: bool,
    pub queue_limit: usize,
}

impl Default for ReviewSettings {
    fn default() -> Self {
        Self {
            error_threshold: ERROR_THRESHOLD,
            recall_max_attempts: RECALL_MAX_ATTEMPTS,
            recall_reset_delay_ms: RECALL_RESET_DELAY_MS,
            forgiving_hints: false,
            queue_limit: QUEUE_LIMIT,
        }
    }
}

/// Partial settings layered over a base (all fields optional for overrides).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall_max_attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recall_reset_delay_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forgiving_hints: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_limit: Option<usize>,
}

impl ReviewSettings {
    /// Merge base settings with optional overrides.
    ///
    /// Thresholds are clamped to at least one so a card can always be
    /// revealed by mistakes.
    pub fn merge(base: &ReviewSettings, overrides: Option<&SettingsOverrides>) -> Self {
        match overrides {
            Some(o) => Self {
                error_threshold: o.error_threshold.unwrap_or(base.error_threshold).max(1),
                recall_max_attempts: o
                    .recall_max_attempts
                    .unwrap_or(base.recall_max_attempts)
                    .max(1),
                recall_reset_delay_ms: o
                    .recall_reset_delay_ms
                    .unwrap_or(base.recall_reset_delay_ms),
                forgiving_hints: o.forgiving_hints.unwrap_or(base.forgiving_hints),
                queue_limit: o.queue_limit.unwrap_or(base.queue_limit),
            },
            None => base.clone(),
        }
    }
}
