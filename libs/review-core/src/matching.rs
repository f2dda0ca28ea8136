//! Whole-answer matching for translation-recall cards.

use serde::{Deserialize, Serialize};

/// Result of comparing a submitted answer to the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized submitted answer (for display).
    pub typed_normalized: String,
    /// Normalized expected answer (for display).
    pub correct_normalized: String,
}

/// Compare a submitted answer to the expected answer, ignoring case and
/// surrounding or repeated whitespace.
pub fn compare_answers(typed: &str, correct: &str) -> MatchResult {
    let typed_normalized = normalize_whitespace(typed);
    let correct_normalized = normalize_whitespace(correct);
    let is_correct = typed_normalized.to_lowercase() == correct_normalized.to_lowercase();

    MatchResult {
        is_correct,
        typed_normalized,
        correct_normalized,
    }
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
