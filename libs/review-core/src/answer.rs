//! Answer model: classifies every character of an answer for masking.

use serde::{Deserialize, Serialize};

use crate::types::ReviewMode;

/// Classification of a single answer character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharKind {
    Letter,
    Whitespace,
}

/// One position of the answer as shown in the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDetail {
    pub kind: CharKind,
    pub original_char: char,
    pub is_hint: bool,
}

impl CharacterDetail {
    pub fn is_whitespace(&self) -> bool {
        self.kind == CharKind::Whitespace
    }
}

/// Case folding used for every comparison in the engine.
///
/// Takes the first char of the lower-case mapping so positions stay one to one.
pub fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Whether a typing key can produce `c`. Everything else is filled in by the engine.
pub fn is_typeable(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

/// Character map of an answer plus its canonical comparison form.
///
/// The canonical answer is the answer without whitespace, lower-cased.
/// Canonical positions index into it; `detail_index` maps them back to
/// positions in `details`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerModel {
    details: Vec<CharacterDetail>,
    canonical: Vec<char>,
    positions: Vec<usize>,
}

impl AnswerModel {
    /// Build the character map for `answer` under `mode`.
    ///
    /// Leading and trailing whitespace is dropped; inner whitespace is kept
    /// as gap placeholders.
    pub fn build(answer: &str, mode: ReviewMode) -> Self {
        let trimmed = answer.trim();
        let mut details = Vec::with_capacity(trimmed.len());
        let mut canonical = Vec::with_capacity(trimmed.len());
        let mut positions = Vec::with_capacity(trimmed.len());
        let mut prev_whitespace = true;

        for c in trimmed.chars() {
            if c.is_whitespace() {
                details.push(CharacterDetail {
                    kind: CharKind::Whitespace,
                    original_char: c,
                    is_hint: false,
                });
                prev_whitespace = true;
                continue;
            }

            let is_hint = mode == ReviewMode::FirstLetterHint && prev_whitespace;
            positions.push(details.len());
            canonical.push(fold(c));
            details.push(CharacterDetail {
                kind: CharKind::Letter,
                original_char: c,
                is_hint,
            });
            prev_whitespace = false;
        }

        Self {
            details,
            canonical,
            positions,
        }
    }

    pub fn details(&self) -> &[CharacterDetail] {
        &self.details
    }

    /// Canonical answer as a string.
    pub fn canonical(&self) -> String {
        self.canonical.iter().collect()
    }

    /// Number of characters that must be typed.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// Folded character expected at a canonical position.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.canonical.get(index).copied()
    }

    /// Index into `details` for a canonical position.
    pub fn detail_index(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    /// Detail for a canonical position.
    pub fn letter(&self, index: usize) -> Option<&CharacterDetail> {
        self.detail_index(index).map(|i| &self.details[i])
    }
}
