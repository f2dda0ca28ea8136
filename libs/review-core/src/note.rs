//! Saved notes and their analysis payloads.
//!
//! The server sends a note as `{ "type": ..., "translation": {...} | null }`
//! where the payload shape depends on the note type. Notes are decoded into
//! [`NoteAnalysis`] once, so the rest of the crate matches on variants
//! instead of probing fields.

use serde::{Deserialize, Serialize};

use crate::error::NoteError;

/// Prefix for questions built from a translation.
pub const QUESTION_PREFIX: &str = "中文：";

/// Shown when an analysis exists but carries no usable translation.
pub const MISSING_TRANSLATION: &str = "请翻译";

/// Prefix for questions on notes without analysis.
pub const FALLBACK_PREFIX: &str = "Translate: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteType {
    Word,
    Phrase,
    Sentence,
}

impl NoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Phrase => "phrase",
            Self::Sentence => "sentence",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "word" => Some(Self::Word),
            "phrase" => Some(Self::Phrase),
            "sentence" => Some(Self::Sentence),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub sentence: String,
    pub translation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub part_of_speech: String,
    pub translation: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    #[serde(default)]
    pub phonetic: Option<String>,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseAnalysis {
    #[serde(default)]
    pub explanation: String,
    pub translation: String,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    pub translation: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub grammar_analysis: String,
}

/// AI analysis attached to a note, one schema per note type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteAnalysis {
    Word(WordAnalysis),
    Phrase(PhraseAnalysis),
    Sentence(SentenceAnalysis),
}

impl NoteAnalysis {
    pub fn note_type(&self) -> NoteType {
        match self {
            Self::Word(_) => NoteType::Word,
            Self::Phrase(_) => NoteType::Phrase,
            Self::Sentence(_) => NoteType::Sentence,
        }
    }

    /// Chinese translation used as the review prompt.
    ///
    /// Words have no top-level translation; their first definition's is used.
    pub fn translation(&self) -> Option<&str> {
        let text = match self {
            Self::Word(word) => word.definitions.first().map(|d| d.translation.as_str()),
            Self::Phrase(phrase) => Some(phrase.translation.as_str()),
            Self::Sentence(sentence) => Some(sentence.translation.as_str()),
        };
        text.map(str::trim).filter(|t| !t.is_empty())
    }

    fn decode(note_id: i64, kind: NoteType, value: serde_json::Value) -> Result<Self, NoteError> {
        let malformed = |source| NoteError::MalformedAnalysis {
            note_id,
            kind: kind.as_str(),
            source,
        };
        match kind {
            NoteType::Word => serde_json::from_value(value).map(Self::Word).map_err(malformed),
            NoteType::Phrase => serde_json::from_value(value).map(Self::Phrase).map_err(malformed),
            NoteType::Sentence => serde_json::from_value(value)
                .map(Self::Sentence)
                .map_err(malformed),
        }
    }

    fn encode(&self) -> serde_json::Value {
        let value = match self {
            Self::Word(word) => serde_json::to_value(word),
            Self::Phrase(phrase) => serde_json::to_value(phrase),
            Self::Sentence(sentence) => serde_json::to_value(sentence),
        };
        value.unwrap_or(serde_json::Value::Null)
    }
}

/// A saved word, phrase or sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNote", into = "RawNote")]
pub struct Note {
    pub id: i64,
    pub text: String,
    pub corrected_text: Option<String>,
    pub note_type: NoteType,
    pub analysis: Option<NoteAnalysis>,
}

/// Wire shape of a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawNote {
    id: i64,
    text: String,
    #[serde(default)]
    corrected_text: Option<String>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    translation: Option<serde_json::Value>,
}

impl TryFrom<RawNote> for Note {
    type Error = NoteError;

    fn try_from(raw: RawNote) -> Result<Self, Self::Error> {
        let note_type = NoteType::from_str(&raw.kind).ok_or(NoteError::UnknownType(raw.kind))?;
        let analysis = match raw.translation {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => Some(NoteAnalysis::decode(raw.id, note_type, value)?),
        };
        Ok(Self {
            id: raw.id,
            text: raw.text,
            corrected_text: raw.corrected_text,
            note_type,
            analysis,
        })
    }
}

impl From<Note> for RawNote {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            text: note.text,
            corrected_text: note.corrected_text,
            kind: note.note_type.as_str().to_string(),
            translation: note.analysis.as_ref().map(NoteAnalysis::encode),
        }
    }
}

impl Note {
    /// Text the learner has to reproduce: the corrected text when present.
    pub fn answer_text(&self) -> &str {
        match self.corrected_text.as_deref() {
            Some(corrected) if !corrected.trim().is_empty() => corrected,
            _ => &self.text,
        }
    }

    /// Prompt shown above the masked answer.
    pub fn question_text(&self) -> String {
        match &self.analysis {
            Some(analysis) => format!(
                "{QUESTION_PREFIX}{}",
                analysis.translation().unwrap_or(MISSING_TRANSLATION)
            ),
            None => format!("{FALLBACK_PREFIX}{}", self.text),
        }
    }
}
