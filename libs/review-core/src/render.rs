//! Display contract for a card in progress.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::answer::AnswerModel;
use crate::engine::Engine;
use crate::types::ReviewStatus;

/// Placeholder shown for positions still to be typed.
pub const PLACEHOLDER: char = '_';

/// One rendered position of a masked answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "char")]
pub enum Cell {
    /// Fixed-width gap for whitespace.
    Gap,
    /// Accepted character, shown as written in the answer.
    Accepted(char),
    /// Hint letter not yet typed; rendered muted.
    Hint(char),
    /// Still hidden.
    Blank,
}

impl Cell {
    pub fn glyph(&self) -> char {
        match self {
            Self::Gap => ' ',
            Self::Accepted(c) | Self::Hint(c) => *c,
            Self::Blank => PLACEHOLDER,
        }
    }
}

/// Colour treatment derived from the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Neutral,
    Success,
    Warning,
    Error,
}

impl From<ReviewStatus> for Tone {
    fn from(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Typing => Self::Neutral,
            ReviewStatus::Correct => Self::Success,
            ReviewStatus::Incorrect => Self::Warning,
            ReviewStatus::Revealed => Self::Error,
        }
    }
}

/// What the UI draws for the answer area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum AnswerView {
    Masked {
        cells: Vec<Cell>,
        tone: Tone,
        /// Changes on every rejected key; animate while typing and non-zero.
        shake: u32,
    },
    Text {
        text: String,
        tone: Tone,
        shake: u32,
    },
}

impl AnswerView {
    pub fn tone(&self) -> Tone {
        match self {
            Self::Masked { tone, .. } | Self::Text { tone, .. } => *tone,
        }
    }

    pub fn shake(&self) -> u32 {
        match self {
            Self::Masked { shake, .. } | Self::Text { shake, .. } => *shake,
        }
    }
}

impl fmt::Display for AnswerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Masked { cells, .. } => {
                for cell in cells {
                    write!(f, "{}", cell.glyph())?;
                }
                Ok(())
            }
            Self::Text { text, .. } => f.write_str(text),
        }
    }
}

/// Cells for a masked answer given the number of accepted characters.
pub fn mask(model: &AnswerModel, accepted: usize) -> Vec<Cell> {
    let mut canonical_index = 0;
    model
        .details()
        .iter()
        .map(|detail| {
            if detail.is_whitespace() {
                return Cell::Gap;
            }
            let index = canonical_index;
            canonical_index += 1;
            if index < accepted {
                Cell::Accepted(detail.original_char)
            } else if detail.is_hint {
                Cell::Hint(detail.original_char)
            } else {
                Cell::Blank
            }
        })
        .collect()
}

/// Render the current state of a card.
pub fn render(engine: &Engine) -> AnswerView {
    let tone = Tone::from(engine.status());
    let shake = engine.shake_count();
    match engine {
        Engine::Masked(card) => AnswerView::Masked {
            cells: mask(card.model(), card.state().cursor()),
            tone,
            shake,
        },
        Engine::Recall(card) => AnswerView::Text {
            text: card.state().input.clone(),
            tone,
            shake,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Event, Key};
    use crate::types::{FlashcardData, ReviewMode, ReviewSettings};
    use pretty_assertions::assert_eq;

    fn engine(answer: &str, mode: ReviewMode) -> Engine {
        let card = FlashcardData {
            id: 7,
            question: "Q".to_string(),
            answer: answer.to_string(),
            mode,
        };
        Engine::new(&card, &ReviewSettings::default()).unwrap()
    }

    #[test]
    fn fresh_hint_card_shows_word_starts() {
        let view = render(&engine("React Hook", ReviewMode::FirstLetterHint));
        assert_eq!(view.to_string(), "R____ H___");
        assert_eq!(view.tone(), Tone::Neutral);
    }

    #[test]
    fn length_hint_shows_only_shape() {
        let view = render(&engine("a piece of cake", ReviewMode::LengthHint));
        assert_eq!(view.to_string(), "_ _____ __ ____");
    }

    #[test]
    fn accepted_characters_keep_answer_case() {
        let mut engine = engine("React Hook", ReviewMode::FirstLetterHint);
        for c in "reac".chars() {
            engine.apply(Key::Char(c).into());
        }
        let view = render(&engine);
        assert_eq!(view.to_string(), "Reac_ H___");

        let AnswerView::Masked { cells, .. } = view else {
            panic!("expected masked view");
        };
        assert_eq!(cells[0], Cell::Accepted('R'));
        assert_eq!(cells[5], Cell::Gap);
        assert_eq!(cells[6], Cell::Hint('H'));
        assert_eq!(cells[7], Cell::Blank);
    }

    #[test]
    fn shake_counter_follows_mistakes() {
        let mut engine = engine("test", ReviewMode::LengthHint);
        engine.apply(Key::Char('q').into());
        assert_eq!(render(&engine).shake(), 1);
    }

    #[test]
    fn reveal_uses_error_tone() {
        let mut engine = engine("test", ReviewMode::LengthHint);
        engine.apply(Event::ShowAnswer);
        let view = render(&engine);
        assert_eq!(view.to_string(), "test");
        assert_eq!(view.tone(), Tone::Error);
    }

    #[test]
    fn recall_renders_typed_text() {
        let mut engine = engine("apple", ReviewMode::TranslationRecall);
        for c in "pear".chars() {
            engine.apply(Key::Char(c).into());
        }
        engine.apply(Event::Check);
        let view = render(&engine);
        assert_eq!(view.to_string(), "pear");
        assert_eq!(view.tone(), Tone::Warning);
    }
}
