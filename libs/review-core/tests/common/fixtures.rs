//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use review_core::{FlashcardData, ReviewMode};

/// Create a card with a generic question.
pub fn card(id: i64, answer: &str, mode: ReviewMode) -> FlashcardData {
    FlashcardData {
        id,
        question: format!("Q{id}"),
        answer: answer.to_string(),
        mode,
    }
}

/// Review queue payload as returned by the practice-list API.
pub fn review_queue_json() -> serde_json::Value {
    json!([
        {
            "id": 11,
            "note_id": 101,
            "order_index": 0,
            "added_at": "2024-04-01T10:00:00",
            "review_count": 3,
            "last_reviewed": "2024-04-20T08:30:00.123456",
            "mastery_level": 4,
            "note": {
                "id": 101,
                "text": "a piece of cake",
                "corrected_text": null,
                "type": "phrase",
                "translation": { "explanation": "very easy", "translation": "小菜一碟", "examples": [] },
                "tags": [{ "id": 1, "name": "idiom", "color": "#ffaa00" }]
            }
        },
        {
            "id": 12,
            "note_id": 102,
            "order_index": 1,
            "added_at": "2024-04-01T10:00:00",
            "review_count": 0,
            "last_reviewed": null,
            "mastery_level": 0,
            "note": {
                "id": 102,
                "text": "ubiquitous",
                "type": "word",
                "translation": {
                    "phonetic": null,
                    "definitions": [
                        { "part_of_speech": "adj.", "translation": "普遍存在的", "explanation": "", "examples": [] }
                    ]
                },
                "tags": []
            }
        },
        {
            "id": 13,
            "note_id": 103,
            "order_index": 2,
            "added_at": "2024-04-01T10:00:00",
            "review_count": 1,
            "last_reviewed": "2024-04-10T08:00:00",
            "mastery_level": 2,
            "note": {
                "id": 103,
                "text": "React Hoook",
                "corrected_text": "React Hook",
                "type": "phrase",
                "translation": null,
                "tags": []
            }
        }
    ])
}
