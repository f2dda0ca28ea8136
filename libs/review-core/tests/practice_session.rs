//! Practice-list review from queue payload to recorded ratings.

mod common;

use pretty_assertions::assert_eq;
use review_core::mastery::next_mastery;
use review_core::{
    order_review_queue, Event, FlashcardData, Key, PracticeListItem, Rating, ReviewMode,
    ReviewSession, ReviewSettings, SessionUpdate,
};

use common::{fixtures, RecordingSink};

fn queue() -> Vec<PracticeListItem> {
    serde_json::from_value(fixtures::review_queue_json()).unwrap()
}

/// Queue payload decodes and orders weakest first.
#[test]
fn test_queue_order_and_cards() {
    let items = order_review_queue(queue(), ReviewSettings::default().queue_limit);
    let cards: Vec<FlashcardData> = items.iter().map(PracticeListItem::to_flashcard).collect();

    assert_eq!(
        cards,
        vec![
            FlashcardData {
                id: 12,
                question: "中文：普遍存在的".to_string(),
                answer: "ubiquitous".to_string(),
                mode: ReviewMode::FirstLetterHint,
            },
            FlashcardData {
                id: 13,
                question: "Translate: React Hoook".to_string(),
                answer: "React Hook".to_string(),
                mode: ReviewMode::LengthHint,
            },
            FlashcardData {
                id: 11,
                question: "中文：小菜一碟".to_string(),
                answer: "a piece of cake".to_string(),
                mode: ReviewMode::TranslationRecall,
            },
        ]
    );
}

/// A whole session records one rating per card in queue order.
#[test]
fn test_full_session() {
    let items = order_review_queue(queue(), 20);
    let cards = items.iter().map(PracticeListItem::to_flashcard).collect();
    let mut session =
        ReviewSession::new(cards, ReviewSettings::default(), RecordingSink::default(), common::t0())
            .unwrap();
    let now = common::t0();

    // ubiquitous: typed cleanly, rated good.
    for c in "ubiquitous".chars() {
        session.handle(12, Key::Char(c).into(), now).unwrap();
    }
    let update = session.handle(12, Key::Char('2').into(), now).unwrap();
    assert!(matches!(update, SessionUpdate::Advanced(_)));

    // React Hook: gives up.
    session.handle(13, Event::ShowAnswer, now).unwrap();
    session.handle(13, Key::Enter.into(), now).unwrap();

    // a piece of cake: one miss, then right.
    for c in "a slice".chars() {
        session.handle(11, Key::Char(c).into(), now).unwrap();
    }
    assert_eq!(
        session.handle(11, Event::Check, now).unwrap(),
        SessionUpdate::ScheduleReset {
            card_id: 11,
            delay_ms: 1000
        }
    );
    session.handle(11, Event::ResetElapsed, now).unwrap();
    for c in "a piece of cake".chars() {
        session.handle(11, Key::Char(c).into(), now).unwrap();
    }
    session.handle(11, Event::Check, now).unwrap();
    let update = session.handle(11, Event::Rate(Rating::Easy), now).unwrap();
    assert!(matches!(update, SessionUpdate::Finished(_)));
    assert!(session.is_complete());

    let recorded: Vec<(i64, Rating, u32, bool)> = session
        .into_sink()
        .outcomes
        .iter()
        .map(|o| (o.card_id, o.rating, o.error_count, o.revealed))
        .collect();
    assert_eq!(
        recorded,
        vec![
            (12, Rating::Good, 0, false),
            (13, Rating::Again, 0, true),
            (11, Rating::Easy, 1, false),
        ]
    );
}

/// Ratings feed back into mastery and therefore the next review mode.
#[test]
fn test_mastery_changes_next_mode() {
    let mut items = queue();
    let item = items.iter_mut().find(|i| i.id == 13).unwrap();
    assert_eq!(item.review_mode(), ReviewMode::LengthHint);

    item.record_review(Rating::Easy, common::t0());
    assert_eq!(item.mastery_level, next_mastery(2, Rating::Easy));
    assert_eq!(item.review_mode(), ReviewMode::TranslationRecall);
    assert_eq!(item.review_count, 2);
}
