//! Drawing the review screen.

use std::io::Write;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use review_core::{render, AnswerView, Cell, Engine, ReviewMode, ReviewStatus, Tone};

use crate::app::App;

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::White,
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Error => Color::Red,
    }
}

pub fn draw<W: Write>(frame: &mut Frame<'_>, app: &App<W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let (position, total) = app.session.progress();
    let header = Paragraph::new(format!("WordNest review  {position} / {total} cards"))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    match (app.session.current(), app.session.engine()) {
        (Some(card), Some(engine)) => {
            draw_card(frame, chunks[1], &card.question, engine);
            draw_key_hints(frame, chunks[2], card.mode, engine.status());
        }
        _ => draw_complete(frame, chunks[1], app.session.outcomes().len()),
    }

    if let Some(notice) = &app.notice {
        let line = Paragraph::new(notice.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(line, chunks[3]);
    }
}

fn draw_card(frame: &mut Frame<'_>, area: Rect, question: &str, engine: &Engine) {
    let view = render(engine);
    let color = tone_color(view.tone());

    let answer = match &view {
        AnswerView::Masked { cells, .. } => Line::from(
            cells
                .iter()
                .map(|cell| match cell {
                    Cell::Hint(c) => {
                        Span::styled(c.to_string(), Style::default().fg(Color::DarkGray))
                    }
                    Cell::Accepted(c) => Span::styled(
                        c.to_string(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    other => Span::styled(other.glyph().to_string(), Style::default().fg(color)),
                })
                .collect::<Vec<_>>(),
        ),
        AnswerView::Text { text, .. } => Line::from(vec![
            Span::styled(text.clone(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(if engine.status() == ReviewStatus::Typing { "_" } else { "" }),
        ]),
    };

    let mut lines = vec![
        Line::from(question.to_string()),
        Line::from(""),
        answer,
        Line::from(""),
    ];

    let status = engine.status();
    match status {
        ReviewStatus::Typing if view.shake() > 0 => lines.push(Line::from(Span::styled(
            format!("mistakes: {}", engine.error_count()),
            Style::default().fg(Color::Yellow),
        ))),
        ReviewStatus::Incorrect => lines.push(Line::from(Span::styled(
            "Not quite, try again",
            Style::default().fg(Color::Yellow),
        ))),
        ReviewStatus::Correct => lines.push(Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green),
        ))),
        ReviewStatus::Revealed => lines.push(Line::from(Span::styled(
            "Answer shown",
            Style::default().fg(Color::Red),
        ))),
        ReviewStatus::Typing => {}
    }

    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Card"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}

fn key_hints(mode: ReviewMode, status: ReviewStatus) -> &'static str {
    match status {
        ReviewStatus::Correct => "Enter/1 easy   2 good   Esc quit",
        ReviewStatus::Revealed => "Enter/1 again   Esc quit",
        ReviewStatus::Incorrect => "...",
        ReviewStatus::Typing if mode == ReviewMode::TranslationRecall => {
            "type the sentence   Enter check   Tab show answer   Esc quit"
        }
        ReviewStatus::Typing => "type the answer   Tab show answer   Esc quit",
    }
}

fn draw_key_hints(frame: &mut Frame<'_>, area: Rect, mode: ReviewMode, status: ReviewStatus) {
    let hints = Paragraph::new(key_hints(mode, status))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(hints, area);
}

fn draw_complete(frame: &mut Frame<'_>, area: Rect, reviewed: usize) {
    let lines = vec![
        Line::from(Span::styled(
            "Session Complete!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{reviewed} cards reviewed")),
        Line::from(""),
        Line::from("press any key to exit"),
    ];
    let body = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    frame.render_widget(body, area);
}
