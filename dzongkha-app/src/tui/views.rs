use crate::tui::theme::*;
use dzongkha_core::ReviewSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub struct Screen<'a> {
    pub session: &'a ReviewSession,
    pub categories: &'a [String],
    pub sel: usize,
    pub animating: bool,
    pub offline: bool,
}

pub fn draw_ui(f: &mut Frame, area: Rect, screen: &Screen) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8), Constraint::Length(2)])
        .split(area);

    draw_header(f, rows[0], screen);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(rows[1]);
    draw_categories(f, cols[0], screen.categories, screen.sel);

    if screen.session.current_card().is_some() {
        draw_review(f, cols[1], screen);
    } else {
        draw_empty(f, cols[1]);
    }

    let foot = Paragraph::new(Line::from(vec![
        Span::raw(" ↑/k ↓/j category "),
        Span::raw(" ←/h →/l card "),
        Span::raw(" space flip "),
        Span::raw(" y I know this "),
        Span::raw(" r reset progress "),
        Span::raw(" i reload data "),
        Span::raw(" q quit "),
    ]))
    .style(footer_style())
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(foot, rows[2]);
}

fn draw_header(f: &mut Frame, area: Rect, screen: &Screen) {
    let s = screen.session;
    let mut spans = vec![
        Span::raw(" Dzongkha Master ").style(title_style()),
        Span::raw("  Learn the language of Bhutan").style(hint_style()),
        Span::raw(format!(
            "    {} cards · {} mastered · {}%",
            s.len(),
            s.score(),
            s.mastery_percent()
        )),
    ];
    if screen.offline {
        spans.push(Span::raw("  (offline: sample cards)").style(hint_style()));
    }
    let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(p, area);
}

fn draw_categories(f: &mut Frame, area: Rect, categories: &[String], sel: usize) {
    let items: Vec<_> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let s = if i == sel {
                Line::from(format!("> {c}")).style(selected_style())
            } else {
                Line::from(format!("  {c}"))
            };
            ListItem::new(s)
        })
        .collect();

    let list = List::new(items).block(Block::default().title("Category").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn draw_empty(f: &mut Frame, area: Rect) {
    let p = Paragraph::new(vec![
        Line::from("Loading your learning journey...").style(title_style()),
        Line::from(""),
        Line::from("No cards to show. Press i to load sample data."),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().title("Review").borders(Borders::ALL));
    f.render_widget(p, area);
}

fn draw_review(f: &mut Frame, area: Rect, screen: &Screen) {
    let s = screen.session;
    let (Some(card), Some(pos)) = (s.current_card(), s.position()) else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(gauge_style())
        .ratio((s.progress_percent() / 100.0).clamp(0.0, 1.0))
        .label(format!("Card {} of {}", pos + 1, s.len()));
    f.render_widget(gauge, rows[0]);

    let badge = Line::from(Span::raw(format!(" {} ", card.category)).style(badge_style()));
    let text = if s.revealed() {
        vec![
            badge,
            Line::from(""),
            Line::from(card.english.as_str()).style(answer_style()),
            Line::from(card.pronunciation.as_str()).style(hint_style()),
            Line::from(card.dzongkha.as_str()),
            Line::from(""),
            Line::from("space: show Dzongkha").style(hint_style()),
        ]
    } else {
        vec![
            badge,
            Line::from(""),
            Line::from(card.dzongkha.as_str()).style(script_style()),
            Line::from(card.pronunciation.as_str()).style(hint_style()),
            Line::from(""),
            Line::from("space: reveal translation").style(hint_style()),
        ]
    };

    let mut block = Block::default().title("Flashcard").borders(Borders::ALL);
    if screen.animating {
        block = block.border_style(animating_style());
    }
    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(p, rows[1]);
}
