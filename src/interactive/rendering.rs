//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::game::score_delta;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_round_panel(f, app, main_chunks[0]);
    render_history(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 WORD SCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_round_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Root word and score
            Constraint::Length(3), // Progress
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_root_word(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_root_word(f: &mut Frame, app: &App, area: Rect) {
    let spaced: String = app
        .root_word()
        .to_uppercase()
        .chars()
        .map(|c| format!("{c} "))
        .collect();

    let content = vec![
        Line::from(Span::styled(
            spaced.trim_end().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                app.score().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" / {}", app.max_score)),
        ]),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Root Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let found = app.found();
    let percent = if app.attainable == 0 {
        0
    } else {
        ((found * 100) / app.attainable).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Words Found "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{found}/{} words", app.attainable));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let words = app.accepted_words();
    let root_len = app.root_word().chars().count();
    let history_items: Vec<ListItem> = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let points = score_delta(root_len, word.chars().count());
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", words.len() - i),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:<12}", word.to_uppercase()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("+{points}"), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let history = List::new(history_items).block(
        Block::default()
            .title(" Your Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(history, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter a word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "Round {} | Enter: Submit | Ctrl+N: New Word | Esc: Quit",
        app.rounds_played
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
