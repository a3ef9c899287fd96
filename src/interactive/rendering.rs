//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Feedback, SOLUTION};
use crate::game::{Cell, GameStatus, Grid, KEYBOARD_ROWS, LetterHints, RowKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn feedback_style(feedback: Option<Feedback>) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match feedback {
        Some(Feedback::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Feedback::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Feedback::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn cell_span(cell: &Cell, kind: RowKind) -> Span<'static> {
    let letter = cell.letter.map_or(' ', |c| c.to_ascii_uppercase());
    match kind {
        RowKind::Final => Span::styled(format!(" {letter} "), feedback_style(cell.feedback)),
        RowKind::Active => Span::styled(format!("[{letter}]"), feedback_style(None)),
        RowKind::Blank => Span::styled("[ ]", Style::default().fg(Color::DarkGray)),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let grid = Grid::project(&app.game);
    let mut lines = Vec::new();

    if app.reveal {
        let current = app.game.current();
        lines.push(Line::from(Span::styled(
            format!(
                "solution: {SOLUTION}  guess: {:?} (slot {})",
                current.value(),
                current.number()
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }

    for row in &grid.rows {
        let mut spans = Vec::with_capacity(row.cells.len() * 2);
        for cell in &row.cells {
            spans.push(cell_span(cell, row.kind));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_statistics(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let max = app.stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
    let mut lines = vec![
        Line::from(format!("Played:   {}", app.stats.total_games)),
        Line::from(format!("Win rate: {:.0}%", app.stats.win_rate())),
        Line::from(""),
    ];

    for (slot, &count) in app.stats.guess_distribution.iter().enumerate() {
        let width = count * 16 / max;
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", slot + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let stats = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(stats, area);
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

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let hints = LetterHints::from_board(app.game.board());
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    [
                        Span::styled(
                            format!(" {} ", c.to_ascii_uppercase()),
                            feedback_style(hints.get(c)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let (status_text, color) = match app.game.status() {
        GameStatus::Empty | GameStatus::InProgress => (
            format!("Guess {} of {}", app.game.current().number() + 1, crate::core::TRIES),
            Color::Yellow,
        ),
        GameStatus::Won { slot } => (format!("Solved in {}!", slot + 1), Color::Green),
        GameStatus::Exhausted => ("Out of guesses".to_string(), Color::Red),
    };
    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Ctrl+R: Restart | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}
