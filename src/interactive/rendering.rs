//! TUI rendering with ratatui
//!
//! Ladder board, messages and status for the puzzle interface.

use super::app::{App, InputMode, MessageStyle};
use crate::puzzle::Outcome;
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
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Ladder
            Constraint::Percentage(50), // Progress + messages
        ])
        .split(chunks[1]);

    render_ladder(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 WORD LADDER - Puzzle Mode")
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

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let last = session.len() - 1;
    let filling = app.input_mode == InputMode::Filling;

    let lines: Vec<Line> = session
        .render_slots()
        .into_iter()
        .enumerate()
        .map(|(i, slot)| {
            let style = if i == 0 || i == last {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if filling && i == session.cursor() {
                Style::default().fg(Color::Cyan)
            } else if session.slots()[i].is_some() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let marker = if filling && i == session.cursor() { "▶ " } else { "  " };
            Line::from(vec![
                Span::raw(format!("{:>2}. ", i + 1)),
                Span::raw(marker),
                Span::styled(slot.to_uppercase(), style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Ladder ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Fill progress
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_fill_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_fill_progress(f: &mut Frame, app: &App, area: Rect) {
    let interior = app.session.len().saturating_sub(2);
    let filled = app.session.cursor().saturating_sub(1).min(interior);
    let progress_pct = if interior == 0 {
        100
    } else {
        (filled * 100 / interior) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{filled}/{interior} words"));

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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished(Outcome::Win) => (
            " 🎉 YOU WIN! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Finished(Outcome::Lose) => (
            " You lose... | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Red,
        ),
        InputMode::Filling => (
            " Enter next word | Ctrl+Z or \"UNDO\" to undo ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let length_text = format!("Letters: {}", app.session.word_length());
    f.render_widget(
        Paragraph::new(length_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let moves_text = format!("Moves: {}", app.session.moves());
    f.render_widget(
        Paragraph::new(moves_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.input_mode {
        InputMode::Finished(_) => "q: Quit | n: New Game",
        InputMode::Filling => "Esc: Quit | Enter: Submit | Ctrl+Z: Undo | Ctrl+N: New",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
