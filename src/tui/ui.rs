//! Stateless frame rendering.
//!
//! Everything here is a pure function of the current [`App`] state;
//! each frame is rebuilt from the engine snapshot.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::engine::{Cell, Outcome, Player, Position};

use super::app::App;

/// Renders one frame from the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(3), // status
            Constraint::Min(11),   // board
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    draw_status(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(vec![
        Line::styled(
            "Tic Tac Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::styled("local 2-player", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let outcome = app.game().outcome();
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], app, &outcome, &Position::ALL[0..3]);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, &outcome, &Position::ALL[3..6]);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, &outcome, &Position::ALL[6..9]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, outcome: &Outcome, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, outcome, positions[0]);
    draw_vertical_separator(frame, cols[1]);
    draw_cell(frame, cols[2], app, outcome, positions[1]);
    draw_vertical_separator(frame, cols[3]);
    draw_cell(frame, cols[4], app, outcome, positions[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, outcome: &Outcome, position: Position) {
    let cell = app.game().board().cell(position);

    let (symbol, mut style) = match cell {
        Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = outcome
        .winning_line()
        .is_some_and(|line| line.contains(&position.index()));

    if on_winning_line {
        style = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
    } else if outcome.is_over() {
        // The grid's version of a disabled button.
        style = style.add_modifier(Modifier::DIM);
    }

    if position == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::styled(symbol, style)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(vec![
        Line::from(format!("Selected: {}", app.cursor_label())),
        Line::styled(
            "arrows or 1-9 select, Enter marks, r restarts, q quits",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
