use crate::game::Side;
use crate::session::Session;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

pub fn render(frame: &mut Frame, session: &Session, cursor: usize, message: &Option<String>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Turn / phase / captures
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, cursor, chunks[1]);
    render_info(frame, session, chunks[2]);
    render_status(frame, session, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, session: &Session, area: Rect) {
    let text = format!("{}  |  {}", session.name(), session.mode().label());
    let header = Paragraph::new(text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tigers and Goats"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, session: &Session, cursor: usize, area: Rect) {
    let state = session.state();
    let cursor = (!state.is_terminal()).then_some(cursor);
    let board_widget =
        Paragraph::new(board_lines(state.board(), cursor, state.selected())).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_info(frame: &mut Frame, session: &Session, area: Rect) {
    let state = session.state();
    let turn_color = match state.turn() {
        Side::Goat => Color::White,
        Side::Tiger => Color::Yellow,
    };
    let line = Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(
            state.turn().name(),
            Style::default().fg(turn_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  |  Phase: {}  |  Goats captured: {}",
            state.phase_label(),
            state.goats_captured()
        )),
    ]);

    let info = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(info, area);
}

fn render_status(frame: &mut Frame, session: &Session, message: &Option<String>, area: Rect) {
    // A finished game always shows its result.
    let (text, color) = match session.state().status() {
        Some(status) => (status, Color::Green),
        None => (message.as_deref().unwrap_or(""), Color::Yellow),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Arrows/hjkl: Move  |  Enter/Space: Select  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Controls"),
    );

    frame.render_widget(controls, area);
}
