//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::app::{App, Screen};
use crate::games::tictactoe::{Board, Cell, Position};

const HELP_PLAYING: &str = "1-9 / arrows + Enter: Move | S: Settings | Q: Quit";
const HELP_SETTINGS: &str = "↑↓: Select | ←→ / Space: Toggle | Enter: Start | Q: Quit";
const HELP_FINISHED: &str = "Enter / R: Restart | Q: Quit";

/// Draws the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Strictly Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let cursor = (app.screen() == Screen::Playing).then_some(app.cursor());
    draw_board(frame, chunks[1], app.board(), cursor);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help_text = match app.screen() {
        Screen::Settings => HELP_SETTINGS,
        Screen::Playing => HELP_PLAYING,
        Screen::Finished => HELP_FINISHED,
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    match app.screen() {
        Screen::Settings => draw_settings(frame, area, app),
        Screen::Finished => draw_result(frame, area, app.result_message().unwrap_or("Game over.")),
        Screen::Playing => {}
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>) {
    let board_area = center_rect(area, 41, 11);

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

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, board, cursor, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, area, board, cursor, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, pos: Position) {
    let (text, base_style) = match board.get(pos) {
        Cell::Empty => (pos.number().to_string(), Style::default().fg(Color::DarkGray)),
        Cell::X => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::O => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle line of the three-line cell.
    let lines = vec![Line::from(""), Line::from(Span::styled(format!(" {} ", text), style))];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_settings(frame: &mut Frame, area: Rect, app: &App) {
    let popup = center_rect(area, 44, 8);
    frame.render_widget(Clear, popup);

    let settings = app.settings();
    let items = vec![
        ListItem::new(format!("First player plays    [ {} ]", settings.first_symbol)),
        ListItem::new(format!("Opponent              [ {} ]", settings.opponent_label())),
    ];

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("New game")
                .style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(app.focus().index()));
    frame.render_stateful_widget(list, popup, &mut list_state);
}

fn draw_result(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_rect(area, 40, 5);
    frame.render_widget(Clear, popup);

    let paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Result"));
    frame.render_widget(paragraph, popup);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
