//! Stateless UI rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{Cell, GameView, Player, Position};

/// Renders the whole screen from the app's current view.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + info
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(42), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, panes[0], app, &view);
    draw_info(frame, panes[1], app, &view);

    let help = Paragraph::new(
        "arrows move | enter/space select | 1-9 place | tab focus | o order | r restart | q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
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

    for (row, start) in [(0, 0), (2, 3), (4, 6)] {
        draw_row(frame, rows[row], app, view, start);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, view: &GameView, start: usize) {
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

    for (col, offset) in [(0, 0), (2, 1), (4, 2)] {
        draw_cell(frame, cols[col], app, view, start + offset);
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, view: &GameView, index: usize) {
    let cell = view.board().get(index).unwrap_or_default();
    let (text, mut style) = match cell {
        Cell::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if view.is_highlighted(index) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    let is_cursor = app.focus() == Focus::Board && Position::from_index(index) == Some(app.cursor());
    if is_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center within the 3-line cell
    let text = format!("\n{}", text);
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let mut lines = vec![Line::from(Span::styled(
        view.status_text(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))];
    if let Some(message) = app.message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[0]);

    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let mut style = Style::default();
            if entry.is_active() {
                style = style.add_modifier(Modifier::BOLD);
            }
            if app.focus() == Focus::History && row == app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(entry.label().to_string())).style(style)
        })
        .collect();

    let border_style = match app.focus() {
        Focus::History => Style::default().fg(Color::Cyan),
        Focus::Board => Style::default(),
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("Moves - {}", view.order_label())),
    );
    frame.render_widget(list, chunks[1]);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
