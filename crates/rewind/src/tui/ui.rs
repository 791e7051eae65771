//! Stateless UI rendering for the game and its history.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{Board, GameStatus, Mark, Position, SortOrder, Square};

const HELP: &str =
    "Arrows+Enter or 1-9: play | ,/.: back/forward | Home/End | S: sort | N: new | Q: quit";

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(30)])
        .split(chunks[1]);

    let game = app.game();
    let highlighted = game.highlighted_cells();
    draw_board(frame, body[0], game.current_board(), app.cursor(), &highlighted);
    draw_history(frame, body[1], app);

    let status_style = match game.status() {
        GameStatus::Won { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        GameStatus::InProgress { .. } => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(Line::from(vec![
        Span::styled(game.status().to_string(), status_style),
        Span::raw("  "),
        Span::styled(app.notice().to_string(), Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    highlighted: &[Position],
) {
    let board_area = center_rect(area, 38, 11);

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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, highlighted, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    highlighted: &[Position],
    row: usize,
) {
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

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], board.get(pos), pos == cursor, highlighted.contains(&pos));
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, is_cursor: bool, is_winning: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(mark) => (format!(" {mark} "), mark_style(mark)),
    };

    let style = match (is_winning, is_cursor) {
        (true, true) => base_style
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED),
        (true, false) => base_style.bg(Color::Green).fg(Color::Black),
        (false, true) => base_style.bg(Color::White).fg(Color::Black),
        (false, false) => base_style,
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .move_list()
        .into_iter()
        .map(|(entry, text)| {
            let style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(text, style))
        })
        .collect();

    let title = match app.sort_order() {
        SortOrder::Ascending => "History (oldest first)",
        SortOrder::Descending => "History (newest first)",
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
