//! Application state and key handling.

use super::input::move_cursor;
use crate::config::AppConfig;
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameController, MoveDescription, Position, SortOrder};
use tracing::{debug, instrument};

/// Main application state.
///
/// Holds the game controller plus presentation-only state. The UI re-reads
/// everything from here after each key press.
#[derive(Debug, Clone)]
pub struct App {
    game: GameController,
    cursor: Position,
    sort_order: SortOrder,
    show_locations: bool,
    notice: String,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            game: GameController::new(),
            cursor: Position::Center,
            sort_order: *config.sort_order(),
            show_locations: *config.show_locations(),
            notice: "Player X's turn.".to_string(),
        }
    }

    /// Gets the game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Gets the last action's message.
    pub fn notice(&self) -> &str {
        &self.notice
    }

    /// Flips the move list between ascending and descending.
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggle();
        self.notice = match self.sort_order {
            SortOrder::Ascending => "Move list: oldest first.".to_string(),
            SortOrder::Descending => "Move list: newest first.".to_string(),
        };
    }

    /// Move list entries in display order with their rendered text.
    pub fn move_list(&self) -> Vec<(MoveDescription, String)> {
        self.game
            .move_descriptions(self.sort_order)
            .with_locations(self.show_locations)
            .map(|entry| {
                let text = if entry.is_current {
                    format!("You are at move #{}", entry.move_index)
                } else {
                    format!("Go to {}", entry.label.to_lowercase())
                };
                (entry, text)
            })
            .collect()
    }

    /// Plays at `pos` and records what happened.
    fn play(&mut self, pos: Position) {
        self.cursor = pos;
        self.notice = match self.game.check_move(pos.to_index()) {
            Ok(_) => {
                self.game.play_move(pos.to_index());
                format!("Played {}.", pos.label())
            }
            Err(reason) => format!("{reason}."),
        };
    }

    fn jump(&mut self, moved: bool) {
        self.notice = if moved {
            format!("Showing move #{}.", self.game.current_move())
        } else {
            "No further history in that direction.".to_string()
        };
    }

    /// Handles a key press. Returns `false` when the app should exit.
    #[instrument(skip(self), fields(current_move = self.game.current_move()))]
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        debug!(?key, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.play(pos);
                }
            }
            KeyCode::Char(',') => {
                let moved = self.game.step_back();
                self.jump(moved);
            }
            KeyCode::Char('.') => {
                let moved = self.game.step_forward();
                self.jump(moved);
            }
            KeyCode::Home => {
                let moved = self.game.jump_to(0).is_ok();
                self.jump(moved);
            }
            KeyCode::End => {
                let latest = self.game.history().latest();
                let moved = self.game.jump_to(latest).is_ok();
                self.jump(moved);
            }
            KeyCode::Char('s') => self.toggle_sort_order(),
            KeyCode::Char('n') => {
                self.game.reset();
                self.cursor = Position::Center;
                self.notice = "New game. Player X's turn.".to_string();
            }
            _ => {}
        }

        true
    }
}
