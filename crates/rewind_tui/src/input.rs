//! Key mapping and cursor movement.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the cursor or the list selection.
    Navigate(Direction),
    /// Act on the focused item: place at the cursor or jump to the selection.
    Select,
    /// Place a mark directly at a cell index.
    PlaceAt(usize),
    /// Flip the move list order.
    ToggleOrder,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Start a new game.
    Restart,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action; unbound keys yield `None`.
pub fn map_key(key: KeyCode) -> Option<KeyAction> {
    let action = match key {
        KeyCode::Up => KeyAction::Navigate(Direction::Up),
        KeyCode::Down => KeyAction::Navigate(Direction::Down),
        KeyCode::Left => KeyAction::Navigate(Direction::Left),
        KeyCode::Right => KeyAction::Navigate(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Select,
        KeyCode::Char(c @ '1'..='9') => KeyAction::PlaceAt(c as usize - '1' as usize),
        KeyCode::Tab | KeyCode::BackTab => KeyAction::SwitchFocus,
        KeyCode::Char('o') => KeyAction::ToggleOrder,
        KeyCode::Char('r') => KeyAction::Restart,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_place_directly() {
        assert_eq!(map_key(KeyCode::Char('1')), Some(KeyAction::PlaceAt(0)));
        assert_eq!(map_key(KeyCode::Char('9')), Some(KeyAction::PlaceAt(8)));
        assert_eq!(map_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopRight, Direction::Right), Position::TopRight);
        assert_eq!(move_cursor(Position::BottomLeft, Direction::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::MiddleRight, Direction::Down), Position::BottomRight);
    }
}
