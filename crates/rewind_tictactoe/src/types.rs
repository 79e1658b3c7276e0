//! Core domain types for the board.

use crate::error::BoardParseError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the side to move when the game sits at `step`.
    ///
    /// X moves on even steps, O on odd steps.
    pub fn to_move_at(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }

    /// Returns the side whose move produced `step`.
    ///
    /// Step 0 is the initial position and has no mover.
    pub fn moved_into(step: usize) -> Option<Self> {
        step.checked_sub(1).map(Self::to_move_at)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Returns true for an empty cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(Player::X) => 'X',
            Cell::Marked(Player::O) => 'O',
        }
    }
}

/// 3x3 board, immutable once built.
///
/// Placing a mark yields a new board; the original is left untouched so
/// history snapshots can hold boards by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a raw index, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    #[instrument(level = "trace", skip(self))]
    pub fn with_mark(&self, pos: Position, player: Player) -> Board {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::Marked(player);
        Board { cells }
    }

    /// Positions where this board and `other` disagree.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.cell(*pos) != other.cell(*pos))
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let symbols: Vec<String> = chunk.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cell symbols: `X`, `O`, and `.`, `-` or `_` for empty.
    ///
    /// Whitespace, `|` and `/` are treated as row separators and skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;

        for (offset, ch) in s.chars().enumerate() {
            let cell = match ch {
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                'X' | 'x' => Cell::Marked(Player::X),
                'O' | 'o' => Cell::Marked(Player::O),
                '.' | '-' | '_' => Cell::Empty,
                other => {
                    return Err(BoardParseError::InvalidCharacter {
                        character: other,
                        offset,
                    });
                }
            };
            if count == cells.len() {
                return Err(BoardParseError::WrongLength { found: count + 1 });
            }
            cells[count] = cell;
            count += 1;
        }

        if count != cells.len() {
            return Err(BoardParseError::WrongLength { found: count });
        }
        Ok(Board { cells })
    }
}
