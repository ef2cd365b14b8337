//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Max,
    Min,
}

impl Cell {
    /// Numeric value used when summing a line: MAX = +1, MIN = -1, empty = 0
    pub fn value(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Max => 1,
            Cell::Min => -1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Max => 'X',
            Cell::Min => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Max),
            'O' | 'o' | '0' => Some(Cell::Min),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Maximizes the terminal score; moves first from the empty board
    Max,
    /// Minimizes the terminal score
    Min,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    /// The mark this player leaves on the board
    pub fn mark(self) -> Cell {
        match self {
            Player::Max => Cell::Max,
            Player::Min => Cell::Min,
        }
    }

    /// +1 for MAX, -1 for MIN; a completed line sums to `3 * sign`
    pub fn sign(self) -> i32 {
        match self {
            Player::Max => 1,
            Player::Min => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Max => write!(f, "MAX"),
            Player::Min => write!(f, "MIN"),
        }
    }
}

/// A 3x3 grid mutated in place by the search.
///
/// Placements come from [`legal_moves`](super::legal_moves) and are undone by
/// the same caller, so a board handed to a search is always returned in the
/// state it arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Get the cell at a coordinate
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.row()][mv.col()]
    }

    /// Put `player`'s mark on an empty cell
    pub fn place(&mut self, mv: Move, player: Player) {
        debug_assert_eq!(self.get(mv), Cell::Empty, "placing on occupied cell {mv}");
        self.cells[mv.row()][mv.col()] = player.mark();
    }

    /// Undo a placement made by the same caller
    pub fn clear(&mut self, mv: Move) {
        debug_assert_ne!(self.get(mv), Cell::Empty, "clearing empty cell {mv}");
        self.cells[mv.row()][mv.col()] = Cell::Empty;
    }

    /// Place a mark, run `f` on the resulting position, then undo the mark.
    ///
    /// The undo happens whatever `f` returns, so the caller can break out of
    /// a sibling loop straight after without leaving the board mutated.
    pub fn with_move<R>(&mut self, mv: Move, player: Player, f: impl FnOnce(&mut Board) -> R) -> R {
        self.place(mv, player);
        let result = f(self);
        self.clear(mv);
        result
    }

    /// True iff no empty cell remains
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Infer whose turn it is from the piece counts, assuming MAX moved first.
    pub fn side_to_move(&self) -> Player {
        let (max_count, min_count) = Self::count_pieces(&self.cells);
        if max_count > min_count {
            Player::Min
        } else {
            Player::Max
        }
    }

    pub(crate) fn piece_counts(&self) -> (usize, usize) {
        Self::count_pieces(&self.cells)
    }

    fn count_pieces(cells: &[[Cell; 3]; 3]) -> (usize, usize) {
        cells
            .iter()
            .flatten()
            .fold((0, 0), |(max_count, min_count), cell| match cell {
                Cell::Max => (max_count + 1, min_count),
                Cell::Min => (max_count, min_count + 1),
                Cell::Empty => (max_count, min_count),
            })
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Parse 9 cell characters in row-major order; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            board.cells[i / 3][i % 3] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let (max_count, min_count) = Self::count_pieces(&board.cells);
        if max_count != min_count && max_count != min_count + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                max_count,
                min_count,
            });
        }

        board.check_reachable().map_err(|reason| crate::Error::UnreachablePosition {
            reason,
            context: s.to_string(),
        })?;

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
