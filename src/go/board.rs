//! Go board: a square grid of optional stones

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Smallest board side length accepted by [`GoBoard::new`]
pub const MIN_BOARD_SIZE: usize = 2;

/// Errors that can occur while building or addressing a board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid board size {0}: a Go board needs at least 2 lines")]
    InvalidSize(usize),

    #[error("Position {col}:{row} is outside a {size}x{size} board")]
    OutOfRange { col: usize, row: usize, size: usize },

    #[error("Malformed board diagram: {0}")]
    Malformed(String),

    #[error("Unknown stone: {0}")]
    UnknownStone(String),
}

pub type BoardResult<T> = Result<T, BoardError>;

/// A Go stone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    /// The other color
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    fn diagram_char(self) -> char {
        match self {
            Stone::Black => 'B',
            Stone::White => 'W',
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "BLACK"),
            Stone::White => write!(f, "WHITE"),
        }
    }
}

impl FromStr for Stone {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("black") {
            Ok(Stone::Black)
        } else if s.eq_ignore_ascii_case("white") {
            Ok(Stone::White)
        } else {
            Err(BoardError::UnknownStone(s.to_string()))
        }
    }
}

/// A `size`×`size` Go board addressed by `(col, row)`, both zero-based
///
/// Every cell holds at most one stone. Coordinates outside the board are
/// rejected with [`BoardError::OutOfRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoBoard {
    size: usize,
    /// Column-major: cell `(col, row)` lives at `col * size + row`
    cells: Vec<Option<Stone>>,
}

impl GoBoard {
    /// Create an empty board
    pub fn new(size: usize) -> BoardResult<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(GoBoard {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Parse a text diagram, one string per row from the top
    ///
    /// `B`/`X` is black, `W`/`O` is white, `.`/`+` is an empty point.
    /// The diagram must be square.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> BoardResult<Self> {
        let mut board = GoBoard::new(rows.len())?;

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != board.size {
                return Err(BoardError::Malformed(format!(
                    "row {} has {} points, expected {}",
                    row, width, board.size
                )));
            }

            for (col, ch) in line.chars().enumerate() {
                let stone = match ch {
                    'B' | 'X' => Stone::Black,
                    'W' | 'O' => Stone::White,
                    '.' | '+' => continue,
                    other => {
                        return Err(BoardError::Malformed(format!(
                            "unexpected '{}' at {}:{}",
                            other, col, row
                        )))
                    }
                };
                board.put(col, row, stone)?;
            }
        }

        Ok(board)
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Place a stone, overwriting whatever is there
    pub fn put(&mut self, col: usize, row: usize, stone: Stone) -> BoardResult<()> {
        let idx = self.index(col, row)?;
        self.cells[idx] = Some(stone);
        Ok(())
    }

    /// Remove whatever stone is at `(col, row)`
    pub fn clear(&mut self, col: usize, row: usize) -> BoardResult<()> {
        let idx = self.index(col, row)?;
        self.cells[idx] = None;
        Ok(())
    }

    /// The stone at `(col, row)`, if any
    pub fn get(&self, col: usize, row: usize) -> BoardResult<Option<Stone>> {
        let idx = self.index(col, row)?;
        Ok(self.cells[idx])
    }

    /// Every point as `(col, row, stone)`, column by column
    pub fn points(&self) -> impl Iterator<Item = (usize, usize, Option<Stone>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &stone)| (idx / self.size, idx % self.size, stone))
    }

    /// Number of stones on the board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    fn index(&self, col: usize, row: usize) -> BoardResult<usize> {
        if col >= self.size || row >= self.size {
            return Err(BoardError::OutOfRange {
                col,
                row,
                size: self.size,
            });
        }
        Ok(col * self.size + row)
    }
}

impl fmt::Display for GoBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = self.cells[col * self.size + row].map_or('.', Stone::diagram_char);
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
