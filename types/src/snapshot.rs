use std::{fmt, str::FromStr};

use enum_map::EnumMap;

use crate::{Cell, Mark, Square, ALL_SQUARES};

/// The full board at one point in a game. Placing a mark yields a new
/// snapshot; an existing one is never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    cells: [Cell; 9],
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSnapshotError {
    #[display("expected 9 cells, found {found}")]
    WrongLength { found: usize },
    #[display("unexpected cell character {ch:?}")]
    BadCell { ch: char },
}

impl Snapshot {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; 9],
    };

    #[must_use]
    pub const fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    #[must_use]
    #[inline(always)]
    pub const fn cell(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    #[must_use]
    pub fn mark_on(&self, square: Square) -> Option<Mark> {
        self.cell(square).mark()
    }

    /// Copy of this snapshot with `mark` on `square`. The square is expected
    /// to be empty; callers check this before placing.
    #[must_use]
    pub fn with_mark(&self, square: Square, mark: Mark) -> Self {
        debug_assert!(self.cell(square).is_empty(), "{square} already marked");
        let mut cells = self.cells;
        cells[square.index()] = Cell::Marked(mark);
        Self { cells }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        ALL_SQUARES
            .into_iter()
            .filter(|sq| self.cell(*sq).is_empty())
    }

    /// Number of marks each player has on the board.
    #[must_use]
    pub fn counts(&self) -> EnumMap<Mark, usize> {
        let mut counts = EnumMap::default();
        for mark in self.cells.iter().filter_map(|c| c.mark()) {
            counts[mark] += 1;
        }
        counts
    }

    /// Squares whose cell differs between `self` and `other`.
    pub fn diff<'a>(&'a self, other: &'a Snapshot) -> impl Iterator<Item = Square> + 'a {
        ALL_SQUARES
            .into_iter()
            .filter(|sq| self.cell(*sq) != other.cell(*sq))
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match self.cells[row * 3 + col] {
                    Cell::Empty => write!(f, "_")?,
                    Cell::Marked(mark) => write!(f, "{mark}")?,
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells written `X`, `O` and `_` (or `.`), ignoring whitespace.
impl FromStr for Snapshot {
    type Err = ParseSnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(ParseSnapshotError::WrongLength { found: chars.len() });
        }
        let mut cells = [Cell::Empty; 9];
        for (cell, ch) in cells.iter_mut().zip(chars) {
            *cell = match ch {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '_' | '.' => Cell::Empty,
                ch => return Err(ParseSnapshotError::BadCell { ch }),
            };
        }
        Ok(Self { cells })
    }
}
