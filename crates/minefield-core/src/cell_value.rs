//! The hidden content of a single cell.

use std::fmt;

/// What a cell really contains, independent of what the player sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellValue {
    /// The cell holds a mine.
    Mine,
    /// The cell is safe; the payload is the number of mines among its
    /// neighbours (`0..=8`).
    Count(u8),
}

impl CellValue {
    /// A safe cell with no adjacent mines.
    pub const EMPTY: Self = Self::Count(0);

    /// Every value a cell can take, counts first and the mine last.
    pub const ALL: [Self; 10] = [
        Self::Count(0),
        Self::Count(1),
        Self::Count(2),
        Self::Count(3),
        Self::Count(4),
        Self::Count(5),
        Self::Count(6),
        Self::Count(7),
        Self::Count(8),
        Self::Mine,
    ];

    /// Returns `true` for a safe cell without adjacent mines.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Count(0))
    }

    /// Returns the adjacent mine count, or `None` for a mine.
    #[must_use]
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Count(n) => Some(n),
        }
    }

    /// Returns the character used by the grid text format.
    ///
    /// Mines are `*`, counts are their decimal digit. Counts above 9 cannot
    /// come from a grid and are shown as `+`.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Mine => '*',
            Self::Count(n @ 0..=9) => (b'0' + n) as char,
            Self::Count(_) => '+',
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
