//! The hidden mine/number matrix.

use std::{fmt, ops::Index, str::FromStr};

use crate::{CellValue, FieldSize, FieldSizeError, Position};

/// An `N×N` matrix of [`CellValue`]s.
///
/// A grid built through [`Grid::from_mines`] (or parsed from text) keeps the
/// adjacency invariant: every non-mine cell holds the number of mines in its
/// 8-neighbourhood, with out-of-field neighbours counting as zero.
///
/// # Text format
///
/// [`Display`](fmt::Display) and [`FromStr`] use one line per row, top row
/// (largest `y`) first, so the text reads the way the field is drawn. Mines
/// are `*`, safe cells are their count digit. When parsing, `.` may stand for
/// any safe cell; digits are checked against the recomputed counts.
///
/// ```
/// use minefield_core::{CellValue, Grid, Position};
///
/// let grid: Grid = "\
/// *..
/// ...
/// ..*
/// "
/// .parse()?;
///
/// assert_eq!(grid[Position::new(0, 2)], CellValue::Mine);
/// assert_eq!(grid[Position::new(1, 1)], CellValue::Count(2));
/// assert_eq!(grid.to_string(), "*10\n121\n01*");
/// # Ok::<(), minefield_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: FieldSize,
    cells: Vec<CellValue>,
}

/// Error returned when parsing a [`Grid`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ParseGridError {
    /// The text has no rows.
    #[display("grid text is empty")]
    Empty,
    /// The number of rows is not a supported field size.
    #[display("invalid field size: {_0}")]
    #[from]
    Size(FieldSizeError),
    /// A row does not have as many cells as there are rows.
    #[display("row {row} has {len} cells, expected {expected}")]
    RowLength {
        /// Zero-based row number in the text (top row is 0).
        row: usize,
        /// Number of cells found.
        len: usize,
        /// Number of cells required.
        expected: usize,
    },
    /// A character is neither `*`, `.`, nor a digit `0`-`8`.
    #[display("invalid cell character {ch:?} at {pos}")]
    InvalidChar {
        /// The offending character.
        ch: char,
        /// Where it was found.
        pos: Position,
    },
    /// A digit disagrees with the number of adjacent mines.
    #[display("cell {pos} is marked {marked} but has {actual} adjacent mines")]
    CountMismatch {
        /// Where the mismatch was found.
        pos: Position,
        /// The digit in the text.
        marked: u8,
        /// The recomputed count.
        actual: u8,
    },
}

impl Grid {
    /// Creates a grid with no mines.
    #[must_use]
    pub fn new(size: FieldSize) -> Self {
        Self {
            size,
            cells: vec![CellValue::EMPTY; size.cell_count()],
        }
    }

    /// Creates a grid with mines at `mines` and counts everywhere else.
    ///
    /// Repeated positions are placed once; positions outside the field are
    /// ignored.
    #[must_use]
    pub fn from_mines<I>(size: FieldSize, mines: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut grid = Self::new(size);
        for pos in mines {
            if size.contains(pos) {
                grid.cells[pos.index(size)] = CellValue::Mine;
            }
        }
        grid.recount();
        grid
    }

    /// Returns the field size.
    #[must_use]
    pub const fn size(&self) -> FieldSize {
        self.size
    }

    /// Returns the value at `pos`, or `None` outside the field.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<CellValue> {
        self.size
            .contains(pos)
            .then(|| self.cells[pos.index(self.size)])
    }

    /// Returns `true` if `pos` is inside the field and holds a mine.
    #[must_use]
    pub fn is_mine(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|value| value.is_mine())
    }

    /// Counts the mines in the 8-neighbourhood of `pos`.
    #[must_use]
    pub fn adjacent_mines(&self, pos: Position) -> u8 {
        let count = pos
            .neighbors(self.size)
            .filter(|&neighbor| self.is_mine(neighbor))
            .count();
        // at most 8 neighbours
        u8::try_from(count).unwrap_or(u8::MAX)
    }

    /// Returns the number of mines actually on the field.
    #[must_use]
    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|value| value.is_mine()).count()
    }

    /// Iterates over the mine positions, in index order.
    pub fn mines(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter_map(|(pos, value)| value.is_mine().then_some(pos))
    }

    /// Iterates over all cells in index order (`x` outer, `y` inner).
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellValue)> + '_ {
        self.size.positions().zip(self.cells.iter().copied())
    }

    fn recount(&mut self) {
        for pos in self.size.positions() {
            let index = pos.index(self.size);
            if !self.cells[index].is_mine() {
                self.cells[index] = CellValue::Count(self.adjacent_mines(pos));
            }
        }
    }
}

impl Index<Position> for Grid {
    type Output = CellValue;

    /// # Panics
    ///
    /// Panics if `pos` is outside the field.
    fn index(&self, pos: Position) -> &Self::Output {
        assert!(
            self.size.contains(pos),
            "position {pos} is outside a {} field",
            self.size
        );
        &self.cells[pos.index(self.size)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size.get();
        for (row, y) in (0..n).rev().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for x in 0..n {
                write!(f, "{}", self[Position::new(x, y)])?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();
        if rows.is_empty() {
            return Err(ParseGridError::Empty);
        }
        let size = FieldSize::try_from(rows.len())?;
        let n = size.get();

        let mut mines = Vec::new();
        let mut marked = Vec::new();
        for ((row, chars), y) in rows.iter().enumerate().zip((0..n).rev()) {
            if chars.len() != rows.len() {
                return Err(ParseGridError::RowLength {
                    row,
                    len: chars.len(),
                    expected: rows.len(),
                });
            }
            for (&ch, x) in chars.iter().zip(0..n) {
                let pos = Position::new(x, y);
                match ch {
                    '*' => mines.push(pos),
                    '.' => {}
                    _ => match count_digit(ch) {
                        Some(digit) => marked.push((pos, digit)),
                        None => return Err(ParseGridError::InvalidChar { ch, pos }),
                    },
                }
            }
        }

        let grid = Self::from_mines(size, mines);
        for (pos, digit) in marked {
            let actual = grid.adjacent_mines(pos);
            if actual != digit {
                return Err(ParseGridError::CountMismatch {
                    pos,
                    marked: digit,
                    actual,
                });
            }
        }
        Ok(grid)
    }
}

fn count_digit(ch: char) -> Option<u8> {
    ch.to_digit(10)
        .and_then(|digit| u8::try_from(digit).ok())
        .filter(|&digit| digit <= 8)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(FieldSize::new(4).unwrap());
        assert_eq!(grid.mine_count(), 0);
        assert!(grid.iter().all(|(_, value)| value == CellValue::EMPTY));
    }

    #[test]
    fn test_from_mines_counts_neighbors() {
        let size = FieldSize::new(4).unwrap();
        let grid = Grid::from_mines(size, [Position::new(1, 1), Position::new(2, 1)]);

        assert_eq!(grid[Position::new(0, 0)], CellValue::Count(1));
        assert_eq!(grid[Position::new(1, 0)], CellValue::Count(2));
        assert_eq!(grid[Position::new(3, 2)], CellValue::Count(1));
        assert_eq!(grid[Position::new(0, 3)], CellValue::EMPTY);
        assert_eq!(grid.mine_count(), 2);
    }

    #[test]
    fn test_from_mines_ignores_duplicates_and_out_of_field() {
        let size = FieldSize::new(3).unwrap();
        let grid = Grid::from_mines(
            size,
            [Position::new(0, 0), Position::new(0, 0), Position::new(5, 5)],
        );
        assert_eq!(grid.mine_count(), 1);
        assert_eq!(grid.mines().collect::<Vec<_>>(), [Position::new(0, 0)]);
    }

    #[test]
    fn test_is_mine() {
        let grid = Grid::from_mines(FieldSize::new(3).unwrap(), [Position::new(1, 2)]);
        assert!(grid.is_mine(Position::new(1, 2)));
        assert!(!grid.is_mine(Position::new(1, 1)));
        assert!(!grid.is_mine(Position::new(1, 3)));
    }

    #[test]
    fn test_get_out_of_field() {
        let grid = Grid::new(FieldSize::new(3).unwrap());
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert!(!grid.is_mine(Position::new(0, 3)));
    }

    #[test]
    fn test_parse_row_order_is_top_down() {
        let grid: Grid = "\
*.
..
"
        .parse()
        .unwrap();
        assert_eq!(grid[Position::new(0, 1)], CellValue::Mine);
        assert_eq!(grid[Position::new(0, 0)], CellValue::Count(1));
    }

    #[test]
    fn test_parse_checks_digits() {
        let err = "\
*2
..
"
        .parse::<Grid>()
        .unwrap_err();
        assert_eq!(
            err,
            ParseGridError::CountMismatch {
                pos: Position::new(1, 1),
                marked: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(ParseGridError::Empty));
        assert_eq!(
            "..\n.".parse::<Grid>(),
            Err(ParseGridError::RowLength {
                row: 1,
                len: 1,
                expected: 2,
            })
        );
        assert_eq!(
            ".x\n..".parse::<Grid>(),
            Err(ParseGridError::InvalidChar {
                ch: 'x',
                pos: Position::new(1, 1),
            })
        );
    }

    fn arbitrary_grid() -> impl Strategy<Value = Grid> {
        (1..=12u8).prop_flat_map(|n| {
            let size = FieldSize::new(n).unwrap();
            proptest::collection::vec(any::<bool>(), size.cell_count()).prop_map(move |bits| {
                let mines = size
                    .positions()
                    .zip(bits)
                    .filter_map(|(pos, bit)| bit.then_some(pos));
                Grid::from_mines(size, mines)
            })
        })
    }

    proptest! {
        #[test]
        fn counts_match_neighbor_mines(grid in arbitrary_grid()) {
            for (pos, value) in grid.iter() {
                if let CellValue::Count(count) = value {
                    let expected = pos
                        .neighbors(grid.size())
                        .filter(|&neighbor| grid[neighbor].is_mine())
                        .count();
                    prop_assert_eq!(usize::from(count), expected);
                }
            }
        }

        #[test]
        fn text_format_round_trips(grid in arbitrary_grid()) {
            let parsed: Grid = grid.to_string().parse().unwrap();
            prop_assert_eq!(parsed, grid);
        }
    }
}
