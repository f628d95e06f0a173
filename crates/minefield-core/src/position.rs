//! Cell coordinates.

use std::fmt;

use crate::FieldSize;

/// A cell coordinate on the field.
///
/// `x` grows to the right and `y` grows upward, the same orientation as
/// [`Ndc`](crate::Ndc). `(0, 0)` is the lower-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    x: u8,
    y: u8,
}

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Returns the horizontal coordinate.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the vertical coordinate.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the flat index of this position in a field of `size`.
    ///
    /// Indices are `x`-major: `index = x * N + y`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minefield_core::{FieldSize, Position};
    ///
    /// let size = FieldSize::new(8)?;
    /// assert_eq!(Position::new(0, 3).index(size), 3);
    /// assert_eq!(Position::new(2, 1).index(size), 17);
    /// # Ok::<(), minefield_core::FieldSizeError>(())
    /// ```
    #[must_use]
    pub const fn index(self, size: FieldSize) -> usize {
        self.x as usize * size.get() as usize + self.y as usize
    }

    /// Converts a flat index back into a position.
    ///
    /// Returns `None` if `index` is not below `size.cell_count()`.
    #[must_use]
    pub fn from_index(size: FieldSize, index: usize) -> Option<Self> {
        if index >= size.cell_count() {
            return None;
        }
        let n = usize::from(size.get());
        let x = u8::try_from(index / n).ok()?;
        let y = u8::try_from(index % n).ok()?;
        Some(Self::new(x, y))
    }

    /// Returns the position shifted by `(dx, dy)` if it stays inside the field.
    #[must_use]
    pub fn offset(self, dx: i8, dy: i8, size: FieldSize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let pos = Self::new(x, y);
        size.contains(pos).then_some(pos)
    }

    /// Iterates over the 8-neighbourhood of this position, clipped to the field.
    ///
    /// # Examples
    ///
    /// ```
    /// use minefield_core::{FieldSize, Position};
    ///
    /// let size = FieldSize::new(8)?;
    /// assert_eq!(Position::new(0, 0).neighbors(size).count(), 3);
    /// assert_eq!(Position::new(0, 4).neighbors(size).count(), 5);
    /// assert_eq!(Position::new(4, 4).neighbors(size).count(), 8);
    /// # Ok::<(), minefield_core::FieldSizeError>(())
    /// ```
    pub fn neighbors(self, size: FieldSize) -> impl Iterator<Item = Self> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy, size))
    }

    /// Returns `true` if `other` is this position or one of its neighbours.
    #[must_use]
    pub const fn is_within_one(self, other: Self) -> bool {
        self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
