//! The side length of the square field.

use std::fmt;

use crate::Position;

/// The side length `N` of an `N×N` field.
///
/// The value is validated at construction, so every `FieldSize` is in
/// `1..=FieldSize::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSize {
    n: u8,
}

/// Error returned when a field size is outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("field size must be between 1 and {}, got {size}", FieldSize::MAX)]
pub struct FieldSizeError {
    /// The rejected size.
    pub size: usize,
}

impl FieldSize {
    /// Largest supported side length.
    pub const MAX: u8 = 64;

    /// The classic 8×8 field.
    pub const DEFAULT: Self = Self { n: 8 };

    /// Creates a field size.
    ///
    /// # Errors
    ///
    /// Returns [`FieldSizeError`] if `n` is zero or greater than [`FieldSize::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use minefield_core::FieldSize;
    ///
    /// assert_eq!(FieldSize::new(8).map(FieldSize::get), Ok(8));
    /// assert!(FieldSize::new(0).is_err());
    /// assert!(FieldSize::new(65).is_err());
    /// ```
    pub const fn new(n: u8) -> Result<Self, FieldSizeError> {
        if n == 0 || n > Self::MAX {
            return Err(FieldSizeError { size: n as usize });
        }
        Ok(Self { n })
    }

    /// Returns the side length.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.n
    }

    /// Returns the number of cells, `N²`.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.n as usize * self.n as usize
    }

    /// Returns the side length of one cell in normalized device units, `2/N`.
    #[must_use]
    pub fn scale(self) -> f32 {
        2.0 / f32::from(self.n)
    }

    /// Returns `true` if `pos` lies inside the field.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x() < self.n && pos.y() < self.n
    }

    /// Iterates over every position, `x` outer and `y` inner.
    ///
    /// The iteration order matches [`Position::index`].
    pub fn positions(self) -> impl Iterator<Item = Position> + Clone {
        let n = self.n;
        (0..n).flat_map(move |x| (0..n).map(move |y| Position::new(x, y)))
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for FieldSize {
    type Error = FieldSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        let n = u8::try_from(value).map_err(|_| FieldSizeError { size: value })?;
        Self::new(n)
    }
}

impl fmt::Display for FieldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{n}x{n}", n = self.n)
    }
}
