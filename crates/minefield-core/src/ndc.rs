//! Normalized device coordinates.

use crate::{FieldSize, Position};

/// A point in normalized device coordinates.
///
/// Both axes span `[-1, 1]`; `x` grows to the right and `y` grows upward.
/// Cell origins, the quad scale, and the pointer all live in this space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ndc {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Ndc {
    /// The centre of the viewport.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Maps a pixel coordinate inside a `width × height` viewport.
    ///
    /// Pixel `y` grows downward, so it is flipped: the top-left pixel maps to
    /// `(-1, 1)` and the bottom-right corner to `(1, -1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minefield_core::Ndc;
    ///
    /// assert_eq!(Ndc::from_pixel(0.0, 0.0, 1000.0, 1000.0), Ndc::new(-1.0, 1.0));
    /// assert_eq!(Ndc::from_pixel(500.0, 500.0, 1000.0, 1000.0), Ndc::new(0.0, 0.0));
    /// assert_eq!(Ndc::from_pixel(1000.0, 250.0, 1000.0, 1000.0), Ndc::new(1.0, 0.5));
    /// ```
    #[must_use]
    pub fn from_pixel(px: f32, py: f32, width: f32, height: f32) -> Self {
        Self {
            x: (px / width) * 2.0 - 1.0,
            y: (1.0 - py / height) * 2.0 - 1.0,
        }
    }

    /// Returns the lower-left corner of the quad for `pos`.
    ///
    /// Each axis maps `[0, N)` onto `[-1, 1)` as `(axis / N) * 2 - 1`.
    #[must_use]
    pub fn cell_origin(pos: Position, size: FieldSize) -> Self {
        let n = f32::from(size.get());
        Self {
            x: (f32::from(pos.x()) / n) * 2.0 - 1.0,
            y: (f32::from(pos.y()) / n) * 2.0 - 1.0,
        }
    }

    /// Returns the cell this point falls into.
    ///
    /// Each axis is converted with `floor((coord * 0.5 + 0.5) * N)`. Points
    /// outside the field, including non-finite ones, give `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use minefield_core::{FieldSize, Ndc, Position};
    ///
    /// let size = FieldSize::new(8)?;
    /// assert_eq!(Ndc::new(-0.9, -0.9).to_position(size), Some(Position::new(0, 0)));
    /// assert_eq!(Ndc::new(0.1, 0.9).to_position(size), Some(Position::new(4, 7)));
    /// assert_eq!(Ndc::new(1.0, 0.0).to_position(size), None);
    /// # Ok::<(), minefield_core::FieldSizeError>(())
    /// ```
    #[must_use]
    pub fn to_position(self, size: FieldSize) -> Option<Position> {
        Some(Position::new(
            grid_axis(self.x, size)?,
            grid_axis(self.y, size)?,
        ))
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grid_axis(coord: f32, size: FieldSize) -> Option<u8> {
    let n = f32::from(size.get());
    let axis = ((coord * 0.5 + 0.5) * n).floor();
    // NaN fails both comparisons
    (axis >= 0.0 && axis < n).then_some(axis as u8)
}
