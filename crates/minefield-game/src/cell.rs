use minefield_core::{CellValue, Ndc};

use crate::TextureSelector;

/// What the player currently sees for a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum DisplayState {
    /// Covered.
    #[default]
    Hidden,
    /// Uncovered; the underlying value is visible.
    Revealed,
    /// Covered and marked with a flag.
    Flagged,
}

impl DisplayState {
    /// Returns the state after a flag toggle.
    ///
    /// Only `Hidden` and `Flagged` swap; `Revealed` is left as is.
    #[must_use]
    pub const fn toggle_flag(self) -> Self {
        match self {
            Self::Hidden => Self::Flagged,
            Self::Flagged => Self::Hidden,
            Self::Revealed => Self::Revealed,
        }
    }
}

/// One renderable grid position.
///
/// The origin is the lower-left corner of the cell's quad in normalized device
/// coordinates; the quad's side length is shared by all cells of a
/// [`FieldView`](crate::FieldView).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    origin: Ndc,
    value: CellValue,
    display: DisplayState,
}

impl Cell {
    pub(crate) const fn new(origin: Ndc, value: CellValue) -> Self {
        Self {
            origin,
            value,
            display: DisplayState::Hidden,
        }
    }

    /// Returns the lower-left corner of the quad.
    #[must_use]
    pub const fn origin(&self) -> Ndc {
        self.origin
    }

    /// Returns the underlying value, whether or not it has been revealed.
    #[must_use]
    pub const fn value(&self) -> CellValue {
        self.value
    }

    /// Returns the display state.
    #[must_use]
    pub const fn display(&self) -> DisplayState {
        self.display
    }

    /// Returns the value if the cell has been revealed.
    #[must_use]
    pub const fn visible_value(&self) -> Option<CellValue> {
        match self.display {
            DisplayState::Revealed => Some(self.value),
            DisplayState::Hidden | DisplayState::Flagged => None,
        }
    }

    /// Returns the texture this cell is drawn with.
    #[must_use]
    pub const fn texture(&self) -> TextureSelector {
        match self.display {
            DisplayState::Hidden => TextureSelector::Covered,
            DisplayState::Flagged => TextureSelector::Flag,
            DisplayState::Revealed => TextureSelector::Revealed(self.value),
        }
    }

    /// Returns `true` if `point` lies strictly inside the quad.
    ///
    /// Both bounds are exclusive on both axes: a point exactly on the quad's
    /// lower-left edges (or its upper-right edges) is not inside.
    #[must_use]
    pub fn contains(&self, point: Ndc, scale: f32) -> bool {
        let Ndc { x, y } = self.origin;
        point.x > x && point.x < x + scale && point.y > y && point.y < y + scale
    }

    pub(crate) fn set_display(&mut self, display: DisplayState) {
        self.display = display;
    }
}
