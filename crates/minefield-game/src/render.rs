use minefield_core::{CellValue, Ndc};

/// Which asset a cell is drawn with.
///
/// The mapping from selector to an actual texture, color, or glyph belongs to
/// the renderer, not to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum TextureSelector {
    /// A hidden cell.
    Covered,
    /// A flagged cell.
    Flag,
    /// A revealed cell showing its value.
    Revealed(CellValue),
}

impl TextureSelector {
    /// Number of distinct selectors.
    pub const COUNT: usize = 12;

    /// Every selector, in [`TextureSelector::asset_index`] order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Revealed(CellValue::Count(0)),
        Self::Revealed(CellValue::Count(1)),
        Self::Revealed(CellValue::Count(2)),
        Self::Revealed(CellValue::Count(3)),
        Self::Revealed(CellValue::Count(4)),
        Self::Revealed(CellValue::Count(5)),
        Self::Revealed(CellValue::Count(6)),
        Self::Revealed(CellValue::Count(7)),
        Self::Revealed(CellValue::Count(8)),
        Self::Revealed(CellValue::Mine),
        Self::Covered,
        Self::Flag,
    ];

    /// Returns a dense index in `0..COUNT`, suitable for an asset table.
    ///
    /// Counts `0..=8` map to themselves, then mine, covered, and flag.
    /// Counts above 8 cannot occur in a valid grid and share the index of 8.
    ///
    /// # Examples
    ///
    /// ```
    /// use minefield_core::CellValue;
    /// use minefield_game::TextureSelector;
    ///
    /// assert_eq!(TextureSelector::Revealed(CellValue::Count(3)).asset_index(), 3);
    /// assert_eq!(TextureSelector::Revealed(CellValue::Mine).asset_index(), 9);
    /// assert_eq!(TextureSelector::Flag.asset_index(), 11);
    /// ```
    #[must_use]
    pub fn asset_index(self) -> usize {
        match self {
            Self::Revealed(CellValue::Count(n)) => usize::from(n.min(8)),
            Self::Revealed(CellValue::Mine) => 9,
            Self::Covered => 10,
            Self::Flag => 11,
        }
    }
}

/// Something that can draw a single cell quad.
///
/// [`FieldView::draw`](crate::FieldView::draw) calls this once per cell per
/// frame, in cell sequence order.
pub trait DrawCell {
    /// Draws a `scale × scale` quad whose lower-left corner is `origin`.
    fn draw_cell(&mut self, origin: Ndc, scale: f32, texture: TextureSelector);
}
