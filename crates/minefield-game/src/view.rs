use minefield_core::{CellValue, FieldSize, Grid, Ndc, Position};

use crate::{Cell, DisplayState, DrawCell, hit_test};

/// The renderable form of a [`Grid`].
///
/// Holds one [`Cell`] per grid position, in the same order as the grid
/// (`index = x * N + y`), plus the quad side length shared by every cell.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    size: FieldSize,
    scale: f32,
    cells: Vec<Cell>,
}

impl FieldView {
    /// Builds a fresh view of `grid` with every cell hidden.
    ///
    /// Building from the same grid twice yields equal views; any display
    /// state of a previous view is discarded.
    #[must_use]
    pub fn build_from(grid: &Grid) -> Self {
        let size = grid.size();
        let cells = grid
            .iter()
            .map(|(pos, value)| Cell::new(Ndc::cell_origin(pos, size), value))
            .collect();
        Self {
            size,
            scale: size.scale(),
            cells,
        }
    }

    /// Returns the field size.
    #[must_use]
    pub const fn size(&self) -> FieldSize {
        self.size
    }

    /// Returns the side length of every quad (`2 / N`).
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns all cells in sequence order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `index`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell_at(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).and_then(|index| self.cell(index))
    }

    /// Returns the sequence index of `pos`.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.size.contains(pos).then(|| pos.index(self.size))
    }

    /// Returns the grid position of the cell at `index`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<Position> {
        Position::from_index(self.size, index)
    }

    /// Returns the index of the cell whose quad strictly contains `point`.
    #[must_use]
    pub fn locate(&self, point: Ndc) -> Option<usize> {
        hit_test::locate(point, &self.cells, self.scale)
    }

    /// Reveals the cell at `index` and returns its value.
    ///
    /// Returns `None` if the index is out of range or the cell is flagged.
    /// Revealing an already revealed cell is allowed and returns its value
    /// again.
    pub fn reveal(&mut self, index: usize) -> Option<CellValue> {
        let cell = self.cells.get_mut(index)?;
        if cell.display().is_flagged() {
            return None;
        }
        cell.set_display(DisplayState::Revealed);
        Some(cell.value())
    }

    /// Toggles the flag on the cell at `index` and returns the new state.
    ///
    /// Revealed cells keep their state.
    pub fn toggle_flag(&mut self, index: usize) -> Option<DisplayState> {
        let cell = self.cells.get_mut(index)?;
        let display = cell.display().toggle_flag();
        cell.set_display(display);
        Some(display)
    }

    /// Returns the number of flagged cells.
    #[must_use]
    pub fn flag_count(&self) -> usize {
        self.count_display(DisplayState::Flagged)
    }

    /// Returns the number of revealed cells.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.count_display(DisplayState::Revealed)
    }

    fn count_display(&self, display: DisplayState) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.display() == display)
            .count()
    }

    /// Issues one draw call per cell, in sequence order.
    pub fn draw<D>(&self, target: &mut D)
    where
        D: DrawCell + ?Sized,
    {
        for cell in &self.cells {
            target.draw_cell(cell.origin(), self.scale, cell.texture());
        }
    }
}
