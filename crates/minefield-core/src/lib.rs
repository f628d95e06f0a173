//! Core data structures for the Minefield game.
//!
//! This crate holds the value types shared by field generation, game state
//! management, and rendering.
//!
//! # Overview
//!
//! - [`FieldSize`]: the validated side length `N` of the square field.
//! - [`Position`]: a cell coordinate `(x, y)`, `x` to the right and `y` upward.
//! - [`CellValue`]: the hidden content of a cell, either a mine or the number of
//!   adjacent mines.
//! - [`Grid`]: the `N×N` matrix of cell values.
//! - [`Ndc`]: a point in normalized device coordinates (`[-1, 1]` on both axes),
//!   the coordinate space shared by rendering and pointer input.
//!
//! # Examples
//!
//! ```
//! use minefield_core::{CellValue, FieldSize, Grid, Position};
//!
//! let size = FieldSize::new(3)?;
//! let grid = Grid::from_mines(size, [Position::new(0, 0)]);
//!
//! assert_eq!(grid[Position::new(0, 0)], CellValue::Mine);
//! assert_eq!(grid[Position::new(1, 1)], CellValue::Count(1));
//! assert_eq!(grid[Position::new(2, 2)], CellValue::EMPTY);
//! # Ok::<(), minefield_core::FieldSizeError>(())
//! ```

pub mod cell_value;
pub mod field_size;
pub mod grid;
pub mod ndc;
pub mod position;

pub use self::{
    cell_value::CellValue,
    field_size::{FieldSize, FieldSizeError},
    grid::{Grid, ParseGridError},
    ndc::Ndc,
    position::Position,
};
