//! Minefield game session management.
//!
//! This crate turns a generated [`Grid`](minefield_core::Grid) into something a
//! player can interact with:
//!
//! - [`FieldView`]: the renderable cell sequence with per-cell display state.
//! - [`hit_test`]: pointer-to-cell resolution in normalized device coordinates.
//! - [`DrawCell`] / [`TextureSelector`]: the contract with whatever draws the
//!   cells.
//! - [`GameController`]: the session state machine (first-click safety, reveal,
//!   flagging, loss).
//!
//! # Examples
//!
//! ```
//! use minefield_core::{Grid, Ndc};
//! use minefield_game::{GameConfig, GameController, GameStatus, PointerButton};
//! use minefield_generator::FieldSeed;
//!
//! let grid: Grid = "\
//! *...
//! ....
//! ....
//! ....
//! "
//! .parse()?;
//! let config = GameConfig {
//!     size: grid.size(),
//!     mine_count: 1,
//!     ..GameConfig::default()
//! };
//! let mut game = GameController::from_grid(config, grid, FieldSeed::from_phrase("doc"))?;
//!
//! // Click the lower-right cell, which has no adjacent mines.
//! game.pointer_moved(Ndc::new(0.75, -0.75));
//! let outcome = game.press(PointerButton::Primary);
//! assert!(outcome.is_revealed());
//! assert_eq!(game.status(), GameStatus::Playing);
//!
//! // Flag the mine in the upper-left corner.
//! game.pointer_moved(Ndc::new(-0.75, 0.75));
//! assert!(game.press(PointerButton::Secondary).is_flagged());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod cell;
mod config;
mod controller;
mod render;
mod view;

pub use self::{
    cell::{Cell, DisplayState},
    config::{ConfigError, FirstClickPolicy, GameConfig, LostPolicy},
    controller::{ClickOutcome, FirstClickResolution, GameController, GameStatus, PointerButton},
    render::{DrawCell, TextureSelector},
    view::FieldView,
};
