//! Mine field generation.
//!
//! [`FieldGenerator`] fills a [`Grid`](minefield_core::Grid) with randomly
//! placed mines and the matching adjacency counts. Every field is derived from
//! a [`FieldSeed`], so any generated field can be reproduced exactly.
//!
//! # Mine placement
//!
//! [`MinePlacement::Independent`] samples every mine on its own. Two samples
//! may land on the same cell, in which case the field ends up with fewer mines
//! than requested; [`GeneratedField::missing_mines`] reports the shortfall.
//! [`MinePlacement::Distinct`] samples without replacement and only falls short
//! when more mines are requested than there are cells.
//!
//! # Examples
//!
//! ```
//! use minefield_core::{FieldSize, Position};
//! use minefield_generator::{FieldGenerator, FieldSeed, MinePlacement};
//!
//! let size = FieldSize::new(8)?;
//! let generator = FieldGenerator::new(MinePlacement::Distinct);
//! let seed = FieldSeed::from_phrase("minefield");
//!
//! let field = generator.generate_with_seed(size, 10, seed);
//! assert_eq!(field.effective_mines(), 10);
//! assert_eq!(field, generator.generate_with_seed(size, 10, seed));
//!
//! // Every cell around `safe` is mine-free, so `safe` itself is empty.
//! let safe = Position::new(3, 3);
//! let field = generator.generate_avoiding(size, 10, seed, safe);
//! assert!(field.grid[safe].is_empty());
//! # Ok::<(), minefield_core::FieldSizeError>(())
//! ```

mod generator;
mod seed;

pub use self::{
    generator::{FieldGenerator, GeneratedField, MinePlacement},
    seed::{FieldSeed, ParseSeedError, SeedSequence},
};
