use minefield_core::{FieldSize, Grid, Position};
use rand::{Rng, seq::index};

use crate::FieldSeed;

/// How mine positions are sampled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum MinePlacement {
    /// Each mine picks a uniformly random cell on its own.
    ///
    /// Nothing prevents two mines from picking the same cell, so the field may
    /// end up with fewer mines than requested.
    #[default]
    Independent,
    /// Mines are sampled without replacement.
    Distinct,
}

/// A generated field together with what it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedField {
    /// The mine/number grid.
    pub grid: Grid,
    /// The seed that reproduces `grid`.
    pub seed: FieldSeed,
    /// The number of mines that was asked for.
    pub requested_mines: usize,
}

impl GeneratedField {
    /// Returns the number of mines actually on the field.
    #[must_use]
    pub fn effective_mines(&self) -> usize {
        self.grid.mine_count()
    }

    /// Returns how many requested mines did not make it onto the field.
    ///
    /// With [`MinePlacement::Independent`] this counts colliding samples.
    #[must_use]
    pub fn missing_mines(&self) -> usize {
        self.requested_mines.saturating_sub(self.effective_mines())
    }
}

/// Generates mine fields.
///
/// The generator itself is stateless; all randomness comes from the
/// [`FieldSeed`] passed to each call (or drawn by [`FieldGenerator::generate`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldGenerator {
    placement: MinePlacement,
}

impl FieldGenerator {
    /// Creates a generator using `placement`.
    #[must_use]
    pub const fn new(placement: MinePlacement) -> Self {
        Self { placement }
    }

    /// Returns the placement policy.
    #[must_use]
    pub const fn placement(&self) -> MinePlacement {
        self.placement
    }

    /// Generates a field from a fresh random seed.
    #[must_use]
    pub fn generate(&self, size: FieldSize, mine_count: usize) -> GeneratedField {
        self.generate_with_seed(size, mine_count, FieldSeed::random())
    }

    /// Generates the field determined by `seed`.
    ///
    /// `mine_count` may exceed the number of cells; the call still returns a
    /// valid grid, just with fewer mines than requested.
    #[must_use]
    pub fn generate_with_seed(
        &self,
        size: FieldSize,
        mine_count: usize,
        seed: FieldSeed,
    ) -> GeneratedField {
        let candidates: Vec<Position> = size.positions().collect();
        self.build(size, mine_count, seed, &candidates)
    }

    /// Generates a field with no mine in the 3×3 block centred on `safe`.
    ///
    /// `safe` is therefore guaranteed to hold
    /// [`CellValue::EMPTY`](minefield_core::CellValue::EMPTY). On fields too
    /// small to leave room outside the block, no mines are placed at all.
    #[must_use]
    pub fn generate_avoiding(
        &self,
        size: FieldSize,
        mine_count: usize,
        seed: FieldSeed,
        safe: Position,
    ) -> GeneratedField {
        let candidates: Vec<Position> = size
            .positions()
            .filter(|pos| !pos.is_within_one(safe))
            .collect();
        self.build(size, mine_count, seed, &candidates)
    }

    fn build(
        &self,
        size: FieldSize,
        mine_count: usize,
        seed: FieldSeed,
        candidates: &[Position],
    ) -> GeneratedField {
        let mut rng = seed.rng();
        let mines = place_mines(&mut rng, self.placement, candidates, mine_count);
        GeneratedField {
            grid: Grid::from_mines(size, mines),
            seed,
            requested_mines: mine_count,
        }
    }
}

fn place_mines<R>(
    rng: &mut R,
    placement: MinePlacement,
    candidates: &[Position],
    mine_count: usize,
) -> Vec<Position>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Vec::new();
    }
    match placement {
        MinePlacement::Independent => (0..mine_count)
            .map(|_| candidates[rng.random_range(0..candidates.len())])
            .collect(),
        MinePlacement::Distinct => {
            let amount = mine_count.min(candidates.len());
            index::sample(rng, candidates.len(), amount)
                .into_iter()
                .map(|i| candidates[i])
                .collect()
        }
    }
}
