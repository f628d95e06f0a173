use minefield_core::FieldSize;
use minefield_generator::MinePlacement;

/// How the first primary click of a game is kept safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum FirstClickPolicy {
    /// Regenerate the whole field until the clicked cell holds no adjacent
    /// mines, giving up after `max_attempts` fields.
    Regenerate {
        /// Upper bound on the number of regenerated fields.
        max_attempts: u32,
    },
    /// Generate a single replacement field that keeps the 3×3 block around
    /// the clicked cell free of mines.
    SafeZone,
}

impl FirstClickPolicy {
    /// Default attempt bound for [`FirstClickPolicy::Regenerate`].
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;
}

impl Default for FirstClickPolicy {
    fn default() -> Self {
        Self::Regenerate {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// What input does after a mine has been revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum LostPolicy {
    /// Keep accepting reveals and flags; the game only records the loss.
    #[default]
    KeepPlaying,
    /// Ignore every press until the game is restarted.
    FreezeInput,
}

/// Parameters of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length of the square field.
    pub size: FieldSize,
    /// Number of mines to request from the generator.
    pub mine_count: usize,
    /// How the generator samples mine positions.
    pub placement: MinePlacement,
    /// First-click safety policy.
    pub first_click: FirstClickPolicy,
    /// Input policy after a loss.
    pub lost: LostPolicy,
}

impl GameConfig {
    /// Default number of requested mines.
    pub const DEFAULT_MINE_COUNT: usize = 8;

    /// Checks that the configuration can drive a game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroFirstClickAttempts`] if the first-click
    /// policy allows no regeneration at all.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let FirstClickPolicy::Regenerate { max_attempts: 0 } = self.first_click {
            return Err(ConfigError::ZeroFirstClickAttempts);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: FieldSize::DEFAULT,
            mine_count: Self::DEFAULT_MINE_COUNT,
            placement: MinePlacement::default(),
            first_click: FirstClickPolicy::default(),
            lost: LostPolicy::default(),
        }
    }
}

/// Errors raised when a game cannot be set up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum ConfigError {
    /// First-click regeneration was configured with zero attempts.
    #[display("first-click regeneration needs at least one attempt")]
    ZeroFirstClickAttempts,
    /// A prebuilt grid does not match the configured field size.
    #[display("grid is {actual} but the game is configured for {expected}")]
    GridSizeMismatch {
        /// Configured size.
        expected: FieldSize,
        /// Size of the supplied grid.
        actual: FieldSize,
    },
}
