//! Startup configuration parsed from the command line.

use clap::Parser;
use minefield_core::FieldSize;
use minefield_game::{ConfigError, FirstClickPolicy, GameConfig, GameController, LostPolicy};
use minefield_generator::{FieldSeed, MinePlacement};

const DEFAULT_WINDOW_SIDE: f32 = 1000.0;
const MIN_WINDOW_SIDE: f32 = 100.0;

#[derive(Debug, Clone, Parser)]
#[command(name = "minefield", author, version, about)]
pub struct Args {
    /// Side length of the square field.
    #[arg(long, value_name = "N", default_value = "8", value_parser = parse_field_size)]
    pub size: FieldSize,

    /// Number of mines to request; collisions may place fewer.
    #[arg(long, value_name = "COUNT", default_value_t = GameConfig::DEFAULT_MINE_COUNT)]
    pub mines: usize,

    /// Initial window width in logical pixels.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_WINDOW_SIDE)]
    pub width: f32,

    /// Initial window height in logical pixels.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_WINDOW_SIDE)]
    pub height: f32,

    /// Master seed (64 hex digits) for reproducible sessions.
    #[arg(long, value_name = "HEX", conflicts_with = "seed_phrase")]
    pub seed: Option<FieldSeed>,

    /// Derive the master seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    pub seed_phrase: Option<String>,

    /// Fields to try before giving up on an empty first cell.
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = FirstClickPolicy::DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub max_first_click_attempts: u32,

    /// Keep the 3×3 block around the first click free of mines instead of
    /// regenerating until it is empty.
    #[arg(long)]
    pub safe_first_click: bool,

    /// Never place two mines on the same cell.
    #[arg(long)]
    pub distinct_mines: bool,

    /// Ignore clicks after a mine has been revealed.
    #[arg(long)]
    pub freeze_on_loss: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ArgsError {
    #[display(
        "window must be at least {0}x{0} pixels, got {width}x{height}",
        MIN_WINDOW_SIDE
    )]
    WindowTooSmall { width: f32, height: f32 },
    #[display("{_0}")]
    #[from]
    Game(ConfigError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub game: GameConfig,
    pub window: [f32; 2],
    pub seed: Option<FieldSeed>,
}

impl Args {
    pub fn into_config(self) -> Result<AppConfig, ArgsError> {
        if !(is_usable_side(self.width) && is_usable_side(self.height)) {
            return Err(ArgsError::WindowTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        let game = GameConfig {
            size: self.size,
            mine_count: self.mines,
            placement: if self.distinct_mines {
                MinePlacement::Distinct
            } else {
                MinePlacement::Independent
            },
            first_click: if self.safe_first_click {
                FirstClickPolicy::SafeZone
            } else {
                FirstClickPolicy::Regenerate {
                    max_attempts: self.max_first_click_attempts,
                }
            },
            lost: if self.freeze_on_loss {
                LostPolicy::FreezeInput
            } else {
                LostPolicy::KeepPlaying
            },
        };
        game.validate()?;

        let seed = self
            .seed
            .or_else(|| self.seed_phrase.as_deref().map(FieldSeed::from_phrase));

        Ok(AppConfig {
            game,
            window: [self.width, self.height],
            seed,
        })
    }
}

impl AppConfig {
    pub fn start_game(&self) -> Result<GameController, ConfigError> {
        match self.seed {
            Some(seed) => GameController::with_seed(self.game, seed),
            None => GameController::new(self.game),
        }
    }
}

fn is_usable_side(px: f32) -> bool {
    px.is_finite() && px >= MIN_WINDOW_SIDE
}

fn parse_field_size(s: &str) -> Result<FieldSize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a field size"))?;
    FieldSize::try_from(n).map_err(|err| err.to_string())
}
