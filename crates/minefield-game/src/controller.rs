use minefield_core::{CellValue, Grid, Ndc, Position};
use minefield_generator::{FieldGenerator, FieldSeed, GeneratedField, SeedSequence};

use crate::{
    ConfigError, DisplayState, DrawCell, FieldView, FirstClickPolicy, GameConfig,
};

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// A field exists but no primary click has landed yet.
    AwaitingFirstClick,
    /// The first click has been resolved.
    Playing,
    /// A mine has been revealed.
    Lost,
}

/// Mouse buttons the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PointerButton {
    /// Reveal.
    Primary,
    /// Toggle a flag.
    Secondary,
}

/// The effect of a single [`GameController::press`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ClickOutcome {
    /// The pointer was not strictly inside any cell.
    Missed,
    /// Input is frozen after a loss.
    Ignored,
    /// A safe cell was revealed.
    Revealed {
        /// Sequence index of the cell.
        index: usize,
        /// The revealed value.
        value: CellValue,
    },
    /// A mine was revealed.
    Exploded {
        /// Sequence index of the cell.
        index: usize,
    },
    /// A primary click hit a flagged cell, which stays covered.
    BlockedByFlag {
        /// Sequence index of the cell.
        index: usize,
    },
    /// A flag was placed.
    Flagged {
        /// Sequence index of the cell.
        index: usize,
    },
    /// A flag was removed.
    Unflagged {
        /// Sequence index of the cell.
        index: usize,
    },
    /// A secondary click hit an already revealed cell.
    Unchanged {
        /// Sequence index of the cell.
        index: usize,
    },
}

/// How the first primary click of a game was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum FirstClickResolution {
    /// The pointer was outside the field; the first click is still pending.
    OutsideField,
    /// The clicked cell already had no adjacent mines.
    AlreadyEmpty,
    /// A field with an empty clicked cell was found.
    Regenerated {
        /// Number of fields generated, including the successful one.
        attempts: u32,
    },
    /// No attempt produced an empty clicked cell; the last field was kept.
    Exhausted {
        /// Number of fields generated.
        attempts: u32,
    },
    /// A field with a mine-free 3×3 block around the click was generated.
    SafeZone,
}

/// Drives a single game session.
///
/// The controller owns the grid and its [`FieldView`] and keeps them in sync:
/// whenever the grid is replaced, the view is rebuilt from it before any other
/// call can observe either.
///
/// Every field is generated from a seed drawn from a [`SeedSequence`], so a
/// session started with [`GameController::with_seed`] replays identically.
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    generator: FieldGenerator,
    seeds: SeedSequence,
    grid: Grid,
    field_seed: Option<FieldSeed>,
    view: FieldView,
    pointer: Ndc,
    status: GameStatus,
    first_click: Option<FirstClickResolution>,
}

impl GameController {
    /// Starts a session with a random master seed.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, FieldSeed::random())
    }

    /// Starts a session whose fields all derive from `master`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`GameConfig::validate`].
    pub fn with_seed(config: GameConfig, master: FieldSeed) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = FieldGenerator::new(config.placement);
        let mut seeds = SeedSequence::new(master);
        let field =
            generator.generate_with_seed(config.size, config.mine_count, seeds.next_seed());
        log_field(&field);
        Ok(Self::from_parts(
            config,
            generator,
            seeds,
            field.grid,
            Some(field.seed),
        ))
    }

    /// Starts a session on a prebuilt grid.
    ///
    /// Fields generated later (first-click regeneration, restarts) derive
    /// from `master`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`GameConfig::validate`] or the grid
    /// size differs from `config.size`.
    pub fn from_grid(
        config: GameConfig,
        grid: Grid,
        master: FieldSeed,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.size() != config.size {
            return Err(ConfigError::GridSizeMismatch {
                expected: config.size,
                actual: grid.size(),
            });
        }
        let generator = FieldGenerator::new(config.placement);
        Ok(Self::from_parts(
            config,
            generator,
            SeedSequence::new(master),
            grid,
            None,
        ))
    }

    fn from_parts(
        config: GameConfig,
        generator: FieldGenerator,
        seeds: SeedSequence,
        grid: Grid,
        field_seed: Option<FieldSeed>,
    ) -> Self {
        let view = FieldView::build_from(&grid);
        Self {
            config,
            generator,
            seeds,
            grid,
            field_seed,
            view,
            pointer: Ndc::ORIGIN,
            status: GameStatus::AwaitingFirstClick,
            first_click: None,
        }
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the current grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the renderable view of the current grid.
    #[must_use]
    pub const fn view(&self) -> &FieldView {
        &self.view
    }

    /// Returns the seed of the current field, if it was generated.
    #[must_use]
    pub const fn field_seed(&self) -> Option<FieldSeed> {
        self.field_seed
    }

    /// Returns the master seed of the session.
    #[must_use]
    pub const fn master_seed(&self) -> FieldSeed {
        self.seeds.master()
    }

    /// Returns the last known pointer position.
    #[must_use]
    pub const fn pointer(&self) -> Ndc {
        self.pointer
    }

    /// Returns how the first click was handled, once it has been.
    #[must_use]
    pub const fn first_click_resolution(&self) -> Option<FirstClickResolution> {
        self.first_click
    }

    /// Returns `true` if presses are currently ignored.
    #[must_use]
    pub fn is_input_frozen(&self) -> bool {
        self.status.is_lost() && self.config.lost.is_freeze_input()
    }

    /// Returns the number of mines on the field minus placed flags.
    ///
    /// Negative when more flags than mines have been placed.
    #[must_use]
    pub fn remaining_mines(&self) -> i64 {
        let mines = i64::try_from(self.grid.mine_count()).unwrap_or(i64::MAX);
        let flags = i64::try_from(self.view.flag_count()).unwrap_or(i64::MAX);
        mines.saturating_sub(flags)
    }

    /// Records the pointer position for subsequent presses.
    pub fn pointer_moved(&mut self, point: Ndc) {
        self.pointer = point;
    }

    /// Handles a button press at the last recorded pointer position.
    pub fn press(&mut self, button: PointerButton) -> ClickOutcome {
        if self.is_input_frozen() {
            return ClickOutcome::Ignored;
        }
        match button {
            PointerButton::Primary => self.reveal_at_pointer(),
            PointerButton::Secondary => self.toggle_flag_at_pointer(),
        }
    }

    /// Discards the current field and starts over with a new one.
    pub fn restart(&mut self) {
        let field = self.generator.generate_with_seed(
            self.config.size,
            self.config.mine_count,
            self.seeds.next_seed(),
        );
        log_field(&field);
        self.install(field);
        self.status = GameStatus::AwaitingFirstClick;
        self.first_click = None;
        log::info!("new game started");
    }

    /// Draws every cell of the current view.
    pub fn draw<D>(&self, target: &mut D)
    where
        D: DrawCell + ?Sized,
    {
        self.view.draw(target);
    }

    fn reveal_at_pointer(&mut self) -> ClickOutcome {
        if self.status.is_awaiting_first_click() {
            self.resolve_first_click();
        }

        let Some(index) = self.view.locate(self.pointer) else {
            return ClickOutcome::Missed;
        };
        let Some(value) = self.view.reveal(index) else {
            return ClickOutcome::BlockedByFlag { index };
        };
        if !value.is_mine() {
            return ClickOutcome::Revealed { index, value };
        }

        if !self.status.is_lost() {
            self.status = GameStatus::Lost;
            match self.view.position_of(index) {
                Some(pos) => log::info!("mine revealed at {pos}, game lost"),
                None => log::info!("mine revealed, game lost"),
            }
        }
        ClickOutcome::Exploded { index }
    }

    fn toggle_flag_at_pointer(&mut self) -> ClickOutcome {
        let Some(index) = self.view.locate(self.pointer) else {
            return ClickOutcome::Missed;
        };
        match self.view.toggle_flag(index) {
            Some(DisplayState::Flagged) => ClickOutcome::Flagged { index },
            Some(DisplayState::Hidden) => ClickOutcome::Unflagged { index },
            Some(DisplayState::Revealed) | None => ClickOutcome::Unchanged { index },
        }
    }

    fn resolve_first_click(&mut self) {
        // The cell the press will reveal decides; the floored probe only
        // covers points that fall on a cell edge.
        let located = self
            .view
            .locate(self.pointer)
            .and_then(|index| self.view.position_of(index));
        let Some(pos) = located.or_else(|| self.pointer.to_position(self.config.size)) else {
            self.first_click = Some(FirstClickResolution::OutsideField);
            return;
        };

        let already_empty = self.grid.get(pos).is_some_and(CellValue::is_empty);
        let resolution = if already_empty {
            FirstClickResolution::AlreadyEmpty
        } else {
            match self.config.first_click {
                FirstClickPolicy::Regenerate { max_attempts } => {
                    self.regenerate_until_empty(pos, max_attempts)
                }
                FirstClickPolicy::SafeZone => {
                    let field = self.generator.generate_avoiding(
                        self.config.size,
                        self.config.mine_count,
                        self.seeds.next_seed(),
                        pos,
                    );
                    log_field(&field);
                    self.install(field);
                    FirstClickResolution::SafeZone
                }
            }
        };

        log::debug!("first click at {pos}: {resolution:?}");
        self.first_click = Some(resolution);
        self.status = GameStatus::Playing;
    }

    fn regenerate_until_empty(
        &mut self,
        pos: Position,
        max_attempts: u32,
    ) -> FirstClickResolution {
        let mut last = None;
        for attempt in 1..=max_attempts {
            let field = self.generator.generate_with_seed(
                self.config.size,
                self.config.mine_count,
                self.seeds.next_seed(),
            );
            if field.grid.get(pos).is_some_and(CellValue::is_empty) {
                log_field(&field);
                self.install(field);
                return FirstClickResolution::Regenerated { attempts: attempt };
            }
            last = Some(field);
        }

        if let Some(field) = last {
            log_field(&field);
            self.install(field);
        }
        log::warn!(
            "no field with an empty cell at {pos} after {max_attempts} attempts, keeping the last one"
        );
        FirstClickResolution::Exhausted {
            attempts: max_attempts,
        }
    }

    fn install(&mut self, field: GeneratedField) {
        self.view = FieldView::build_from(&field.grid);
        self.grid = field.grid;
        self.field_seed = Some(field.seed);
    }
}

fn log_field(field: &GeneratedField) {
    log::debug!(
        "generated {} field with {}/{} mines from seed {}",
        field.grid.size(),
        field.effective_mines(),
        field.requested_mines,
        field.seed
    );
}

#[cfg(test)]
mod tests {
    use minefield_core::FieldSize;
    use minefield_generator::MinePlacement;

    use super::*;
    use crate::{LostPolicy, TextureSelector};

    const CORNERS: &str = "
        *.......
        ........
        ........
        ........
        ........
        ........
        ........
        .......*
    ";

    fn centre(pos: Position, size: FieldSize) -> Ndc {
        let origin = Ndc::cell_origin(pos, size);
        let half = size.scale() / 2.0;
        Ndc::new(origin.x + half, origin.y + half)
    }

    fn corners_game(config: GameConfig) -> GameController {
        let grid: Grid = CORNERS.parse().unwrap();
        GameController::from_grid(config, grid, FieldSeed::from_phrase("corners")).unwrap()
    }

    fn click(game: &mut GameController, pos: Position, button: PointerButton) -> ClickOutcome {
        game.pointer_moved(centre(pos, game.config().size));
        game.press(button)
    }

    fn index(game: &GameController, pos: Position) -> usize {
        game.view().index_of(pos).unwrap()
    }

    fn texture(game: &GameController, pos: Position) -> TextureSelector {
        game.view().cell_at(pos).unwrap().texture()
    }

    #[test]
    fn test_new_session_awaits_first_click() {
        let game =
            GameController::with_seed(GameConfig::default(), FieldSeed::from_phrase("new")).unwrap();
        assert_eq!(game.status(), GameStatus::AwaitingFirstClick);
        assert_eq!(game.first_click_resolution(), None);
        assert_eq!(game.master_seed(), FieldSeed::from_phrase("new"));
        assert!(game.field_seed().is_some());
        assert!(game.grid().mine_count() >= 1);
        assert!(game.view().cells().iter().all(|cell| cell.display().is_hidden()));
    }

    #[test]
    fn test_same_master_seed_replays_session() {
        let master = FieldSeed::from_phrase("replay");
        let a = GameController::with_seed(GameConfig::default(), master).unwrap();
        let b = GameController::with_seed(GameConfig::default(), master).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.field_seed(), b.field_seed());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig {
            first_click: FirstClickPolicy::Regenerate { max_attempts: 0 },
            ..GameConfig::default()
        };
        assert_eq!(
            GameController::new(config).unwrap_err(),
            ConfigError::ZeroFirstClickAttempts
        );

        let grid = Grid::new(FieldSize::new(4).unwrap());
        assert!(
            GameController::from_grid(GameConfig::default(), grid, FieldSeed::from_phrase("x"))
                .unwrap_err()
                .is_grid_size_mismatch()
        );
    }

    #[test]
    fn test_first_click_regenerates_until_empty() {
        let mut game =
            GameController::with_seed(GameConfig::default(), FieldSeed::from_phrase("first-click"))
                .unwrap();
        let (pos, _) = game
            .grid()
            .iter()
            .find(|(_, value)| !value.is_empty())
            .unwrap();
        let first_seed = game.field_seed();

        let outcome = click(&mut game, pos, PointerButton::Primary);

        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.first_click_resolution().unwrap().is_regenerated());
        assert_ne!(game.field_seed(), first_seed);
        assert_eq!(game.grid()[pos], CellValue::EMPTY);
        assert_eq!(
            outcome,
            ClickOutcome::Revealed {
                index: index(&game, pos),
                value: CellValue::EMPTY,
            }
        );
        assert_eq!(texture(&game, pos), TextureSelector::Revealed(CellValue::Count(0)));
        for (cell_pos, value) in game.grid().iter() {
            assert_eq!(game.view().cell_at(cell_pos).unwrap().value(), value);
        }
    }

    #[test]
    fn test_first_click_on_empty_cell_keeps_field() {
        let mut game = corners_game(GameConfig::default());
        let before = game.grid().clone();
        let pos = Position::new(3, 4);

        let outcome = click(&mut game, pos, PointerButton::Primary);

        assert_eq!(game.grid(), &before);
        assert_eq!(
            game.first_click_resolution(),
            Some(FirstClickResolution::AlreadyEmpty)
        );
        assert_eq!(game.field_seed(), None);
        assert_eq!(
            outcome,
            ClickOutcome::Revealed {
                index: index(&game, pos),
                value: CellValue::EMPTY,
            }
        );
    }

    #[test]
    fn test_first_click_exhaustion_keeps_last_field() {
        // Every cell of a 2×2 field touches every other one, so any mine
        // leaves no empty cell.
        let config = GameConfig {
            size: FieldSize::new(2).unwrap(),
            mine_count: 40,
            first_click: FirstClickPolicy::Regenerate { max_attempts: 3 },
            ..GameConfig::default()
        };
        let mut game = GameController::with_seed(config, FieldSeed::from_phrase("crowded")).unwrap();
        let first_seed = game.field_seed();

        click(&mut game, Position::new(0, 0), PointerButton::Primary);

        assert_eq!(
            game.first_click_resolution(),
            Some(FirstClickResolution::Exhausted { attempts: 3 })
        );
        assert!(!game.status().is_awaiting_first_click());
        assert_ne!(game.field_seed(), first_seed);
        for (pos, value) in game.grid().iter() {
            assert_eq!(game.view().cell_at(pos).unwrap().value(), value);
        }
    }

    #[test]
    fn test_first_click_safe_zone() {
        let config = GameConfig {
            mine_count: 20,
            placement: MinePlacement::Distinct,
            first_click: FirstClickPolicy::SafeZone,
            ..GameConfig::default()
        };
        let mut game = corners_game(config);
        let pos = Position::new(0, 7);
        assert!(game.grid().is_mine(pos));

        let outcome = click(&mut game, pos, PointerButton::Primary);

        assert_eq!(
            game.first_click_resolution(),
            Some(FirstClickResolution::SafeZone)
        );
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(outcome.is_revealed());
        assert_eq!(game.grid()[pos], CellValue::EMPTY);
        assert!(game.grid().mines().all(|mine| !mine.is_within_one(pos)));
        assert_eq!(game.grid().mine_count(), 20);
    }

    #[test]
    fn test_first_click_just_inside_right_edge_is_safe() {
        let grid: Grid = "
            ........
            ........
            ........
            ........
            .......*
            ........
            ........
            ........
        "
        .parse()
        .unwrap();
        let config = GameConfig {
            size: grid.size(),
            mine_count: 1,
            ..GameConfig::default()
        };
        let mut game =
            GameController::from_grid(config, grid, FieldSeed::from_phrase("edge")).unwrap();
        let mine = Position::new(7, 3);
        let row_centre = centre(mine, game.config().size).y;
        let point = Ndc::new(1.0 - f32::EPSILON / 2.0, row_centre);

        // The floor conversion rounds out of the field, but the quad matches.
        assert_eq!(point.to_position(game.config().size), None);
        assert_eq!(game.view().locate(point), Some(index(&game, mine)));

        game.pointer_moved(point);
        let outcome = game.press(PointerButton::Primary);

        assert!(
            game.first_click_resolution()
                .is_some_and(|resolution| resolution.is_regenerated())
        );
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(
            outcome,
            ClickOutcome::Revealed {
                index: index(&game, mine),
                value: CellValue::EMPTY,
            }
        );
    }

    #[test]
    fn test_first_click_outside_field_stays_pending() {
        let mut game = corners_game(GameConfig::default());

        game.pointer_moved(Ndc::new(1.5, 0.0));
        assert_eq!(game.press(PointerButton::Primary), ClickOutcome::Missed);

        assert_eq!(game.status(), GameStatus::AwaitingFirstClick);
        assert_eq!(
            game.first_click_resolution(),
            Some(FirstClickResolution::OutsideField)
        );

        click(&mut game, Position::new(4, 4), PointerButton::Primary);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn test_first_click_on_cell_edge_is_consumed_but_missed() {
        let mut game = corners_game(GameConfig::default());

        // Lower-left corner of (4, 4): the probe floors into (4, 4), which is
        // empty, but no quad strictly contains the point.
        game.pointer_moved(Ndc::cell_origin(Position::new(4, 4), game.config().size));
        assert_eq!(game.press(PointerButton::Primary), ClickOutcome::Missed);

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.view().revealed_count(), 0);
    }

    #[test]
    fn test_mine_click_loses() {
        let mut game = corners_game(GameConfig::default());
        click(&mut game, Position::new(4, 4), PointerButton::Primary);

        let mine = Position::new(7, 0);
        let outcome = click(&mut game, mine, PointerButton::Primary);

        assert_eq!(outcome, ClickOutcome::Exploded { index: index(&game, mine) });
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(texture(&game, mine), TextureSelector::Revealed(CellValue::Mine));
    }

    #[test]
    fn test_lost_keep_playing_accepts_input() {
        let mut game = corners_game(GameConfig::default());
        click(&mut game, Position::new(4, 4), PointerButton::Primary);
        click(&mut game, Position::new(7, 0), PointerButton::Primary);
        assert!(!game.is_input_frozen());

        let pos = Position::new(6, 1);
        assert_eq!(
            click(&mut game, pos, PointerButton::Primary),
            ClickOutcome::Revealed {
                index: index(&game, pos),
                value: CellValue::Count(1),
            }
        );
        assert!(click(&mut game, Position::new(0, 7), PointerButton::Secondary).is_flagged());
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn test_lost_freeze_input_ignores_presses() {
        let config = GameConfig {
            lost: LostPolicy::FreezeInput,
            ..GameConfig::default()
        };
        let mut game = corners_game(config);
        click(&mut game, Position::new(4, 4), PointerButton::Primary);
        click(&mut game, Position::new(7, 0), PointerButton::Primary);
        assert!(game.is_input_frozen());

        let pos = Position::new(6, 1);
        assert_eq!(
            click(&mut game, pos, PointerButton::Primary),
            ClickOutcome::Ignored
        );
        assert_eq!(
            click(&mut game, pos, PointerButton::Secondary),
            ClickOutcome::Ignored
        );
        assert_eq!(texture(&game, pos), TextureSelector::Covered);
    }

    #[test]
    fn test_flag_toggle_and_blocked_reveal() {
        let mut game = corners_game(GameConfig::default());
        click(&mut game, Position::new(4, 4), PointerButton::Primary);
        assert_eq!(game.status(), GameStatus::Playing);

        let pos = Position::new(1, 6);
        let i = index(&game, pos);

        assert_eq!(
            click(&mut game, pos, PointerButton::Secondary),
            ClickOutcome::Flagged { index: i }
        );
        assert_eq!(texture(&game, pos), TextureSelector::Flag);
        assert_eq!(game.remaining_mines(), 1);

        assert_eq!(
            click(&mut game, pos, PointerButton::Primary),
            ClickOutcome::BlockedByFlag { index: i }
        );
        assert_eq!(texture(&game, pos), TextureSelector::Flag);

        assert_eq!(
            click(&mut game, pos, PointerButton::Secondary),
            ClickOutcome::Unflagged { index: i }
        );
        assert_eq!(texture(&game, pos), TextureSelector::Covered);
        assert_eq!(game.remaining_mines(), 2);
    }

    #[test]
    fn test_remaining_mines_counts_placed_mines() {
        // Two mines on the grid although eight were requested.
        let game = corners_game(GameConfig::default());
        assert_eq!(game.config().mine_count, 8);
        assert_eq!(game.remaining_mines(), 2);
    }

    #[test]
    fn test_regenerated_first_click_discards_flags() {
        let mut game = corners_game(GameConfig::default());
        assert!(click(&mut game, Position::new(3, 3), PointerButton::Secondary).is_flagged());
        assert!(click(&mut game, Position::new(0, 7), PointerButton::Secondary).is_flagged());
        assert_eq!(game.view().flag_count(), 2);

        // (1, 6) touches the mine at (0, 7), so the field is regenerated.
        let outcome = click(&mut game, Position::new(1, 6), PointerButton::Primary);

        assert!(
            game.first_click_resolution()
                .is_some_and(|resolution| resolution.is_regenerated())
        );
        assert!(outcome.is_revealed());
        assert_eq!(game.view().flag_count(), 0);
        assert_eq!(game.view().revealed_count(), 1);
        assert_eq!(texture(&game, Position::new(3, 3)), TextureSelector::Covered);
    }

    #[test]
    fn test_flagging_before_first_click_does_not_resolve_it() {
        let mut game = corners_game(GameConfig::default());
        assert!(click(&mut game, Position::new(2, 2), PointerButton::Secondary).is_flagged());
        assert_eq!(game.status(), GameStatus::AwaitingFirstClick);
        assert_eq!(game.first_click_resolution(), None);
    }

    #[test]
    fn test_secondary_click_on_revealed_cell_is_unchanged() {
        let mut game = corners_game(GameConfig::default());
        let pos = Position::new(4, 4);
        click(&mut game, pos, PointerButton::Primary);

        assert_eq!(
            click(&mut game, pos, PointerButton::Secondary),
            ClickOutcome::Unchanged { index: index(&game, pos) }
        );
        assert_eq!(texture(&game, pos), TextureSelector::Revealed(CellValue::EMPTY));
        assert_eq!(game.view().flag_count(), 0);
    }

    #[test]
    fn test_secondary_click_outside_field_misses() {
        let mut game = corners_game(GameConfig::default());
        game.pointer_moved(Ndc::new(0.0, -1.2));
        assert_eq!(game.press(PointerButton::Secondary), ClickOutcome::Missed);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut game = corners_game(GameConfig::default());
        click(&mut game, Position::new(4, 4), PointerButton::Primary);
        click(&mut game, Position::new(7, 0), PointerButton::Primary);
        click(&mut game, Position::new(0, 7), PointerButton::Secondary);
        assert!(game.status().is_lost());

        game.restart();

        assert_eq!(game.status(), GameStatus::AwaitingFirstClick);
        assert_eq!(game.first_click_resolution(), None);
        assert!(game.field_seed().is_some());
        assert_eq!(game.view(), &FieldView::build_from(game.grid()));
        assert_eq!(game.view().flag_count(), 0);
        assert_eq!(game.view().revealed_count(), 0);
    }
}
