use std::mem;

use minefield_core::Ndc;
use minefield_game::{ClickOutcome, GameController, PointerButton};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Action {
    PointerMoved(Ndc),
    Press(PointerButton),
    NewGame,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

/// Applies every queued action in order and returns how many were applied.
pub(crate) fn handle_all(
    game: &mut GameController,
    action_queue: &mut ActionRequestQueue,
) -> usize {
    let actions = action_queue.take_all();
    for action in &actions {
        handle(game, *action);
    }
    actions.len()
}

fn handle(game: &mut GameController, action: Action) {
    match action {
        Action::PointerMoved(point) => game.pointer_moved(point),
        Action::Press(button) => {
            let outcome = game.press(button);
            match outcome {
                ClickOutcome::Missed | ClickOutcome::Ignored => {
                    log::trace!("{button:?} press: {outcome:?}");
                }
                _ => log::debug!("{button:?} press: {outcome:?}"),
            }
        }
        Action::NewGame => game.restart(),
    }
}

#[cfg(test)]
mod tests {
    use minefield_core::{CellValue, Grid};
    use minefield_game::{GameConfig, GameStatus, TextureSelector};
    use minefield_generator::FieldSeed;

    use super::*;

    fn game() -> GameController {
        let grid: Grid = "
            *...
            ....
            ....
            ....
        "
        .parse()
        .unwrap();
        let config = GameConfig {
            size: grid.size(),
            mine_count: 1,
            ..GameConfig::default()
        };
        GameController::from_grid(config, grid, FieldSeed::from_phrase("actions")).unwrap()
    }

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::PointerMoved(Ndc::ORIGIN));
        queue.request(Action::NewGame);

        let drained = queue.take_all();
        assert_eq!(drained, vec![Action::PointerMoved(Ndc::ORIGIN), Action::NewGame]);

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }

    #[test]
    fn handle_all_applies_actions_in_order() {
        let mut game = game();
        let mut queue = ActionRequestQueue::default();
        // Flag the mine at (0, 3), then move away.
        queue.request(Action::PointerMoved(Ndc::new(-0.75, 0.75)));
        queue.request(Action::Press(PointerButton::Secondary));
        queue.request(Action::PointerMoved(Ndc::new(0.75, -0.75)));

        assert_eq!(handle_all(&mut game, &mut queue), 3);
        assert_eq!(game.pointer(), Ndc::new(0.75, -0.75));
        assert_eq!(game.view().flag_count(), 1);
        assert_eq!(game.status(), GameStatus::AwaitingFirstClick);
        assert_eq!(handle_all(&mut game, &mut queue), 0);
    }

    #[test]
    fn handle_primary_press_reveals_cell() {
        let mut game = game();
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::PointerMoved(Ndc::new(0.75, -0.75)));
        queue.request(Action::Press(PointerButton::Primary));
        handle_all(&mut game, &mut queue);

        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(
            game.view().cell(12).unwrap().texture(),
            TextureSelector::Revealed(CellValue::EMPTY)
        );
    }

    #[test]
    fn handle_new_game_restarts() {
        let mut game = game();
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::PointerMoved(Ndc::new(-0.75, 0.75)));
        queue.request(Action::Press(PointerButton::Primary));
        queue.request(Action::Press(PointerButton::Primary));
        handle_all(&mut game, &mut queue);
        assert_ne!(game.status(), GameStatus::AwaitingFirstClick);

        queue.request(Action::NewGame);
        handle_all(&mut game, &mut queue);
        assert_eq!(game.status(), GameStatus::AwaitingFirstClick);
        assert_eq!(game.view().revealed_count(), 0);
    }
}
