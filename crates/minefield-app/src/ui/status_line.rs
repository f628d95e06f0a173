use eframe::egui::{Align, Button, Label, Layout, RichText, Ui, Widget as _};
use minefield_game::{FirstClickResolution, GameController, GameStatus};

use crate::action::{Action, ActionRequestQueue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLineViewModel {
    status: GameStatus,
    remaining_mines: i64,
    first_click: Option<FirstClickResolution>,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn from_game(game: &GameController) -> Self {
        Self {
            status: game.status(),
            remaining_mines: game.remaining_mines(),
            first_click: game.first_click_resolution(),
        }
    }

    fn message(&self) -> String {
        match self.status {
            GameStatus::AwaitingFirstClick => "Click any cell to start.".to_owned(),
            GameStatus::Playing => match self.first_click {
                Some(FirstClickResolution::Exhausted { .. }) => format!(
                    "Mines left: {} (no safe start was found)",
                    self.remaining_mines
                ),
                _ => format!("Mines left: {}", self.remaining_mines),
            },
            GameStatus::Lost => "Boom! You hit a mine.".to_owned(),
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, action_queue: &mut ActionRequestQueue) {
    let text_size = ui.available_height() * 0.5;
    ui.horizontal_centered(|ui| {
        let color = if vm.status.is_lost() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().text_color()
        };
        Label::new(RichText::new(vm.message()).color(color).size(text_size)).ui(ui);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let button = Button::new(RichText::new("New game").size(text_size * 0.8));
            if ui.add(button).on_hover_text("Ctrl+N").clicked() {
                action_queue.request(Action::NewGame);
            }
        });
    });
}
