//! Minefield desktop application UI.
//!
//! # Design Notes
//! - One square field, sized to the window, with a status line underneath.
//! - Raw pointer events are normalized against the field rectangle and fed to
//!   the [`GameController`] in arrival order, so presses outside the field
//!   still reach the game (as misses).
//! - Input is applied after painting; a frame that changed the game requests
//!   another repaint.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use minefield_game::GameController;

use crate::{
    action::{self, ActionRequestQueue},
    ui::{self, skin::SkinTable},
};

#[derive(Debug)]
pub struct MinefieldApp {
    game: GameController,
    skins: SkinTable,
}

impl MinefieldApp {
    pub fn new(cc: &CreationContext<'_>, game: GameController) -> Self {
        let skins = SkinTable::from_visuals(&cc.egui_ctx.style().visuals);
        log::info!(
            "starting {} game, master seed {}",
            game.config().size,
            game.master_seed()
        );
        Self { game, skins }
    }
}

impl App for MinefieldApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
        action::handle_all(&mut self.game, &mut action_queue);

        self.skins.sync(&ctx.style().visuals);

        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &self.game, &mut self.skins, &mut action_queue);
        });

        if action::handle_all(&mut self.game, &mut action_queue) > 0 {
            ctx.request_repaint();
        }
    }
}
