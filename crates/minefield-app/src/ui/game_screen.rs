use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};
use minefield_game::GameController;

use super::{field, status_line};
use crate::{
    action::ActionRequestQueue,
    ui::{skin::SkinTable, status_line::StatusLineViewModel},
};

const STATUS_LINE_RATIO: f32 = 0.06;
const STATUS_LINE_MIN_HEIGHT: f32 = 24.0;

pub(crate) fn show(
    ui: &mut Ui,
    game: &GameController,
    skins: &mut SkinTable,
    action_queue: &mut ActionRequestQueue,
) {
    let status_vm = StatusLineViewModel::from_game(game);
    let spacing = ui.spacing().item_spacing;
    let available = ui.available_size();
    let status_height = f32::max(available.y * STATUS_LINE_RATIO, STATUS_LINE_MIN_HEIGHT);
    let field_side = f32::min(available.x, available.y - status_height - spacing.y).max(0.0);

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(field_side))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::exact(field_side))
                    .size(Size::exact(status_height))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.cell(|ui| {
                            field::show(ui, game, skins, action_queue);
                        });
                        strip.cell(|ui| {
                            status_line::show(ui, &status_vm, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
