use eframe::egui::{
    self, Align2, Event, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use minefield_core::Ndc;
use minefield_game::{DrawCell, GameController, PointerButton, TextureSelector};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::skin::SkinTable,
};

const BORDER_WIDTH_RATIO: f32 = 0.04;
const GLYPH_SIZE_RATIO: f32 = 0.7;

/// Paints cell quads into a screen rectangle that stands for the `[-1, 1]²`
/// viewport.
struct CellPainter<'a> {
    painter: &'a Painter,
    field: Rect,
    skins: &'a mut SkinTable,
}

impl DrawCell for CellPainter<'_> {
    fn draw_cell(&mut self, origin: Ndc, scale: f32, texture: TextureSelector) {
        let rect = cell_rect(self.field, origin, scale);
        let skin = self.skins.lookup(texture);
        let side = rect.width();

        self.painter.rect_filled(rect, 0.0, skin.fill);
        if let Some(glyph) = skin.glyph {
            self.painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(side * GLYPH_SIZE_RATIO),
                skin.glyph_color,
            );
        }
        let border = Stroke::new(
            f32::max(side * BORDER_WIDTH_RATIO, 1.0),
            self.skins.border_color(),
        );
        self.painter
            .rect_stroke(rect, 0.0, border, StrokeKind::Inside);
    }
}

/// Maps a point in normalized device coordinates onto `field`.
fn to_screen(field: Rect, point: Ndc) -> Pos2 {
    Pos2::new(
        field.min.x + (point.x * 0.5 + 0.5) * field.width(),
        field.max.y - (point.y * 0.5 + 0.5) * field.height(),
    )
}

/// Maps a screen position to normalized device coordinates relative to
/// `field`. Positions outside `field` map outside `[-1, 1]`.
pub(crate) fn to_ndc(field: Rect, pos: Pos2) -> Ndc {
    Ndc::from_pixel(
        pos.x - field.min.x,
        pos.y - field.min.y,
        field.width(),
        field.height(),
    )
}

fn cell_rect(field: Rect, origin: Ndc, scale: f32) -> Rect {
    let lower_left = to_screen(field, origin);
    let upper_right = to_screen(field, Ndc::new(origin.x + scale, origin.y + scale));
    Rect::from_two_pos(lower_left, upper_right)
}

fn pointer_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        _ => None,
    }
}

/// Turns this frame's raw pointer events into actions, in arrival order.
fn collect_pointer_events(ui: &Ui, field: Rect, action_queue: &mut ActionRequestQueue) {
    ui.input(|i| {
        for event in &i.events {
            match *event {
                Event::PointerMoved(pos) => {
                    action_queue.request(Action::PointerMoved(to_ndc(field, pos)));
                }
                Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } => {
                    let Some(button) = pointer_button(button) else {
                        continue;
                    };
                    action_queue.request(Action::PointerMoved(to_ndc(field, pos)));
                    action_queue.request(Action::Press(button));
                }
                _ => {}
            }
        }
    });
}

pub(crate) fn show(
    ui: &mut Ui,
    game: &GameController,
    skins: &mut SkinTable,
    action_queue: &mut ActionRequestQueue,
) {
    let side = ui.available_size().min_elem();
    let (field, _response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click());

    collect_pointer_events(ui, field, action_queue);

    let mut painter = CellPainter {
        painter: ui.painter(),
        field,
        skins,
    };
    game.draw(&mut painter);
}
