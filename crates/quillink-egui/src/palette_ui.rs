//! Markup palette grid and the formula toolbar button.

use egui::{
    include_image, vec2, Align2, Color32, CornerRadius, CursorIcon, FontId, Image, Sense, Stroke,
    StrokeKind, Ui,
};
use quillink_core::{PaletteEntry, FORMULA_TOOLBAR, PALETTE, PALETTE_COLUMNS};

use crate::field::ACCENT;

/// Render the suggestion grid; returns the entry that was clicked.
pub fn palette_grid(ui: &mut Ui) -> Option<PaletteEntry> {
    let mut clicked = None;
    ui.spacing_mut().item_spacing = vec2(4.0, 4.0);
    for row in PALETTE.chunks(PALETTE_COLUMNS) {
        ui.horizontal(|ui| {
            for entry in row {
                if palette_button(ui, entry) {
                    clicked = Some(*entry);
                }
            }
        });
    }
    clicked
}

/// One bordered suggestion button.
fn palette_button(ui: &mut Ui, entry: &PaletteEntry) -> bool {
    let (rect, response) = ui.allocate_exact_size(vec2(34.0, 32.0), Sense::click());

    if ui.is_rect_visible(rect) {
        let (bg, border) = if response.hovered() {
            (Color32::from_gray(240), ACCENT)
        } else {
            (Color32::WHITE, Color32::from_gray(221))
        };
        ui.painter().rect_filled(rect, CornerRadius::same(4), bg);
        ui.painter().rect_stroke(
            rect,
            CornerRadius::same(4),
            Stroke::new(1.0, border),
            StrokeKind::Inside,
        );
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            entry.label,
            FontId::proportional(14.0),
            Color32::from_gray(40),
        );
    }

    let clicked = response.clicked();
    response
        .on_hover_text(format!("Insert {}", entry.markup))
        .on_hover_cursor(CursorIcon::PointingHand);
    clicked
}

/// Toolbar button for the formula tool. Returns true when clicked; the
/// host switches to the formula tool in response.
pub fn formula_tool_button(ui: &mut Ui, selected: bool) -> bool {
    egui_extras::install_image_loaders(ui.ctx());

    let (rect, response) = ui.allocate_exact_size(vec2(32.0, 32.0), Sense::click());

    if ui.is_rect_visible(rect) {
        let bg = if selected {
            ACCENT
        } else if response.hovered() {
            Color32::from_gray(235)
        } else {
            Color32::TRANSPARENT
        };
        ui.painter().rect_filled(rect, CornerRadius::same(6), bg);

        let tint = if selected {
            Color32::WHITE
        } else if response.hovered() {
            Color32::from_gray(40)
        } else {
            Color32::from_gray(80)
        };
        let icon_rect = egui::Rect::from_center_size(rect.center(), vec2(18.0, 18.0));
        Image::new(include_image!("../assets/equation.svg"))
            .fit_to_exact_size(vec2(18.0, 18.0))
            .tint(tint)
            .paint_at(ui, icon_rect);
    }

    let clicked = response.clicked();
    response.clone().on_hover_ui(|ui| {
        ui.horizontal(|ui| {
            ui.label(FORMULA_TOOLBAR.label);
            ui.label(
                egui::RichText::new(format!("({})", FORMULA_TOOLBAR.kbd))
                    .color(Color32::from_gray(128))
                    .small(),
            );
        });
    });
    response.on_hover_cursor(CursorIcon::PointingHand);
    clicked
}
