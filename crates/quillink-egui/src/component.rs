//! Formula shape rendering: editable and static surfaces.

use egui::{
    Align2, Color32, Context, CornerRadius, Frame, Margin, Order, Rect, Sense, Stroke, StrokeKind,
};
use quillink_core::{ActiveField, Editor, FieldChange, FormulaField, FormulaShape, RenderMode};

use crate::field::MathField;
use crate::fonts::{self, FIELD_FONT_FAMILY};
use crate::palette_ui;

/// Per-frame renderer for formula shapes.
///
/// Holds the live field binding while a shape is being edited; everything
/// drawn is a function of the shape record and the host's editing session.
#[derive(Default)]
pub struct FormulaComponent {
    field: ActiveField<MathField>,
}

impl FormulaComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `shape` into `screen_rect`, routing edits through `editor`.
    ///
    /// `screen_rect` is the host's mapping of `shape.bounds()` to screen
    /// space.
    pub fn render(
        &mut self,
        ctx: &Context,
        shape: &FormulaShape,
        screen_rect: Rect,
        editor: &mut dyn Editor,
    ) {
        fonts::install_field_font(ctx);
        match RenderMode::for_shape(shape.id(), editor.editing_shape()) {
            RenderMode::Editing => self.render_editing(ctx, shape, screen_rect, editor),
            RenderMode::Static => {
                if self.field.shape() == Some(shape.id()) {
                    self.field.clear();
                }
                render_static(ctx, shape, screen_rect);
            }
        }
    }

    fn render_editing(
        &mut self,
        ctx: &Context,
        shape: &FormulaShape,
        screen_rect: Rect,
        editor: &mut dyn Editor,
    ) {
        let id = shape.id();
        if self.field.shape() != Some(id) {
            self.field.bind(id, MathField::new(id, &shape.props.text));
        }

        let mut change = None;
        let mut insert = None;

        // Interactable foreground area: hosts that gate canvas input on
        // egui consumption see the pointer as taken while it is over the
        // surface.
        egui::Area::new(egui::Id::new(("formula-edit", id)))
            .fixed_pos(screen_rect.min)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                let Some(field) = self.field.get_mut(id) else {
                    return;
                };
                if field.show(ui) {
                    let size = field.rendered_size();
                    change = Some(FieldChange {
                        markup: field.markup().to_owned(),
                        width: size.width,
                        height: size.height,
                    });
                }

                ui.add_space(8.0);
                Frame::new()
                    .fill(Color32::WHITE)
                    .stroke(Stroke::new(1.0, Color32::from_gray(204)))
                    .corner_radius(CornerRadius::same(8))
                    .inner_margin(Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_min_width(240.0);
                        insert = palette_ui::palette_grid(ui);
                    });
            });

        if let Some(entry) = insert {
            // Stale or missing binding makes this a no-op.
            self.field.insert_markup(id, entry.markup);
        }
        if let Some(change) = change {
            let mut updated = shape.clone();
            updated.apply_field_change(change);
            if let Err(err) = editor.update_shape(updated) {
                log::warn!("formula update failed: {err}");
            }
        }
    }
}

/// Non-interactive markup display. The area opts out of interaction, so
/// pointer events fall through to the canvas.
pub fn render_static(ctx: &Context, shape: &FormulaShape, screen_rect: Rect) {
    egui::Area::new(egui::Id::new(("formula-static", shape.id())))
        .fixed_pos(screen_rect.min)
        .order(Order::Middle)
        .interactable(false)
        .show(ctx, |ui| {
            ui.allocate_rect(screen_rect, Sense::hover());
            let painter = ui.painter().with_clip_rect(screen_rect);
            painter.rect_filled(
                screen_rect,
                CornerRadius::same(4),
                Color32::from_rgba_unmultiplied(255, 255, 255, 230),
            );
            painter.rect_stroke(
                screen_rect,
                CornerRadius::same(4),
                Stroke::new(1.0, Color32::from_gray(221)),
                StrokeKind::Inside,
            );
            painter.text(
                screen_rect.center(),
                Align2::CENTER_CENTER,
                &shape.props.text,
                egui::FontId::new(16.0, egui::FontFamily::Name(FIELD_FONT_FAMILY.into())),
                Color32::from_gray(30),
            );
        });
}
