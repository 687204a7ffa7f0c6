//! egui-backed formula field.

use egui::text::{CCursor, CCursorRange};
use egui::{
    Color32, CornerRadius, FontFamily, FontId, Frame, Margin, Stroke, TextEdit, Ui,
};
use kurbo::Size;
use quillink_core::{FormulaField, ShapeId};

use crate::fonts::FIELD_FONT_FAMILY;

/// Border color of the live field.
pub(crate) const ACCENT: Color32 = Color32::from_rgb(0, 150, 255);
/// Field font size in points.
const FONT_SIZE: f32 = 16.0;

/// Markup editor bound to a single shape.
///
/// Owns the markup buffer between frames and mirrors the caret out of the
/// `TextEdit` state, so palette insertions land where the user last left
/// the cursor.
pub struct MathField {
    id: egui::Id,
    buffer: String,
    /// Caret as a char index into `buffer`.
    cursor: usize,
    /// Caret to push into the widget state before the next frame.
    pending_cursor: Option<usize>,
    want_focus: bool,
    /// Markup changed outside the widget since the last frame.
    dirty: bool,
    rendered: Size,
}

impl MathField {
    /// Create a field for `shape` seeded with its current markup. The
    /// caret starts at the end of the text.
    pub fn new(shape: ShapeId, text: &str) -> Self {
        Self {
            id: egui::Id::new(("quillink-field", shape)),
            buffer: text.to_owned(),
            cursor: text.chars().count(),
            pending_cursor: None,
            want_focus: true,
            dirty: false,
            rendered: Size::ZERO,
        }
    }

    /// Run the field for one frame. Returns whether the markup changed,
    /// through typing or a pending palette insertion.
    pub fn show(&mut self, ui: &mut Ui) -> bool {
        let pending = std::mem::take(&mut self.dirty);

        if let Some(cursor) = self.pending_cursor.take() {
            let mut state = TextEdit::load_state(ui.ctx(), self.id).unwrap_or_default();
            state
                .cursor
                .set_char_range(Some(CCursorRange::one(CCursor::new(cursor))));
            state.store(ui.ctx(), self.id);
        }

        let font = FontId::new(FONT_SIZE, FontFamily::Name(FIELD_FONT_FAMILY.into()));
        let frame = Frame::new()
            .fill(Color32::WHITE)
            .stroke(Stroke::new(2.0, ACCENT))
            .corner_radius(CornerRadius::same(4))
            .inner_margin(Margin::symmetric(15, 10));

        let output = frame.show(ui, |ui| {
            let galley = ui.painter().layout_no_wrap(
                self.buffer.clone(),
                font.clone(),
                Color32::PLACEHOLDER,
            );
            TextEdit::singleline(&mut self.buffer)
                .id(self.id)
                .font(font.clone())
                .text_color(Color32::from_gray(30))
                .desired_width((galley.size().x + 8.0).max(120.0))
                .frame(false)
                .show(ui)
        });

        let text_output = output.inner;
        if self.want_focus {
            text_output.response.request_focus();
            self.want_focus = false;
        }
        if let Some(range) = text_output.state.cursor.char_range() {
            self.cursor = range.primary.index;
        }
        self.rendered = Size::new(
            output.response.rect.width() as f64,
            output.response.rect.height() as f64,
        );

        let typed = text_output.response.changed();
        if typed {
            // The frame rect lags a keystroke by one frame; queue one more
            // report so the stored size catches up.
            self.dirty = true;
        }
        pending || typed
    }
}

impl FormulaField for MathField {
    fn markup(&self) -> &str {
        &self.buffer
    }

    fn insert(&mut self, markup: &str) {
        let cursor = self.cursor.min(self.buffer.chars().count());
        let byte = self
            .buffer
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len());
        self.buffer.insert_str(byte, markup);
        self.cursor = cursor + markup.chars().count();
        self.pending_cursor = Some(self.cursor);
        self.dirty = true;
    }

    fn focus(&mut self) {
        self.want_focus = true;
    }

    fn rendered_size(&self) -> Size {
        self.rendered
    }
}
