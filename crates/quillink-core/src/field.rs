//! Field seam between the shape integration and the markup widget.

use crate::shape::ShapeId;
use kurbo::Size;

/// An edit reported by the field widget.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    /// Markup source after the edit.
    pub markup: String,
    /// Rendered width in pixels.
    pub width: f64,
    /// Rendered height in pixels.
    pub height: f64,
}

/// The embedded markup editor.
///
/// Markup syntax lives entirely behind this trait; malformed input is the
/// widget's problem, never the integration's.
pub trait FormulaField {
    /// Current markup source.
    fn markup(&self) -> &str;

    /// Insert markup at the cursor position.
    fn insert(&mut self, markup: &str);

    /// Return keyboard focus to the field.
    fn focus(&mut self);

    /// Size of the rendered field in pixels.
    fn rendered_size(&self) -> Size;
}

/// Binding from the shape being edited to its live field widget.
///
/// Keyed by shape id so a binding left over from an earlier editing session
/// is never used for the wrong shape.
#[derive(Debug)]
pub struct ActiveField<F> {
    binding: Option<(ShapeId, F)>,
}

impl<F> Default for ActiveField<F> {
    fn default() -> Self {
        Self { binding: None }
    }
}

impl<F: FormulaField> ActiveField<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `field` the live widget for `shape`, replacing any previous
    /// binding.
    pub fn bind(&mut self, shape: ShapeId, field: F) {
        self.binding = Some((shape, field));
    }

    /// Drop the current binding.
    pub fn clear(&mut self) {
        self.binding = None;
    }

    /// The currently bound shape, if any.
    pub fn shape(&self) -> Option<ShapeId> {
        self.binding.as_ref().map(|(id, _)| *id)
    }

    /// The field bound to `shape`. `None` when unbound or bound to a
    /// different shape.
    pub fn get_mut(&mut self, shape: ShapeId) -> Option<&mut F> {
        match &mut self.binding {
            Some((id, field)) if *id == shape => Some(field),
            _ => None,
        }
    }

    /// Insert markup at the cursor of the field bound to `shape` and hand
    /// focus back to it. Without a usable binding this does nothing; the
    /// return value says whether the insertion happened.
    pub fn insert_markup(&mut self, shape: ShapeId, markup: &str) -> bool {
        match self.get_mut(shape) {
            Some(field) => {
                field.insert(markup);
                field.focus();
                true
            }
            None => false,
        }
    }
}
