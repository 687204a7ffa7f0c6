//! Click-to-place tool for formula shapes.

use crate::editor::{Cursor, Editor, ToolId};
use crate::shape::FormulaShape;
use kurbo::Point;

/// Lifecycle hooks a canvas tool exposes to the host.
pub trait ToolState {
    /// Identifier the host registers the tool under.
    fn id(&self) -> ToolId;

    /// Called when the tool becomes the active tool.
    fn on_enter(&mut self, editor: &mut dyn Editor);

    /// Called for a pointer press, with the point in canvas coordinates.
    fn on_pointer_down(&mut self, editor: &mut dyn Editor, point: Point);
}

/// Places a default formula shape where the user clicks, opens it for
/// editing, and hands control back to the selection tool.
#[derive(Debug, Default)]
pub struct FormulaTool;

impl FormulaTool {
    pub fn new() -> Self {
        Self
    }
}

impl ToolState for FormulaTool {
    fn id(&self) -> ToolId {
        ToolId::FORMULA
    }

    fn on_enter(&mut self, editor: &mut dyn Editor) {
        editor.set_cursor(Cursor::Crosshair);
    }

    fn on_pointer_down(&mut self, editor: &mut dyn Editor, point: Point) {
        let shape = FormulaShape::new(point);
        let id = shape.id();
        match editor.create_shape(shape) {
            Ok(()) => editor.set_editing_shape(Some(id)),
            // No recovery path; the gesture still ends in the selection
            // tool.
            Err(err) => log::warn!("formula placement rejected: {err}"),
        }
        editor.set_current_tool(ToolId::SELECT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorError;
    use crate::shape::{FormulaProps, ShapeId};

    #[derive(Default)]
    struct TestEditor {
        shapes: Vec<FormulaShape>,
        editing: Option<ShapeId>,
        current_tool: Option<ToolId>,
        cursor: Cursor,
        reject_creation: bool,
    }

    impl Editor for TestEditor {
        fn create_shape(&mut self, shape: FormulaShape) -> Result<(), EditorError> {
            if self.reject_creation {
                return Err(EditorError::CreationRejected("page locked".to_string()));
            }
            self.shapes.push(shape);
            Ok(())
        }

        fn update_shape(&mut self, shape: FormulaShape) -> Result<(), EditorError> {
            match self.shapes.iter_mut().find(|s| s.id() == shape.id()) {
                Some(slot) => {
                    *slot = shape;
                    Ok(())
                }
                None => Err(EditorError::UnknownShape(shape.id())),
            }
        }

        fn set_editing_shape(&mut self, id: Option<ShapeId>) {
            self.editing = id;
        }

        fn editing_shape(&self) -> Option<ShapeId> {
            self.editing
        }

        fn set_current_tool(&mut self, tool: ToolId) {
            self.current_tool = Some(tool);
        }

        fn set_cursor(&mut self, cursor: Cursor) {
            self.cursor = cursor;
        }
    }

    #[test]
    fn test_enter_sets_crosshair_cursor() {
        let mut editor = TestEditor::default();
        let mut tool = FormulaTool::new();
        tool.on_enter(&mut editor);
        assert_eq!(editor.cursor, Cursor::Crosshair);
    }

    #[test]
    fn test_pointer_down_places_default_shape() {
        let mut editor = TestEditor::default();
        let mut tool = FormulaTool::new();

        tool.on_pointer_down(&mut editor, Point::new(100.0, 50.0));

        assert_eq!(editor.shapes.len(), 1);
        let shape = &editor.shapes[0];
        assert_eq!(shape.position, Point::new(100.0, 50.0));
        assert_eq!(shape.props, FormulaProps::default());
        assert_eq!(editor.editing, Some(shape.id()));
        assert_eq!(editor.current_tool, Some(ToolId::SELECT));
    }

    #[test]
    fn test_pointer_down_generates_fresh_ids() {
        let mut editor = TestEditor::default();
        let mut tool = FormulaTool::new();

        tool.on_pointer_down(&mut editor, Point::ZERO);
        tool.on_pointer_down(&mut editor, Point::new(10.0, 10.0));

        assert_ne!(editor.shapes[0].id(), editor.shapes[1].id());
    }

    #[test]
    fn test_rejected_creation_still_returns_to_select() {
        let mut editor = TestEditor {
            reject_creation: true,
            ..Default::default()
        };
        let mut tool = FormulaTool::new();

        tool.on_pointer_down(&mut editor, Point::new(5.0, 5.0));

        assert!(editor.shapes.is_empty());
        assert_eq!(editor.editing, None);
        assert_eq!(editor.current_tool, Some(ToolId::SELECT));
    }

    #[test]
    fn test_tool_id() {
        assert_eq!(FormulaTool::new().id(), ToolId::FORMULA);
    }
}
