//! Host editor contract the shape and tool integrations drive.

use crate::shape::{FormulaShape, ShapeId};
use thiserror::Error;

/// Identifier a tool is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToolId(pub &'static str);

impl ToolId {
    /// The host's default selection tool.
    pub const SELECT: ToolId = ToolId("select");
    /// The formula placement tool.
    pub const FORMULA: ToolId = ToolId("formula");
}

/// Pointer cursors a tool can ask the host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Crosshair,
}

/// Errors the host raises for shape operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The host refused to create the shape, e.g. the page is locked.
    #[error("shape creation rejected: {0}")]
    CreationRejected(String),
    /// No shape with this id exists.
    #[error("unknown shape {0}")]
    UnknownShape(ShapeId),
}

/// The host editor surface.
///
/// Implemented by the host over its scene graph, selection state, and tool
/// chrome. `update_shape` is the host's transactional write: the record
/// replaces the stored shape with the same id, so undo/redo and persistence
/// stay the host's business.
pub trait Editor {
    /// Add a shape to the scene.
    fn create_shape(&mut self, shape: FormulaShape) -> Result<(), EditorError>;

    /// Write an updated record over the existing shape with the same id.
    fn update_shape(&mut self, shape: FormulaShape) -> Result<(), EditorError>;

    /// Start an editing session for a shape, or end the current one with
    /// `None`.
    fn set_editing_shape(&mut self, id: Option<ShapeId>);

    /// The shape currently being edited.
    fn editing_shape(&self) -> Option<ShapeId>;

    /// Switch the active tool.
    fn set_current_tool(&mut self, tool: ToolId);

    /// Change the pointer cursor.
    fn set_cursor(&mut self, cursor: Cursor);
}
