//! QuillInk Core Library
//!
//! Host-agnostic pieces of the formula extension for canvas editors: the
//! shape record, the field seam, the placement tool, and the editor
//! contract the host implements.

pub mod editor;
pub mod field;
pub mod palette;
pub mod shape;
pub mod tool;

pub use editor::{Cursor, Editor, EditorError, ToolId};
pub use field::{ActiveField, FieldChange, FormulaField};
pub use palette::{PaletteEntry, ToolbarEntry, FORMULA_TOOLBAR, PALETTE, PALETTE_COLUMNS};
pub use shape::{Capabilities, FormulaProps, FormulaShape, PropsError, RenderMode, ShapeId};
pub use tool::{FormulaTool, ToolState};
