//! QuillInk egui binding
//!
//! Renders the formula shape's editable and static surfaces, the markup
//! suggestion palette, and the toolbar button, for hosts whose chrome runs
//! on egui.

pub mod component;
pub mod field;
pub mod fonts;
pub mod palette_ui;

pub use component::{render_static, FormulaComponent};
pub use field::MathField;
pub use fonts::{install_field_font, FIELD_FONT_FAMILY};
pub use palette_ui::{formula_tool_button, palette_grid};
