//! Markup suggestion palette and toolbar registration data.

use crate::editor::ToolId;

/// One insertable markup suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Button label.
    pub label: &'static str,
    /// Markup inserted at the field cursor.
    pub markup: &'static str,
}

/// Suggestions offered next to the field while editing.
pub static PALETTE: [PaletteEntry; 12] = [
    PaletteEntry { label: "𝑓(𝑥)", markup: r"\frac{}{}" },
    PaletteEntry { label: "√", markup: r"\sqrt{}" },
    PaletteEntry { label: "𝑥²", markup: r"^{}" },
    PaletteEntry { label: "𝑥₁", markup: r"_{}" },
    PaletteEntry { label: "∫", markup: r"\int_{}^{}" },
    PaletteEntry { label: "∑", markup: r"\sum_{}^{}" },
    PaletteEntry { label: "α", markup: r"\alpha" },
    PaletteEntry { label: "β", markup: r"\beta" },
    PaletteEntry { label: "θ", markup: r"\theta" },
    PaletteEntry { label: "≤", markup: r"\leq" },
    PaletteEntry { label: "≥", markup: r"\geq" },
    PaletteEntry { label: "∞", markup: r"\infty" },
];

/// Palette grid width in buttons.
pub const PALETTE_COLUMNS: usize = 6;

/// Entry hosts mount in their toolbar and keyboard-shortcuts dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarEntry {
    pub tool: ToolId,
    pub label: &'static str,
    /// Keyboard shortcut that selects the tool.
    pub kbd: &'static str,
    /// Icon asset id, resolved by the UI layer.
    pub icon: &'static str,
}

pub const FORMULA_TOOLBAR: ToolbarEntry = ToolbarEntry {
    tool: ToolId::FORMULA,
    label: "Math",
    kbd: "m",
    icon: "equation-icon",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_fills_the_grid() {
        assert_eq!(PALETTE.len(), 2 * PALETTE_COLUMNS);
    }

    #[test]
    fn test_square_root_entry() {
        let entry = PALETTE.iter().find(|e| e.label == "√").unwrap();
        assert_eq!(entry.markup, r"\sqrt{}");
    }

    #[test]
    fn test_markup_is_unique() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a.markup, b.markup);
            }
        }
    }

    #[test]
    fn test_toolbar_entry() {
        assert_eq!(FORMULA_TOOLBAR.tool, ToolId::FORMULA);
        assert_eq!(FORMULA_TOOLBAR.label, "Math");
        assert_eq!(FORMULA_TOOLBAR.kbd, "m");
    }
}
