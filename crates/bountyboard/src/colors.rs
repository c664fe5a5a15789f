//! Semantic color theme for consistent terminal output
//!
//! Centralized color constants with semantic meaning:
//! - `ACCENT` => magenta - program names, identifiers, menu highlights
//! - `SUCCESS` => green - eligible badges, success messages
//! - `WARNING` => yellow - warnings such as duplicate identifiers
//! - `FAIL` => red - ineligible badges, errors

use std::sync::LazyLock;

use owo_colors::Style;

/// Semantic color definitions for terminal output
pub struct SemanticColors {
    /// Magenta - program names, identifiers, active elements
    pub accent: Style,
    /// Green - eligible badges, success messages
    pub success: Style,
    /// Yellow - warnings
    pub warning: Style,
    /// Red - ineligible badges, errors
    pub fail: Style,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            accent: Style::new().magenta(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            fail: Style::new().red(),
        }
    }
}

/// Global default theme
pub static COLORS: LazyLock<SemanticColors> = LazyLock::new(SemanticColors::default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_colors_default() {
        let colors = SemanticColors::default();
        let _ = colors.accent;
        let _ = colors.success;
        let _ = colors.warning;
        let _ = colors.fail;
    }

    #[test]
    fn test_colors_global_is_accessible() {
        let _ = &COLORS.accent;
        let _ = &COLORS.success;
        let _ = &COLORS.warning;
        let _ = &COLORS.fail;
    }
}
