//! Terminal styling and color utilities.
//!
//! Only the dump labels are styled; parameter lines are always plain so they
//! can be pasted or piped into other tools.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Cyan for dump labels.
    pub const CYAN: &str = "\x1b[36m";
    /// Gray for secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Bright bold white for the range estimate.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub label: &'static str,
    pub muted: &'static str,
    pub emphasis: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            label: colors::CYAN,
            muted: colors::GRAY,
            emphasis: colors::WHITE_BOLD,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            label: "",
            muted: "",
            emphasis: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_is_empty() {
        let palette = ColorPalette::plain();
        assert!(palette.reset.is_empty());
        assert!(palette.label.is_empty());
        assert!(palette.muted.is_empty());
        assert!(palette.emphasis.is_empty());
    }

    #[test]
    fn colored_palette_uses_ansi_codes() {
        let palette = ColorPalette::colored();
        assert_eq!(palette.reset, colors::RESET);
        assert!(palette.label.starts_with("\x1b["));
    }
}
