//! Styling helpers for semantic console output.
//!
//! The [`SemanticStyle`] trait applies a [`Palette`] slot to a piece of text via
//! the `colored` crate. It is implemented for `&str` so string literals can be
//! styled directly.

use colored::{ColoredString, Colorize};

use crate::palette::Palette;

/// Convenience trait for applying semantic colors to text output.
pub trait SemanticStyle {
    fn success_style(&self, palette: &Palette) -> ColoredString;
    fn error_style(&self, palette: &Palette) -> ColoredString;
    fn warn_style(&self, palette: &Palette) -> ColoredString;
    fn info_style(&self, palette: &Palette) -> ColoredString;
    fn action_style(&self, palette: &Palette) -> ColoredString;
    fn skip_style(&self, palette: &Palette) -> ColoredString;
    fn header_style(&self, palette: &Palette) -> ColoredString;
}

impl SemanticStyle for &str {
    fn success_style(&self, palette: &Palette) -> ColoredString {
        self.color(palette.success)
    }
    fn error_style(&self, palette: &Palette) -> ColoredString {
        self.color(palette.error)
    }
    fn warn_style(&self, palette: &Palette) -> ColoredString {
        self.color(palette.warn)
    }
    fn info_style(&self, palette: &Palette) -> ColoredString {
        self.color(palette.info)
    }
    fn action_style(&self, palette: &Palette) -> ColoredString {
        self.color(palette.action)
    }
    fn skip_style(&self, palette: &Palette) -> ColoredString {
        self.color(palette.skip)
    }
    fn header_style(&self, palette: &Palette) -> ColoredString {
        self.bold().color(palette.info)
    }
}
