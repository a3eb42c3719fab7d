//! module Icons
//!
//! Glyphs that prefix console messages. Each one belongs to exactly one
//! semantic slot of the palette.

pub(crate) const ICON_SUCCESS: &str = "✓"; // U+2713
pub(crate) const ICON_ERROR: &str = "✗"; // U+2717
pub(crate) const ICON_WARN: &str = "⚠"; // U+26A0
pub(crate) const ICON_BULLET: &str = "•";
pub(crate) const MARK_UNKNOWN: &str = "--";
