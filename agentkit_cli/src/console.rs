//! Semantic console output.
//!
//! Color carries meaning here, never decoration: green for success, red for
//! blocking errors, yellow for warnings, cyan for info and headers, magenta for
//! commands the user should run, and gray for skipped or inactive entries.
//!
//! Every printing method has a `render_*` twin that returns the text instead, so
//! output can be composed or inspected without touching stdout.

use std::env;
use std::ffi::OsStr;

use colored::{Color, Colorize};

use crate::icons::{ICON_BULLET, ICON_ERROR, ICON_SUCCESS, ICON_WARN, MARK_UNKNOWN};
use crate::palette::Palette;
use crate::style::SemanticStyle as _;

/// Column the dot leader of a status row pads labels out to.
pub const CHECK_LABEL_WIDTH: usize = 20;

/// Environment variable that disables color when set to any non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Result shown in a status row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Failed,
    Unknown,
}

impl From<Option<bool>> for CheckStatus {
    fn from(status: Option<bool>) -> Self {
        match status {
            Some(true) => CheckStatus::Ok,
            Some(false) => CheckStatus::Failed,
            None => CheckStatus::Unknown,
        }
    }
}

impl From<bool> for CheckStatus {
    fn from(ok: bool) -> Self {
        Some(ok).into()
    }
}

/// Decide whether color is wanted given the raw value of `NO_COLOR`.
pub fn color_enabled(no_color: Option<&OsStr>) -> bool {
    no_color.is_none_or(OsStr::is_empty)
}

/// Semantic printer bound to a palette and a color switch.
#[derive(Debug, Clone)]
pub struct Console {
    palette: Palette,
    use_color: bool,
}

impl Default for Console {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Console {
    pub fn new(palette: Palette, use_color: bool) -> Self {
        Self { palette, use_color }
    }

    /// Default palette, colored unless `NO_COLOR` is set.
    pub fn from_env() -> Self {
        let use_color = color_enabled(env::var_os(NO_COLOR_ENV).as_deref());
        Self::new(Palette::default(), use_color)
    }

    /// Console that never emits escape sequences.
    pub fn plain() -> Self {
        Self::new(Palette::default(), false)
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Make `colored` follow this console's decision rather than its own
    /// `NO_COLOR`, `CLICOLOR` and terminal detection.
    pub fn pin_colors(&self) {
        colored::control::set_override(self.use_color);
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    fn styled(&self, text: &str, style: impl FnOnce(&str, &Palette) -> colored::ColoredString) -> String {
        if self.use_color {
            style(text, &self.palette).to_string()
        } else {
            text.to_string()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    // --- semantic lines ---

    pub fn render_success(&self, msg: &str) -> String {
        self.styled(&format!("{ICON_SUCCESS} {msg}"), |t, p| t.success_style(p))
    }

    pub fn render_error(&self, msg: &str) -> String {
        self.styled(&format!("{ICON_ERROR} {msg}"), |t, p| t.error_style(p))
    }

    pub fn render_warn(&self, msg: &str) -> String {
        self.styled(&format!("{ICON_WARN} {msg}"), |t, p| t.warn_style(p))
    }

    pub fn render_info(&self, msg: &str) -> String {
        self.styled(msg, |t, p| t.info_style(p))
    }

    /// A command or step the user should carry out, indented.
    pub fn render_action(&self, msg: &str) -> String {
        self.styled(&format!("  {msg}"), |t, p| t.action_style(p))
    }

    /// Something that was skipped or is inactive, indented.
    pub fn render_skip(&self, msg: &str) -> String {
        self.styled(&format!("  {msg}"), |t, p| t.skip_style(p))
    }

    pub fn render_header(&self, msg: &str) -> String {
        self.styled(msg, |t, p| t.header_style(p))
    }

    /// Status row: `  label........ ✓ (detail)`.
    ///
    /// The dot leader pads the label to [`CHECK_LABEL_WIDTH`] UTF-16 code units
    /// and is never shorter than one dot. The detail is only shown for passing checks.
    pub fn render_check(&self, label: &str, status: CheckStatus, detail: Option<&str>) -> String {
        let dots = ".".repeat(CHECK_LABEL_WIDTH.saturating_sub(label.encode_utf16().count()).max(1));
        match status {
            CheckStatus::Ok => {
                let detail = detail
                    .filter(|d| !d.is_empty())
                    .map(|d| format!(" {}", self.styled(&format!("({d})"), |t, p| t.skip_style(p))))
                    .unwrap_or_default();
                let mark = self.styled(ICON_SUCCESS, |t, p| t.success_style(p));
                format!("  {label}{dots} {mark}{detail}")
            },
            CheckStatus::Failed => {
                let mark = self.styled(ICON_ERROR, |t, p| t.error_style(p));
                format!("  {label}{dots} {mark}")
            },
            CheckStatus::Unknown => {
                let mark = self.styled(MARK_UNKNOWN, |t, p| t.skip_style(p));
                format!("  {label}{dots} {mark}")
            },
        }
    }

    /// Lines of an error block: the failure, what went wrong, and how to fix it.
    ///
    /// The block is framed by blank lines. The "Fix with:" section only appears
    /// when there are commands to suggest.
    pub fn render_error_block<I, C>(&self, title: &str, items: &[I], commands: &[C]) -> Vec<String>
    where
        I: AsRef<str>,
        C: AsRef<str>,
    {
        let mut lines = vec![String::new(), self.render_error(title)];
        lines.extend(items.iter().map(|item| format!("  {ICON_BULLET} {}", item.as_ref())));
        if !commands.is_empty() {
            lines.push(String::new());
            lines.push("Fix with:".to_string());
            lines.extend(commands.iter().map(|cmd| self.render_action(cmd.as_ref())));
        }
        lines.push(String::new());
        lines
    }

    // --- printing ---

    pub fn success(&self, msg: &str) {
        println!("{}", self.render_success(msg));
    }

    pub fn error(&self, msg: &str) {
        println!("{}", self.render_error(msg));
    }

    pub fn warn(&self, msg: &str) {
        println!("{}", self.render_warn(msg));
    }

    pub fn info(&self, msg: &str) {
        println!("{}", self.render_info(msg));
    }

    pub fn action(&self, msg: &str) {
        println!("{}", self.render_action(msg));
    }

    pub fn skip(&self, msg: &str) {
        println!("{}", self.render_skip(msg));
    }

    pub fn header(&self, msg: &str) {
        println!("{}", self.render_header(msg));
    }

    pub fn check(&self, label: &str, status: impl Into<CheckStatus>, detail: Option<&str>) {
        println!("{}", self.render_check(label, status.into(), detail));
    }

    pub fn error_block<I, C>(&self, title: &str, items: &[I], commands: &[C])
    where
        I: AsRef<str>,
        C: AsRef<str>,
    {
        for line in self.render_error_block(title, items, commands) {
            println!("{line}");
        }
    }

    // --- raw colors for custom use ---

    pub fn green(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(text, Color::Cyan)
    }

    pub fn magenta(&self, text: &str) -> String {
        self.paint(text, Color::Magenta)
    }

    pub fn gray(&self, text: &str) -> String {
        self.paint(text, Color::BrightBlack)
    }

    pub fn bold(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn no_color_only_counts_when_non_empty() {
        assert!(color_enabled(None));
        assert!(color_enabled(Some(OsStr::new(""))));
        assert!(!color_enabled(Some(OsStr::new("1"))));
        let value = OsString::from("yes");
        assert!(!color_enabled(Some(value.as_os_str())));
    }

    #[test]
    fn plain_semantic_lines_carry_their_glyphs() {
        let console = Console::plain();
        assert_eq!(console.render_success("done"), "✓ done");
        assert_eq!(console.render_error("broken"), "✗ broken");
        assert_eq!(console.render_warn("careful"), "⚠ careful");
        assert_eq!(console.render_info("note"), "note");
        assert_eq!(console.render_action("cargo run"), "  cargo run");
        assert_eq!(console.render_skip("not configured"), "  not configured");
        assert_eq!(console.render_header("Status"), "Status");
    }

    #[test]
    fn check_pads_short_labels_to_width() {
        let console = Console::plain();
        assert_eq!(
            console.render_check("git", CheckStatus::Ok, None),
            format!("  git{} ✓", ".".repeat(17))
        );
        assert_eq!(
            console.render_check("token", CheckStatus::Failed, None),
            format!("  token{} ✗", ".".repeat(15))
        );
        assert_eq!(
            console.render_check("remote", CheckStatus::Unknown, None),
            format!("  remote{} --", ".".repeat(14))
        );
    }

    #[test]
    fn check_keeps_one_dot_for_long_labels() {
        let console = Console::plain();
        let label = "a-very-long-label-indeed";
        assert_eq!(console.render_check(label, CheckStatus::Ok, None), format!("  {label}. ✓"));
        let exact = "x".repeat(CHECK_LABEL_WIDTH);
        assert_eq!(console.render_check(&exact, CheckStatus::Ok, None), format!("  {exact}. ✓"));
    }

    #[test]
    fn check_measures_labels_in_utf16_units() {
        let console = Console::plain();
        assert_eq!(
            console.render_check("café", CheckStatus::Ok, None),
            format!("  café{} ✓", ".".repeat(16))
        );
        assert_eq!(
            console.render_check("🚀 deploy", CheckStatus::Ok, None),
            format!("  🚀 deploy{} ✓", ".".repeat(11))
        );
    }

    #[test]
    fn check_detail_only_on_success() {
        let console = Console::plain();
        assert!(console.render_check("git", CheckStatus::Ok, Some("2.44")).ends_with("✓ (2.44)"));
        assert!(console.render_check("git", CheckStatus::Ok, Some("")).ends_with('✓'));
        assert!(console.render_check("git", CheckStatus::Failed, Some("2.44")).ends_with('✗'));
        assert!(console.render_check("git", CheckStatus::Unknown, Some("2.44")).ends_with("--"));
    }

    #[test]
    fn check_status_from_tristate() {
        assert_eq!(CheckStatus::from(Some(true)), CheckStatus::Ok);
        assert_eq!(CheckStatus::from(Some(false)), CheckStatus::Failed);
        assert_eq!(CheckStatus::from(None), CheckStatus::Unknown);
        assert_eq!(CheckStatus::from(false), CheckStatus::Failed);
    }

    #[test]
    fn error_block_with_items_and_commands() {
        let console = Console::plain();
        let lines = console.render_error_block(
            "missing credentials",
            &["GITHUB_TOKEN is unset"],
            &["export GITHUB_TOKEN=...", "gh auth login"],
        );
        assert_eq!(
            lines,
            vec![
                "",
                "✗ missing credentials",
                "  • GITHUB_TOKEN is unset",
                "",
                "Fix with:",
                "  export GITHUB_TOKEN=...",
                "  gh auth login",
                "",
            ]
        );
    }

    #[test]
    fn error_block_without_commands_skips_fix_section() {
        let console = Console::plain();
        let none: &[&str] = &[];
        let lines = console.render_error_block("nothing to do", none, none);
        assert_eq!(lines, vec!["", "✗ nothing to do", ""]);
    }

    #[test]
    fn raw_helpers_are_identity_without_color() {
        let console = Console::plain();
        for painted in [
            console.green("x"),
            console.red("x"),
            console.yellow("x"),
            console.cyan("x"),
            console.magenta("x"),
            console.gray("x"),
            console.bold("x"),
        ] {
            assert_eq!(painted, "x");
        }
    }

    #[test]
    fn colored_output_wraps_in_escape_codes() {
        colored::control::set_override(true);
        let console = Console::plain().with_color(true);
        assert_eq!(console.render_success("ok"), "\u{1b}[32m✓ ok\u{1b}[0m");
        assert_eq!(console.red("stop"), "\u{1b}[31mstop\u{1b}[0m");
        assert_eq!(console.gray("off"), "\u{1b}[90moff\u{1b}[0m");
        assert!(console.render_header("Title").contains("\u{1b}[1;36m"));
    }
}
