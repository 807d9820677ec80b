use crate::config::{ColorsConfig, LayoutConfig};
use crate::findings::Severity;

use super::{Color, ansi};

/// Invisible width credited per color-start escape (`ESC[3Nm` is five chars).
const COLOR_START_WIDTH: isize = 5;
/// Invisible width credited per `ESC[m` reset.
const RESET_WIDTH: isize = 3;
/// Width withheld per tab, which the terminal expands to several columns.
const TAB_WIDTH: isize = 6;

/// Renders an annotation as the original diff text, padded to a fixed
/// column, followed by the colored checker message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoPane {
    text_width: usize,
    column_width: usize,
    warning: Color,
    error: Color,
}

impl Default for TwoPane {
    fn default() -> Self {
        Self::new(&LayoutConfig::default(), &ColorsConfig::default())
    }
}

impl TwoPane {
    #[must_use]
    pub const fn new(layout: &LayoutConfig, colors: &ColorsConfig) -> Self {
        Self {
            text_width: layout.text_width,
            column_width: layout.column_width,
            warning: colors.warning,
            error: colors.error,
        }
    }

    #[must_use]
    pub const fn color_for(&self, severity: Severity) -> Color {
        match severity {
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }

    /// Render `message` beside `text`.
    ///
    /// `text` is clipped to `text_width` raw characters. The pad width is
    /// computed from the whole unclipped text so that escapes and tabs do not
    /// shift the message column.
    #[must_use]
    pub fn format(&self, text: &str, message: &str, severity: Severity) -> String {
        let clipped: String = text.chars().take(self.text_width).collect();
        let width = self.pad_width(text);
        format!(
            "{clipped:<width$} {}",
            self.color_for(severity).paint(message)
        )
    }

    fn pad_width(&self, text: &str) -> usize {
        let adjustment = COLOR_START_WIDTH
            .saturating_mul(count(text, ansi::COLOR_START))
            .saturating_add(RESET_WIDTH.saturating_mul(count(text, ansi::RESET)))
            .saturating_sub(TAB_WIDTH.saturating_mul(count(text, "\t")));
        let column = isize::try_from(self.column_width).unwrap_or(isize::MAX);
        usize::try_from(column.saturating_add(adjustment)).unwrap_or(0)
    }
}

fn count(text: &str, needle: &str) -> isize {
    isize::try_from(text.matches(needle).count()).unwrap_or(isize::MAX)
}

#[cfg(test)]
#[path = "two_pane_tests.rs"]
mod tests;
