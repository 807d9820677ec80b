mod two_pane;

pub use two_pane::TwoPane;

use serde::Deserialize;

/// ANSI escape fragments the layout math accounts for.
pub mod ansi {
    /// Prefix of every foreground color escape git emits (`ESC[31m`, `ESC[36m`, ...).
    pub const COLOR_START: &str = "\x1b[3";
    /// Short reset escape used by git and by annotation blocks.
    pub const RESET: &str = "\x1b[m";
}

/// Colors available for annotation blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Cyan,
    Green,
    Red,
    Yellow,
}

impl Color {
    /// SGR foreground code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Cyan => 36,
            Self::Green => 32,
            Self::Red => 31,
            Self::Yellow => 33,
        }
    }

    /// Wrap `text` in this color followed by a reset.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("\x1b[{}m{text}{}", self.code(), ansi::RESET)
    }
}
