use std::sync::LazyLock;

use regex::Regex;

/// First hunk header: five opaque characters (the color escape), the
/// unified-diff marker with explicit counts, then three opaque characters
/// (the reset escape).
static STRICT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.{5}@@ -[0-9]+,[0-9]+ \+([0-9]+),([0-9]+) @@.{3}$").expect("Invalid regex")
});

/// Later hunk headers: any leading color escapes, optional counts, and an
/// optional function-context suffix.
static RELAXED_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\x1b\[[0-9;]*m)*@@ -[0-9]+(?:,[0-9]+)? \+([0-9]+)(?:,([0-9]+))? @@").expect("Invalid regex")
});

/// A parsed hunk header. Only the `+` side start is needed to seed the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub new_start: usize,
}

impl HunkHeader {
    /// Parse the header that must follow the diff preamble.
    #[must_use]
    pub fn parse_strict(line: &str) -> Option<Self> {
        Self::capture(&STRICT_HEADER, line)
    }

    /// Recognize a hunk header met while walking code lines.
    #[must_use]
    pub fn parse_relaxed(line: &str) -> Option<Self> {
        Self::capture(&RELAXED_HEADER, line)
    }

    /// The `+` range must fit in `usize`, so walking the hunk cannot overflow
    /// the cursor. A missing count means one line.
    fn capture(pattern: &Regex, line: &str) -> Option<Self> {
        let caps = pattern.captures(line)?;
        let new_start: usize = caps[1].parse().ok()?;
        let count: usize = caps.get(2).map_or(Some(1), |m| m.as_str().parse().ok())?;
        new_start.checked_add(count)?;
        Some(Self { new_start })
    }
}
