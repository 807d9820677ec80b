use super::HunkHeader;

/// Number of opaque lines git writes before the first hunk header
/// (`diff --git`, `index`, `---`, `+++`).
pub const PREAMBLE_LINES: usize = 4;

/// Red color escape followed by the deletion marker.
pub const REMOVED_PREFIX: &str = "\x1b[31m-";

const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Classification of a diff line met after the first hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLine {
    /// A deleted line; occupies no post-change line number.
    Removed,
    /// Another hunk header; re-seeds the cursor.
    HunkHeader(HunkHeader),
    /// `\ No newline at end of file`; occupies no line number.
    Marker,
    /// Context or added line.
    Content,
}

/// Classify a line from the body of the diff.
#[must_use]
pub fn classify(line: &str) -> DiffLine {
    if line.starts_with(REMOVED_PREFIX) {
        return DiffLine::Removed;
    }
    if let Some(header) = HunkHeader::parse_relaxed(line) {
        return DiffLine::HunkHeader(header);
    }
    if strip_leading_escapes(line).starts_with(NO_NEWLINE_MARKER) {
        return DiffLine::Marker;
    }
    DiffLine::Content
}

/// Split diff text into raw lines.
///
/// A final newline terminates the last line rather than starting an empty one,
/// so writing every line back with `\n` reproduces the input exactly.
#[must_use]
pub fn split_lines(diff: &str) -> Vec<String> {
    if diff.is_empty() {
        return Vec::new();
    }
    let body = diff.strip_suffix('\n').unwrap_or(diff);
    body.split('\n').map(str::to_string).collect()
}

fn strip_leading_escapes(mut line: &str) -> &str {
    while let Some(rest) = line.strip_prefix("\x1b[") {
        match rest.find('m') {
            Some(end) if rest[..end].bytes().all(|b| b.is_ascii_digit() || b == b';') => {
                line = &rest[end + 1..];
            }
            _ => break,
        }
    }
    line
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
