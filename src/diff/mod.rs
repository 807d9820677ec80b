//! Line framing and classification for `git diff --color` output.

mod hunk;
mod lines;

pub use hunk::HunkHeader;
pub use lines::{DiffLine, PREAMBLE_LINES, REMOVED_PREFIX, classify, split_lines};
