mod diff;

pub use diff::{DiffProvider, GitDiff};
