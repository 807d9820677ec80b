use std::collections::VecDeque;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::error::{DiffLintError, Result};

static LINE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([0-9]+):").expect("valid line number regex"));

/// Extract the source line number from a checker output line.
///
/// The first `:<digits>:` occurrence wins, so `path.py:12:5: msg` yields 12.
///
/// # Errors
/// Returns `MalformedFinding` if the pattern is missing or the number overflows.
pub fn parse_line_number(line: &str) -> Result<usize> {
    LINE_NUMBER
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| DiffLintError::MalformedFinding {
            line: line.to_string(),
        })
}

/// Per-checker findings keyed by source line number.
///
/// Each line holds a FIFO queue of raw checker lines. A queue is removed as
/// soon as it is drained, so a line without findings is always absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindingStore {
    by_line: IndexMap<usize, VecDeque<String>>,
}

impl FindingStore {
    /// Parse raw checker output, one finding per non-empty line.
    ///
    /// # Errors
    /// Returns `MalformedFinding` for the first non-empty line lacking `:<digits>:`.
    pub fn parse(output: &str) -> Result<Self> {
        let mut store = Self::default();
        for line in output.split('\n').filter(|line| !line.is_empty()) {
            let line_no = parse_line_number(line)?;
            store.push(line_no, line.to_string());
        }
        Ok(store)
    }

    /// Append a finding behind any already queued for the same line.
    pub fn push(&mut self, line: usize, message: String) {
        self.by_line.entry(line).or_default().push_back(message);
    }

    /// Oldest pending finding for `line`, if any.
    #[must_use]
    pub fn peek(&self, line: usize) -> Option<&str> {
        self.by_line
            .get(&line)
            .and_then(VecDeque::front)
            .map(String::as_str)
    }

    /// Remove and return the oldest pending finding for `line`.
    pub fn pop(&mut self, line: usize) -> Option<String> {
        let queue = self.by_line.get_mut(&line)?;
        let message = queue.pop_front();
        if queue.is_empty() {
            self.by_line.shift_remove(&line);
        }
        message
    }

    /// Total number of queued findings across all lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_line.values().map(VecDeque::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }

    /// Line numbers that still have findings, in first-report order.
    pub fn lines(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_line.keys().copied()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
