mod store;

pub use store::{FindingStore, parse_line_number};

/// Severity class of a finding, one per checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Reported by the style checker.
    Warning,
    /// Reported by the correctness checker.
    Error,
}

/// A finding popped from a store, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

/// The two finding stores walked by the alignment machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub errors: FindingStore,
    pub warnings: FindingStore,
}

impl Findings {
    #[must_use]
    pub const fn new(errors: FindingStore, warnings: FindingStore) -> Self {
        Self { errors, warnings }
    }

    /// Pop the next finding for `line`. Errors drain before warnings.
    pub fn take_next(&mut self, line: usize) -> Option<Finding> {
        if let Some(message) = self.errors.pop(line) {
            return Some(Finding {
                severity: Severity::Error,
                message,
            });
        }
        self.warnings.pop(line).map(|message| Finding {
            severity: Severity::Warning,
            message,
        })
    }

    /// Total number of findings still queued in both stores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
