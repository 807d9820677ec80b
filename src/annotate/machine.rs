use tracing::trace;

use crate::diff::{DiffLine, HunkHeader, PREAMBLE_LINES, classify};
use crate::error::{DiffLintError, Result};
use crate::findings::Findings;
use crate::output::TwoPane;

/// Machine states. Exhaustion of the line stream is the only terminal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Passing the preamble through.
    #[default]
    DiffTop,
    /// Expecting the first hunk header.
    Header,
    /// Walking hunk lines.
    CodeLines,
    /// Stacking further findings under the current content line.
    ContinueMsgs,
}

/// How the raw-line pointer and the cursor move after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Stay on the same line.
    Stay,
    /// Next raw line; cursor unchanged.
    Line,
    /// Next raw line and next source line.
    LineAndCursor,
    /// Next raw line; cursor set to the hunk's `+` start.
    Seed(usize),
}

/// Result of one transition: at most one output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub next: State,
    pub emit: Option<String>,
    pub advance: Advance,
}

impl Step {
    const fn new(next: State, emit: Option<String>, advance: Advance) -> Self {
        Self {
            next,
            emit,
            advance,
        }
    }
}

/// Compute one transition from `state` at raw line `index`.
///
/// Only `findings` is mutated (a finding is popped when it is rendered); the
/// pointer and cursor moves are returned for the caller to apply.
///
/// # Errors
/// Returns `MalformedHunkHeader` when `state` is `Header` and `line` is not a
/// hunk header.
pub fn transition(
    state: State,
    index: usize,
    line: &str,
    cursor: usize,
    findings: &mut Findings,
    pane: &TwoPane,
) -> Result<Step> {
    match state {
        State::DiffTop => {
            let next = if index + 1 == PREAMBLE_LINES {
                State::Header
            } else {
                State::DiffTop
            };
            Ok(Step::new(next, Some(line.to_string()), Advance::Line))
        }
        State::Header => {
            let header =
                HunkHeader::parse_strict(line).ok_or_else(|| DiffLintError::MalformedHunkHeader {
                    index,
                    line: line.to_string(),
                })?;
            Ok(Step::new(
                State::CodeLines,
                Some(line.to_string()),
                Advance::Seed(header.new_start),
            ))
        }
        State::CodeLines => Ok(code_line(line, cursor, findings, pane)),
        State::ContinueMsgs => Ok(findings.take_next(cursor).map_or_else(
            || Step::new(State::CodeLines, None, Advance::LineAndCursor),
            |finding| {
                let annotation = pane.format("", &finding.message, finding.severity);
                Step::new(State::ContinueMsgs, Some(annotation), Advance::Stay)
            },
        )),
    }
}

fn code_line(line: &str, cursor: usize, findings: &mut Findings, pane: &TwoPane) -> Step {
    match classify(line) {
        DiffLine::Removed | DiffLine::Marker => {
            Step::new(State::CodeLines, Some(line.to_string()), Advance::Line)
        }
        DiffLine::HunkHeader(header) => Step::new(
            State::CodeLines,
            Some(line.to_string()),
            Advance::Seed(header.new_start),
        ),
        DiffLine::Content => findings.take_next(cursor).map_or_else(
            || {
                Step::new(
                    State::CodeLines,
                    Some(line.to_string()),
                    Advance::LineAndCursor,
                )
            },
            |finding| {
                let annotation = pane.format(line, &finding.message, finding.severity);
                Step::new(State::ContinueMsgs, Some(annotation), Advance::Stay)
            },
        ),
    }
}

/// Lazily produces the annotated diff, one output line per `next()`.
#[derive(Debug)]
pub struct AlignmentMachine {
    lines: Vec<String>,
    position: usize,
    cursor: usize,
    state: State,
    findings: Findings,
    pane: TwoPane,
    annotations: usize,
}

impl AlignmentMachine {
    #[must_use]
    pub fn new(lines: Vec<String>, findings: Findings, pane: TwoPane) -> Self {
        Self {
            lines,
            position: 0,
            cursor: 0,
            state: State::default(),
            findings,
            pane,
            annotations: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Post-change line number of the next content line.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of annotation lines produced so far.
    #[must_use]
    pub const fn annotations(&self) -> usize {
        self.annotations
    }

    /// Findings not yet rendered. After exhaustion these are the findings
    /// whose lines fall outside every hunk.
    #[must_use]
    pub const fn findings(&self) -> &Findings {
        &self.findings
    }

    #[must_use]
    pub fn into_findings(self) -> Findings {
        self.findings
    }

    fn apply(&mut self, advance: Advance) {
        match advance {
            Advance::Stay => {}
            Advance::Line => self.position += 1,
            Advance::LineAndCursor => {
                self.position += 1;
                self.cursor = self.cursor.saturating_add(1);
            }
            Advance::Seed(start) => {
                trace!(line = self.position, start, "cursor seeded from hunk header");
                self.position += 1;
                self.cursor = start;
            }
        }
    }
}

impl Iterator for AlignmentMachine {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.get(self.position)?;
            let step = match transition(
                self.state,
                self.position,
                line,
                self.cursor,
                &mut self.findings,
                &self.pane,
            ) {
                Ok(step) => step,
                Err(err) => {
                    self.position = self.lines.len();
                    return Some(Err(err));
                }
            };

            let annotated = matches!(step.next, State::ContinueMsgs);
            self.state = step.next;
            self.apply(step.advance);

            if let Some(out) = step.emit {
                if annotated {
                    self.annotations += 1;
                }
                return Some(Ok(out));
            }
        }
    }
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod tests;
