use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::annotate::AlignmentMachine;
use crate::checker::{Checker, CommandChecker};
use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::diff::split_lines;
use crate::findings::{FindingStore, Findings};
use crate::git::{DiffProvider, GitDiff};
use crate::output::TwoPane;
use crate::{DiffLintError, EXIT_CONFIG_ERROR, EXIT_MALFORMED_INPUT, EXIT_SUCCESS, Result};

/// External tools feeding one annotation run.
pub struct Sources<'a> {
    /// Findings rendered as warnings.
    pub style: &'a dyn Checker,
    /// Findings rendered as errors.
    pub correctness: &'a dyn Checker,
    pub diff: &'a dyn DiffProvider,
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnnotateSummary {
    /// Lines written to the output.
    pub lines: usize,
    /// Annotation lines among them.
    pub annotations: usize,
    /// Findings on lines outside every hunk.
    pub unreached: usize,
}

#[must_use]
pub fn run_annotate(cli: &Cli) -> i32 {
    match run_annotate_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_malformed_input() {
                EXIT_MALFORMED_INPUT
            } else {
                EXIT_CONFIG_ERROR
            }
        }
    }
}

pub(crate) fn run_annotate_impl(cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let reference = cli
        .reference
        .clone()
        .unwrap_or_else(|| config.diff.reference.clone());

    // 2. Build collaborators
    let style = CommandChecker::from_config("style", &config.checkers.style)?;
    let correctness = CommandChecker::from_config("correctness", &config.checkers.correctness)?;
    let git = GitDiff::discover(Path::new("."))?;
    let sources = Sources {
        style: &style,
        correctness: &correctness,
        diff: &git,
    };
    let pane = TwoPane::new(&config.layout, &config.colors);

    // 3. Annotate to stdout
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match annotate_file(&cli.file, &reference, &sources, pane, &mut out) {
        Ok(summary) => {
            debug!(
                lines = summary.lines,
                annotations = summary.annotations,
                unreached = summary.unreached,
                "annotation finished"
            );
            Ok(EXIT_SUCCESS)
        }
        Err(DiffLintError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(EXIT_SUCCESS),
        Err(e) => Err(e),
    }
}

/// Load configuration according to the CLI flags.
///
/// # Errors
/// Returns an error if an explicit or discovered config cannot be loaded.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Collect findings, diff `file` and write the annotated diff to `out`.
///
/// Both checkers are parsed before the diff is requested, so malformed
/// checker output aborts before anything is written. Lines already written
/// when a malformed hunk header is met stay written.
///
/// # Errors
/// Returns the first collaborator, format or write error.
pub fn annotate_file<W: Write>(
    file: &Path,
    reference: &str,
    sources: &Sources<'_>,
    pane: TwoPane,
    out: &mut W,
) -> Result<AnnotateSummary> {
    let warnings = collect_findings(sources.style, file)?;
    let errors = collect_findings(sources.correctness, file)?;
    let diff = sources.diff.colored_diff(file, reference)?;

    let mut machine = AlignmentMachine::new(split_lines(&diff), Findings::new(errors, warnings), pane);
    let mut lines = 0;
    for item in machine.by_ref() {
        match item {
            Ok(line) => {
                writeln!(out, "{line}")?;
                lines += 1;
            }
            Err(e) => {
                out.flush()?;
                return Err(e);
            }
        }
    }
    out.flush()?;

    let annotations = machine.annotations();
    let unreached = machine.into_findings();
    if !unreached.is_empty() {
        debug!(
            count = unreached.len(),
            error_lines = ?unreached.errors.lines().collect::<Vec<_>>(),
            warning_lines = ?unreached.warnings.lines().collect::<Vec<_>>(),
            "findings outside the diff were not shown"
        );
    }

    Ok(AnnotateSummary {
        lines,
        annotations,
        unreached: unreached.len(),
    })
}

fn collect_findings(checker: &dyn Checker, file: &Path) -> Result<FindingStore> {
    let output = checker.run(file)?;
    let store = FindingStore::parse(&output)?;
    debug!(checker = checker.name(), findings = store.len(), "parsed checker output");
    Ok(store)
}

#[cfg(test)]
#[path = "annotate_tests.rs"]
mod tests;
