use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::{DiffLintError, Result};

/// Produces the colored unified diff of one file.
pub trait DiffProvider {
    /// Diff `file` against `reference`, with ANSI colors.
    ///
    /// # Errors
    /// Returns an error if the reference is invalid or the diff cannot be produced.
    fn colored_diff(&self, file: &Path, reference: &str) -> Result<String>;
}

/// Git implementation: `gix` locates the repository and resolves the
/// reference, the `git` binary renders the colored diff.
pub struct GitDiff {
    repo_path: PathBuf,
}

impl GitDiff {
    /// Create a new `GitDiff` for the repository containing the given path.
    ///
    /// # Errors
    /// Returns an error if no git repository is found.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path)
            .map_err(|e| DiffLintError::Git(format!("Failed to discover git repository: {e}")))?;
        if repo.workdir().is_none() {
            return Err(DiffLintError::Git("Repository has no working directory".into()));
        }
        Ok(Self {
            repo_path: repo.path().to_path_buf(),
        })
    }

    fn open_repo(&self) -> Result<gix::Repository> {
        gix::open(&self.repo_path)
            .map_err(|e| DiffLintError::Git(format!("Failed to open git repository: {e}")))
    }

    /// Check that `reference` names a commit.
    ///
    /// # Errors
    /// Returns an error if the reference cannot be parsed or peeled to a commit.
    pub fn verify_reference(&self, reference: &str) -> Result<()> {
        let repo = self.open_repo()?;
        let commit = repo
            .rev_parse_single(reference)
            .map_err(|e| {
                DiffLintError::Git(format!("Failed to parse reference '{reference}': {e}"))
            })?
            .object()
            .map_err(|e| {
                DiffLintError::Git(format!("Failed to get object for '{reference}': {e}"))
            })?
            .peel_to_commit()
            .map_err(|e| {
                DiffLintError::Git(format!("Failed to peel to commit '{reference}': {e}"))
            })?;
        debug!(reference, commit = %commit.id(), "resolved reference");
        Ok(())
    }
}

impl DiffProvider for GitDiff {
    fn colored_diff(&self, file: &Path, reference: &str) -> Result<String> {
        self.verify_reference(reference)?;

        debug!(reference, file = %file.display(), "running git diff");
        let output = Command::new("git")
            .args(["diff", "--color=always", "--no-ext-diff", reference, "--"])
            .arg(file)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| DiffLintError::Git(format!("Failed to execute git diff: {e}")))?;

        if !output.status.success() {
            return Err(DiffLintError::Git(format!(
                "git diff exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
