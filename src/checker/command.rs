use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::config::CheckerConfig;
use crate::error::{DiffLintError, Result};

use super::Checker;

/// Runs an external checker command with the target file appended.
///
/// Only stdout is consumed. The exit status is ignored because linters exit
/// non-zero whenever they report anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandChecker {
    name: String,
    program: String,
    args: Vec<String>,
}

impl CommandChecker {
    #[must_use]
    pub fn new(name: impl Into<String>, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args,
        }
    }

    /// Build a checker from its `[checkers.<name>]` section.
    ///
    /// # Errors
    /// Returns a `Config` error if the command is empty.
    pub fn from_config(name: &str, config: &CheckerConfig) -> Result<Self> {
        let (program, args) = config.command.split_first().ok_or_else(|| {
            DiffLintError::Config(format!("checkers.{name}.command cannot be empty"))
        })?;
        Ok(Self::new(name, program.clone(), args.to_vec()))
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Checker for CommandChecker {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, file: &Path) -> Result<String> {
        debug!(
            checker = %self.name,
            program = %self.program,
            file = %file.display(),
            "running checker"
        );
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(file)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| DiffLintError::CheckerSpawn {
                checker: self.name.clone(),
                source,
            })?;
        debug!(
            checker = %self.name,
            status = ?output.status.code(),
            bytes = output.stdout.len(),
            "checker finished"
        );
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
