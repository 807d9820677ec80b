mod command;

pub use command::CommandChecker;

use std::path::Path;

use crate::error::Result;

/// Produces raw line-oriented findings for a file.
pub trait Checker {
    /// Short name used in diagnostics (`style`, `correctness`).
    fn name(&self) -> &str;

    /// Run the checker against `file` and return its raw output.
    ///
    /// # Errors
    /// Returns an error if the checker cannot be started.
    fn run(&self, file: &Path) -> Result<String>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
