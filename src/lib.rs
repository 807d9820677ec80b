pub mod annotate;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod findings;
pub mod git;
pub mod logging;
pub mod output;

pub use error::{DiffLintError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_MALFORMED_INPUT: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
